//! ratatui rendering of the application state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::api::lyrics::LyricsResult;
use crate::api::search::SongSummary;
use crate::ui::app::{App, View};
use crate::ui::styles::Palette;

pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    frame.render_widget(Block::default().style(palette.base), frame.area());

    let [input_area, recent_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_input(frame, app, &palette, input_area);
    draw_recent(frame, app, &palette, recent_area);
    match &app.view {
        View::Results => draw_results(frame, app, &palette, main_area),
        View::Lyrics {
            artist,
            title,
            result,
            scroll,
        } => draw_lyrics(frame, &palette, main_area, artist, title, result, *scroll),
    }
    draw_status(frame, app, &palette, status_area);
}

fn draw_input(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let style = if app.input_active {
        palette.accent
    } else {
        palette.dim
    };
    let input = Paragraph::new(app.query.as_str())
        .style(palette.base)
        .block(Block::bordered().title("Search").border_style(style));
    frame.render_widget(input, area);
    if app.input_active {
        let x = area.x + 1 + app.query.chars().count() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_recent(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    if app.recent.is_empty() {
        return;
    }
    let mut spans = vec![Span::styled("recent: ", palette.dim)];
    for (i, term) in app.recent.iter().enumerate() {
        spans.push(Span::styled(format!("[{}] ", i + 1), palette.accent));
        spans.push(Span::styled(format!("{term}  "), palette.base));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_results(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(page) = app.pager.page() else {
        let help = Paragraph::new(
            "Type a search term and press Enter.\n\
             /: edit search  1-6: recent search  t: theme  q: quit",
        )
        .style(palette.dim);
        frame.render_widget(help, area);
        return;
    };

    if page.data.is_empty() {
        frame.render_widget(
            Paragraph::new("No matching songs.").style(palette.dim),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = page
        .data
        .iter()
        .map(|song| ListItem::new(Text::from(song_lines(song, palette))))
        .collect();
    let list = List::new(items).highlight_style(palette.selected);
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Lines for one song entry: "artist - title" plus the album-art URL as a
/// dimmed second line when the summary carries one.
pub fn song_lines(song: &SongSummary, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(song.artist.name.clone(), palette.accent),
        Span::styled(" - ", palette.dim),
        Span::styled(song.title.clone(), palette.base),
    ])];
    if !song.album.cover.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", song.album.cover),
            palette.dim,
        )));
    }
    lines
}

fn draw_lyrics(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    artist: &str,
    title: &str,
    result: &LyricsResult,
    scroll: u16,
) {
    let block = Block::bordered()
        .title(format!("{artist} - {title}"))
        .border_style(palette.accent);
    let widget = match result {
        LyricsResult::Lyrics(lines) => {
            let width = area.width.saturating_sub(2).max(1) as usize;
            Paragraph::new(Text::from(wrap_lines(lines, width)))
                .style(palette.base)
                .scroll((scroll, 0))
        }
        LyricsResult::NotFound(message) => {
            Paragraph::new(message.as_str()).style(palette.error)
        }
    };
    frame.render_widget(widget.block(block), area);
}

/// Wrap lyric lines to the pane width, keeping empty lines as-is.
pub fn wrap_lines(lines: &[String], width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_empty() {
            out.push(Line::raw(""));
        } else {
            for wrapped in textwrap::wrap(line, width) {
                out.push(Line::raw(wrapped.into_owned()));
            }
        }
    }
    out
}

fn draw_status(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), palette.error))
    } else if app.loading {
        Line::from(Span::styled("loading...", palette.dim))
    } else {
        let mut hints = Vec::new();
        if app.pager.can_prev() {
            hints.push("p: prev page");
        }
        if app.pager.can_next() {
            hints.push("n: next page");
        }
        if matches!(app.view, View::Lyrics { .. }) {
            hints.push("Esc: back");
        }
        Line::from(Span::styled(hints.join("  "), palette.dim))
    };
    frame.render_widget(Paragraph::new(line), area);
}
