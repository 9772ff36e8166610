use ratatui::style::{Color, Modifier, Style};

use crate::store::theme::Theme;

pub struct Palette {
    pub base: Style,
    pub accent: Style,
    pub dim: Style,
    pub selected: Style,
    pub error: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                dim: Style::default().fg(Color::DarkGray),
                selected: Style::default().fg(Color::White).bg(Color::Blue),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                dim: Style::default().fg(Color::Gray),
                selected: Style::default().fg(Color::Black).bg(Color::Cyan),
                error: Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            },
        }
    }
}
