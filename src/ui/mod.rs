//! Full-screen TUI for searching songs and reading lyrics.
//!
//! The event loop uses `tokio::select!` over two channels:
//! - user input, forwarded from a dedicated crossterm polling thread
//! - completed fetches, sent back by spawned request tasks
//!
//! Fetches run in background tasks so typing stays responsive while a
//! request is in flight; stale responses are discarded by generation
//! inside [`App::apply`].

pub mod app;
pub mod plain;
pub mod styles;
pub mod view;

pub use app::{App, FetchOutcome, FetchRequest};

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::Config;
use crate::api::{fetch_lyrics, fetch_page};
use crate::store::FileStore;

pub async fn run(
    cfg: Config,
    mut store: FileStore,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    enable_raw_mode().map_err(to_boxed_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(to_boxed_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(to_boxed_err)?;

    let result = run_loop(&cfg, &mut store, &mut terminal).await;

    disable_raw_mode().map_err(to_boxed_err)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(to_boxed_err)?;
    result
}

async fn run_loop<B: ratatui::backend::Backend>(
    cfg: &Config,
    store: &mut FileStore,
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Single background thread polls crossterm events and forwards them to
    // the async runtime; it exits once the receiver is dropped.
    let (event_tx, mut event_rx) = mpsc::channel(32);
    thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.try_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {}
                },
                Ok(false) => {}
                Err(_) => thread::sleep(Duration::from_millis(100)),
            }
        }
    });

    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FetchOutcome>(8);

    let mut app = App::new(&*store);
    if let Some(term) = cfg.term.clone() {
        app.query = term;
        if let Some((generation, request)) = app.submit(store) {
            spawn_fetch(generation, request, cfg.api.clone(), outcome_tx.clone());
        }
    }
    terminal.draw(|f| view::draw(f, &app)).map_err(to_boxed_err)?;

    while !app.should_exit {
        tokio::select! {
            biased;

            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(crossterm::event::Event::Key(key)) => {
                        if let Some((generation, request)) = app.on_key(key, store) {
                            spawn_fetch(generation, request, cfg.api.clone(), outcome_tx.clone());
                        }
                    }
                    // resize and similar events just trigger the redraw below
                    Some(_) => {}
                    None => app.should_exit = true,
                }
            }

            maybe_outcome = outcome_rx.recv() => {
                if let Some(outcome) = maybe_outcome {
                    app.apply(outcome);
                }
            }
        }
        terminal.draw(|f| view::draw(f, &app)).map_err(to_boxed_err)?;
    }
    Ok(())
}

fn spawn_fetch(
    generation: u64,
    request: FetchRequest,
    api_base: String,
    tx: mpsc::Sender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let outcome = match request {
            FetchRequest::Page(page_request) => {
                FetchOutcome::Page(generation, fetch_page(&api_base, &page_request).await)
            }
            FetchRequest::Lyrics { artist, title } => {
                let result = fetch_lyrics(&api_base, &artist, &title).await;
                FetchOutcome::Lyrics(generation, artist, title, result)
            }
        };
        let _ = tx.send(outcome).await;
    });
}

fn to_boxed_err<E: std::error::Error + Send + Sync + 'static>(
    e: E,
) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(e)
}
