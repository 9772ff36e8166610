//! Application state and key handling, kept free of terminal I/O so the
//! whole interaction flow is testable against an in-memory store.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::client::ApiError;
use crate::api::lyrics::LyricsResult;
use crate::api::search::{PageRequest, SongPage};
use crate::pager::Pager;
use crate::store::theme::Theme;
use crate::store::{KvStore, recent};

/// What the event loop should fetch next, paired with the generation the
/// app assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    Page(PageRequest),
    Lyrics { artist: String, title: String },
}

/// Result of a background fetch, tagged with its generation so responses
/// from a superseded request are dropped instead of displayed out of order.
#[derive(Debug)]
pub enum FetchOutcome {
    Page(u64, Result<SongPage, ApiError>),
    Lyrics(u64, String, String, Result<LyricsResult, ApiError>),
}

#[derive(Debug)]
pub enum View {
    Results,
    Lyrics {
        artist: String,
        title: String,
        result: LyricsResult,
        scroll: u16,
    },
}

pub struct App {
    pub query: String,
    pub input_active: bool,
    pub pager: Pager,
    pub selected: usize,
    pub recent: Vec<String>,
    pub theme: Theme,
    pub view: View,
    pub status: Option<String>,
    pub loading: bool,
    pub should_exit: bool,
    generation: u64,
}

impl App {
    pub fn new(store: &dyn KvStore) -> Self {
        Self {
            query: String::new(),
            input_active: true,
            pager: Pager::new(),
            selected: 0,
            recent: recent::load(store),
            theme: Theme::load(store),
            view: View::Results,
            status: None,
            loading: false,
            should_exit: false,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn begin(&mut self, request: FetchRequest) -> Option<(u64, FetchRequest)> {
        self.generation += 1;
        self.loading = true;
        Some((self.generation, request))
    }

    /// Submit the current query. Empty or whitespace-only input is surfaced
    /// as a status message and no request is issued.
    pub fn submit(&mut self, store: &mut dyn KvStore) -> Option<(u64, FetchRequest)> {
        let term = self.query.trim().to_string();
        if term.is_empty() {
            self.status = Some("Type a search term first".to_string());
            return None;
        }
        self.recent = recent::record(store, &term);
        self.query.clear();
        self.input_active = false;
        self.view = View::Results;
        self.status = None;
        self.begin(FetchRequest::Page(PageRequest::Term(term)))
    }

    /// Replay a recent search by its 1-based slot number. Replaying records
    /// the term again, moving it back to the front of the list.
    fn replay_recent(&mut self, slot: usize, store: &mut dyn KvStore) -> Option<(u64, FetchRequest)> {
        let term = self.recent.get(slot.checked_sub(1)?)?.clone();
        self.recent = recent::record(store, &term);
        self.view = View::Results;
        self.status = None;
        self.begin(FetchRequest::Page(PageRequest::Term(term)))
    }

    fn open_selected(&mut self) -> Option<(u64, FetchRequest)> {
        let song = self.pager.songs().get(self.selected)?.clone();
        self.status = None;
        self.begin(FetchRequest::Lyrics {
            artist: song.artist.name,
            title: song.title,
        })
    }

    /// Handle one key event. Returns a fetch request when the key triggered
    /// a network operation.
    pub fn on_key(&mut self, key: KeyEvent, store: &mut dyn KvStore) -> Option<(u64, FetchRequest)> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_exit = true;
            return None;
        }

        if self.input_active {
            return self.on_key_input(key, store);
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_exit = true;
                None
            }
            KeyCode::Char('t') => {
                self.theme.toggle(store);
                None
            }
            KeyCode::Char('/') => {
                self.input_active = true;
                None
            }
            _ => match self.view {
                View::Results => self.on_key_results(key, store),
                View::Lyrics { .. } => {
                    self.on_key_lyrics(key);
                    None
                }
            },
        }
    }

    fn on_key_input(&mut self, key: KeyEvent, store: &mut dyn KvStore) -> Option<(u64, FetchRequest)> {
        match key.code {
            KeyCode::Enter => self.submit(store),
            KeyCode::Esc => {
                self.input_active = false;
                None
            }
            KeyCode::Backspace => {
                self.query.pop();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                None
            }
            _ => None,
        }
    }

    fn on_key_results(&mut self, key: KeyEvent, store: &mut dyn KvStore) -> Option<(u64, FetchRequest)> {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let count = self.pager.songs().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('n') => {
                let request = self.pager.next_request()?;
                self.begin(FetchRequest::Page(request))
            }
            KeyCode::Char('p') => {
                let request = self.pager.prev_request()?;
                self.begin(FetchRequest::Page(request))
            }
            KeyCode::Char(c @ '1'..='6') => {
                let slot = c.to_digit(10).unwrap_or(0) as usize;
                self.replay_recent(slot, store)
            }
            _ => None,
        }
    }

    fn on_key_lyrics(&mut self, key: KeyEvent) {
        let View::Lyrics { scroll, .. } = &mut self.view else {
            return;
        };
        match key.code {
            KeyCode::Up => *scroll = scroll.saturating_sub(1),
            KeyCode::Down => *scroll = scroll.saturating_add(1),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
            KeyCode::PageDown => *scroll = scroll.saturating_add(10),
            KeyCode::Esc | KeyCode::Backspace => self.view = View::Results,
            _ => {}
        }
    }

    /// Apply a completed fetch. Responses carrying a stale generation are
    /// dropped so only the most recent navigation is ever displayed.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Page(generation, result) => {
                if generation != self.generation {
                    tracing::debug!(generation, "dropping stale page response");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(page) => {
                        self.selected = 0;
                        self.view = View::Results;
                        self.pager.load(page);
                    }
                    Err(e) => self.status = Some(format!("request failed: {e}")),
                }
            }
            FetchOutcome::Lyrics(generation, artist, title, result) => {
                if generation != self.generation {
                    tracing::debug!(generation, "dropping stale lyrics response");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(result) => {
                        self.view = View::Lyrics {
                            artist,
                            title,
                            result,
                            scroll: 0,
                        };
                    }
                    Err(e) => self.status = Some(format!("request failed: {e}")),
                }
            }
        }
    }
}
