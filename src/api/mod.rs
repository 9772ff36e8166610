// api/mod.rs - top-level API module re-exporting submodules
pub mod client;
pub mod lyrics;
pub mod search;

pub use client::ApiError;
pub use lyrics::{LyricsResult, fetch_lyrics};
pub use search::{PageRequest, SongPage, fetch_page};
