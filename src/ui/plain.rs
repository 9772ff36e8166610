//! Plain stdout mode, for scripting and one-shot lookups.

use std::error::Error;

use crate::Config;
use crate::api::lyrics::{LyricsResult, fetch_lyrics};
use crate::api::search::{PageRequest, SongPage, SongSummary, fetch_page};
use crate::store::{KvStore, recent};

pub fn format_song(song: &SongSummary) -> String {
    format!("{} - {}", song.artist.name, song.title)
}

/// One-line hint about which adjacent pages the server offered.
pub fn page_footer(page: &SongPage) -> Option<String> {
    let mut cursors = Vec::new();
    if page.prev.is_some() {
        cursors.push("prev");
    }
    if page.next.is_some() {
        cursors.push("next");
    }
    if cursors.is_empty() {
        None
    } else {
        Some(format!("(more pages: {})", cursors.join(", ")))
    }
}

/// Run one search and print the first result page.
pub async fn print_search(
    cfg: &Config,
    store: &mut dyn KvStore,
    term: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let term = term.trim();
    if term.is_empty() {
        return Err("empty search term".into());
    }
    recent::record(store, term);

    let page = fetch_page(&cfg.api, &PageRequest::Term(term.to_string())).await?;
    if page.data.is_empty() {
        println!("No matching songs.");
        return Ok(());
    }
    for song in &page.data {
        println!("{}", format_song(song));
    }
    if let Some(footer) = page_footer(&page) {
        println!("{footer}");
    }
    Ok(())
}

/// Look up and print lyrics for an exact artist/title pair. An upstream
/// error payload is printed in place of the lyrics.
pub async fn print_lyrics(
    cfg: &Config,
    artist: &str,
    title: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match fetch_lyrics(&cfg.api, artist, title).await? {
        LyricsResult::Lyrics(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        LyricsResult::NotFound(message) => println!("{message}"),
    }
    Ok(())
}
