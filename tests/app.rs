use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use songseek::api::lyrics::LyricsResult;
use songseek::api::search::{PageRequest, SongPage};
use songseek::api::ApiError;
use songseek::store::theme::{THEME_KEY, Theme};
use songseek::store::{KvStore, MemStore, recent};
use songseek::ui::app::{App, FetchOutcome, FetchRequest, View};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_term(app: &mut App, store: &mut MemStore, term: &str) {
    for c in term.chars() {
        app.on_key(key(KeyCode::Char(c)), store);
    }
}

fn page_with_songs(next: Option<&str>) -> SongPage {
    serde_json::from_str::<SongPage>(
        r#"{"data":[{"title":"T","artist":{"name":"A"},"album":{"cover":""}}]}"#,
    )
    .map(|mut p| {
        p.next = next.map(str::to_string);
        p
    })
    .unwrap()
}

#[test]
fn test_empty_submit_issues_no_request() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "   ");
    let request = app.on_key(key(KeyCode::Enter), &mut store);
    assert!(request.is_none());
    assert!(app.status.is_some());
    assert!(recent::load(&store).is_empty());
}

#[test]
fn test_submit_records_term_and_requests_page() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "queen");
    let (_, request) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    assert_eq!(
        request,
        FetchRequest::Page(PageRequest::Term("queen".to_string()))
    );
    assert_eq!(app.recent, vec!["queen"]);
    assert!(app.query.is_empty());
    assert!(app.loading);
}

#[test]
fn test_stale_page_response_is_dropped() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "first");
    let (old_generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();

    app.on_key(key(KeyCode::Char('/')), &mut store);
    type_term(&mut app, &mut store, "second");
    let (new_generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    assert!(new_generation > old_generation);

    app.apply(FetchOutcome::Page(old_generation, Ok(page_with_songs(None))));
    assert!(app.pager.page().is_none(), "stale page must not be shown");

    app.apply(FetchOutcome::Page(new_generation, Ok(page_with_songs(None))));
    assert_eq!(app.pager.songs().len(), 1);
    assert!(!app.loading);
}

#[test]
fn test_failed_fetch_becomes_status_line() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "queen");
    let (generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();

    app.apply(FetchOutcome::Page(
        generation,
        Err(ApiError::Api("suggest: HTTP 502".to_string())),
    ));
    assert_eq!(
        app.status.as_deref(),
        Some("request failed: API error: suggest: HTTP 502")
    );
    assert!(app.pager.page().is_none());
}

#[test]
fn test_next_key_without_link_is_inert() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "queen");
    let (generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    app.apply(FetchOutcome::Page(generation, Ok(page_with_songs(None))));

    assert!(app.on_key(key(KeyCode::Char('n')), &mut store).is_none());
    assert!(app.on_key(key(KeyCode::Char('p')), &mut store).is_none());
}

#[test]
fn test_next_key_replays_server_link() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "queen");
    let (generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    app.apply(FetchOutcome::Page(
        generation,
        Ok(page_with_songs(Some("https://api.example/suggest/queen?index=15"))),
    ));

    let (_, request) = app.on_key(key(KeyCode::Char('n')), &mut store).unwrap();
    assert_eq!(
        request,
        FetchRequest::Page(PageRequest::Link(
            "https://api.example/suggest/queen?index=15".to_string()
        ))
    );
}

#[test]
fn test_enter_on_song_requests_lyrics_with_exact_strings() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "queen");
    let (generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    app.apply(FetchOutcome::Page(generation, Ok(page_with_songs(None))));

    let (_, request) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    assert_eq!(
        request,
        FetchRequest::Lyrics {
            artist: "A".to_string(),
            title: "T".to_string()
        }
    );
}

#[test]
fn test_lyrics_error_payload_replaces_content() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    type_term(&mut app, &mut store, "queen");
    let (generation, _) = app.on_key(key(KeyCode::Enter), &mut store).unwrap();
    app.apply(FetchOutcome::Lyrics(
        generation,
        "A".to_string(),
        "T".to_string(),
        Ok(LyricsResult::NotFound("No lyrics found".to_string())),
    ));

    match &app.view {
        View::Lyrics { result, .. } => {
            assert_eq!(result, &LyricsResult::NotFound("No lyrics found".to_string()));
        }
        View::Results => panic!("expected lyrics view"),
    }
}

#[test]
fn test_theme_key_toggles_and_persists() {
    let mut store = MemStore::new();
    let mut app = App::new(&store);
    app.on_key(key(KeyCode::Esc), &mut store);
    app.on_key(key(KeyCode::Char('t')), &mut store);
    assert_eq!(app.theme, Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_recent_slot_replays_and_refreshes_order() {
    let mut store = MemStore::new();
    recent::record(&mut store, "older");
    recent::record(&mut store, "newer");

    let mut app = App::new(&store);
    app.on_key(key(KeyCode::Esc), &mut store);
    let (_, request) = app.on_key(key(KeyCode::Char('2')), &mut store).unwrap();
    assert_eq!(
        request,
        FetchRequest::Page(PageRequest::Term("older".to_string()))
    );
    assert_eq!(app.recent, vec!["older", "newer"]);
}
