use songseek::api::lyrics::{LyricsResult, parse_lyrics_body, split_lines};

#[test]
fn test_split_mixed_line_endings() {
    assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
}

#[test]
fn test_split_preserves_empty_lines() {
    assert_eq!(split_lines("verse\n\nchorus"), vec!["verse", "", "chorus"]);
}

#[test]
fn test_split_single_line() {
    assert_eq!(split_lines("just one line"), vec!["just one line"]);
}

#[test]
fn test_lyrics_body_parses_into_lines() {
    let result = parse_lyrics_body(r#"{"lyrics":"la la\r\nla"}"#).unwrap();
    assert_eq!(
        result,
        LyricsResult::Lyrics(vec!["la la".to_string(), "la".to_string()])
    );
}

#[test]
fn test_error_body_yields_not_found() {
    let result = parse_lyrics_body(r#"{"error":"No lyrics found"}"#).unwrap();
    assert_eq!(result, LyricsResult::NotFound("No lyrics found".to_string()));
}

#[test]
fn test_error_field_wins_over_lyrics() {
    // Exactly one variant may carry content; the error explanation wins.
    let result = parse_lyrics_body(r#"{"lyrics":"body","error":"nope"}"#).unwrap();
    assert_eq!(result, LyricsResult::NotFound("nope".to_string()));
}

#[test]
fn test_body_with_neither_field_is_not_found() {
    let result = parse_lyrics_body("{}").unwrap();
    assert!(matches!(result, LyricsResult::NotFound(_)));
}

#[test]
fn test_unparsable_body_is_an_error() {
    assert!(parse_lyrics_body("<html>oops</html>").is_err());
}
