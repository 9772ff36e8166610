use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::api::client::{ApiError, http_client};

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

#[derive(Deserialize)]
struct LyricsEnvelope {
    lyrics: Option<String>,
    error: Option<String>,
}

/// Outcome of a lyrics lookup. The upstream endpoint answers with either a
/// lyrics body or an error explanation; both are ordinary results, only
/// transport and decode problems surface as `ApiError`.
#[derive(Debug, Clone, PartialEq)]
pub enum LyricsResult {
    Lyrics(Vec<String>),
    NotFound(String),
}

/// Split a lyrics body into display lines on either `\n` or `\r\n`,
/// keeping empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    LINE_BREAK_RE.split(text).map(|l| l.to_string()).collect()
}

/// Parse a lyrics endpoint body. An `error` field wins over any `lyrics`
/// field so exactly one variant ever carries content.
pub fn parse_lyrics_body(body: &str) -> Result<LyricsResult, ApiError> {
    let envelope: LyricsEnvelope = serde_json::from_str(body)?;
    match envelope {
        LyricsEnvelope {
            error: Some(err), ..
        } => Ok(LyricsResult::NotFound(err)),
        LyricsEnvelope {
            lyrics: Some(text), ..
        } => Ok(LyricsResult::Lyrics(split_lines(&text))),
        _ => Ok(LyricsResult::NotFound("No lyrics in response".to_string())),
    }
}

/// Fetch lyrics keyed by the exact artist and title strings from a song
/// summary. The endpoint reports "not found" with an error payload and a
/// non-2xx status, so the body is parsed regardless of status.
pub async fn fetch_lyrics(
    api_base: &str,
    artist: &str,
    title: &str,
) -> Result<LyricsResult, ApiError> {
    let url = format!(
        "{}/v1/{}/{}",
        api_base,
        urlencoding::encode(artist),
        urlencoding::encode(title)
    );
    let resp = http_client().get(&url).send().await?;
    let body = resp.text().await?;
    parse_lyrics_body(&body)
}
