use serde::Deserialize;

use crate::api::client::{ApiError, http_client};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Album {
    #[serde(default)]
    pub cover: String,
}

/// One song summary from the suggest endpoint. Artist and title are kept
/// verbatim so a later lyrics lookup uses the exact upstream strings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SongSummary {
    pub artist: Artist,
    pub title: String,
    #[serde(default)]
    pub album: Album,
}

/// Response envelope for one page of search results. `prev`/`next` are
/// opaque locators echoed back by the server; they are followed as given,
/// never reconstructed client-side.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SongPage {
    #[serde(default)]
    pub data: Vec<SongSummary>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// What to fetch: a fresh search term, or a pagination link from a
/// previous envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum PageRequest {
    Term(String),
    Link(String),
}

impl PageRequest {
    /// Resolve to a concrete URL against the given API base.
    pub fn url(&self, api_base: &str) -> String {
        match self {
            PageRequest::Term(term) => {
                format!("{}/suggest/{}", api_base, urlencoding::encode(term))
            }
            PageRequest::Link(link) => link.clone(),
        }
    }
}

/// Fetch one page of search results.
pub async fn fetch_page(api_base: &str, request: &PageRequest) -> Result<SongPage, ApiError> {
    let url = request.url(api_base);
    let resp = http_client().get(&url).send().await?;

    if !resp.status().is_success() {
        return Err(ApiError::Api(format!("suggest: HTTP {}", resp.status())));
    }

    let page: SongPage = resp.json().await?;
    Ok(page)
}
