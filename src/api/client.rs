use once_cell::sync::Lazy;
use reqwest::Client;
use thiserror::Error;

/// Default upstream host for both the suggest and lyrics endpoints.
pub const DEFAULT_API_BASE: &str = "https://api.lyrics.ovh";

// Shared HTTP client with reasonable defaults for timeouts
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("songseek/0.1")
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("failed to build HTTP client")
});

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

// Re-export HTTP client for the endpoint modules
pub(crate) fn http_client() -> &'static Client {
    &HTTP_CLIENT
}
