pub mod api;
pub mod pager;
pub mod store;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

use crate::api::client::DEFAULT_API_BASE;

/// Application configuration from CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Search term to run at startup
    pub term: Option<String>,
    /// Print results to stdout instead of starting the TUI
    #[arg(long)]
    pub plain: bool,
    /// Artist for a direct lyrics lookup (requires --title)
    #[arg(long, requires = "title")]
    pub artist: Option<String>,
    /// Song title for a direct lyrics lookup (requires --artist)
    #[arg(long, requires = "artist")]
    pub title: Option<String>,
    /// Path to the state file holding recent searches and the theme
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,
    /// Base URL of the song search / lyrics API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api: String,
    /// Enable backend error logging to stderr
    #[arg(long)]
    pub debug_log: bool,
}
