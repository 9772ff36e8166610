use clap::Parser;
use std::error::Error;
use tracing_subscriber::EnvFilter;

use songseek::store::{self, FileStore};
use songseek::{Config, ui};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cfg = Config::parse();

    let default_filter = if cfg.debug_log {
        "songseek=debug"
    } else {
        "songseek=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let state_path = cfg.state.clone().unwrap_or_else(store::default_state_path);
    let mut file_store = FileStore::open(state_path);

    if cfg.plain {
        if let (Some(artist), Some(title)) = (cfg.artist.clone(), cfg.title.clone()) {
            return ui::plain::print_lyrics(&cfg, &artist, &title).await;
        }
        let Some(term) = cfg.term.clone() else {
            return Err("--plain needs a search term or --artist/--title".into());
        };
        return ui::plain::print_search(&cfg, &mut file_store, &term).await;
    }

    let result = ui::run(cfg, file_store).await;
    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    result
}
