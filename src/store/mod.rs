//! Durable key-value storage for recent searches and the theme preference.
//!
//! The store is a single JSON object file read once at construction and
//! rewritten after every `set`. Missing or malformed files start an empty
//! map; write failures are logged and swallowed so callers never see a
//! storage error.

pub mod recent;
pub mod theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Storage port injected into the recent-search register and the theme
/// component. Synchronous by design: every mutation is persisted within
/// the handler turn that caused it.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// File-backed store used by the real application.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Malformed state file, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read state file, starting empty"
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn persist(&self) {
        if let Err(e) = self.persist_inner() {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to save state file"
            );
        }
    }

    fn persist_inner(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: BTreeMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Default location of the state file, under the platform data directory.
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("songseek")
        .join("state.json")
}
