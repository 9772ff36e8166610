use crate::store::KvStore;

pub const THEME_KEY: &str = "theme";

/// Light/dark display preference, persisted on every change. Unknown or
/// missing stored values fall back to light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Flip the preference and persist the new value.
    pub fn toggle(&mut self, store: &mut dyn KvStore) -> Self {
        *self = self.toggled();
        store.set(THEME_KEY, self.as_str());
        *self
    }
}
