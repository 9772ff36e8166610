use songseek::store::theme::{THEME_KEY, Theme};
use songseek::store::{KvStore, MemStore};

#[test]
fn test_defaults_to_light() {
    let store = MemStore::new();
    assert_eq!(Theme::load(&store), Theme::Light);
}

#[test]
fn test_unknown_stored_value_falls_back_to_light() {
    let mut store = MemStore::new();
    store.set(THEME_KEY, "sepia");
    assert_eq!(Theme::load(&store), Theme::Light);
}

#[test]
fn test_toggle_twice_round_trips_and_persists_each_step() {
    let mut store = MemStore::new();
    let mut theme = Theme::load(&store);

    assert_eq!(theme.toggle(&mut store), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

    assert_eq!(theme.toggle(&mut store), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn test_load_reads_persisted_value() {
    let mut store = MemStore::new();
    let mut theme = Theme::Light;
    theme.toggle(&mut store);
    assert_eq!(Theme::load(&store), Theme::Dark);
}
