mod common;

use common::FakePage;
use panview_core::{MemoryStore, NavigationController, PageConfig, PageView, PreferenceStore};

fn controller(store: MemoryStore) -> NavigationController<FakePage, MemoryStore> {
    NavigationController::new(FakePage::default(), store, &PageConfig::default())
}

#[test]
fn dark_mode_toggled_twice_restores_marker_and_store() {
    let nav = controller(MemoryStore::with_entry("darkMode", "false"));

    nav.toggle_dark_mode();
    nav.toggle_dark_mode();

    assert!(!nav.view().has_marker("dark"));
    assert_eq!(nav.store().get("darkMode").as_deref(), Some("false"));
}

#[test]
fn restore_applies_only_literal_true() {
    let nav = controller(MemoryStore::with_entry("darkMode", "true"));
    assert!(nav.restore_preferences());
    assert!(nav.view().has_marker("dark"));

    for stored in ["false", "1", "True", "{\"on\":true}"] {
        let nav = controller(MemoryStore::with_entry("darkMode", stored));
        assert!(!nav.restore_preferences());
        assert!(!nav.view().has_marker("dark"), "stored {stored:?}");
    }

    let nav = controller(MemoryStore::new());
    assert!(!nav.restore_preferences());
    assert!(!nav.view().has_marker("dark"));
}

#[test]
fn restored_dark_mode_then_toggle_turns_it_off() {
    let nav = controller(MemoryStore::with_entry("darkMode", "true"));
    nav.restore_preferences();
    assert!(!nav.toggle_dark_mode());
    assert_eq!(nav.store().get("darkMode").as_deref(), Some("false"));
}

#[test]
fn toggle_nav_alternates() {
    let nav = controller(MemoryStore::new());
    let states: Vec<bool> = (0..4)
        .map(|_| {
            nav.toggle_nav();
            nav.view().has_marker("nav-open")
        })
        .collect();
    assert_eq!(states, [true, false, true, false]);
}

#[test]
fn nav_toggle_does_not_touch_dark_marker() {
    let nav = controller(MemoryStore::new());
    nav.toggle_nav();
    assert!(!nav.view().has_marker("dark"));
    assert_eq!(nav.store().get("darkMode"), None);
}

#[test]
fn offset_follows_primary_nav() {
    let nav = controller(MemoryStore::new());
    nav.toggle_nav();
    assert_eq!(nav.recompute_nav_offset(), Some(52.0));
    assert_eq!(*nav.view().secondary_top.borrow(), "calc(100% + 52px)");
}

#[test]
fn custom_markers_and_key_from_config() {
    let config = PageConfig::from_json(
        r#"{"darkMarker": "theme-dark", "navOpenMarker": "drawer", "storageKey": "theme"}"#,
    )
    .unwrap();
    let nav = NavigationController::new(FakePage::default(), MemoryStore::new(), &config);

    nav.toggle_dark_mode();
    nav.toggle_nav();

    assert!(nav.view().has_marker("theme-dark"));
    assert!(nav.view().has_marker("drawer"));
    assert_eq!(nav.store().get("theme").as_deref(), Some("true"));
    assert_eq!(nav.store().get("darkMode"), None);
}
