use std::rc::Rc;

use futures::executor::block_on;

use super::common::manager_with;
use super::common::mocks::{CountingAppearance, MockStore};
use crate::error::ThemeError;
use crate::storage::MemoryStore;
use crate::theme::{ThemePreference, ThemePreferenceManager, ThemeStatus, THEME_KEY};

#[test]
fn test_starts_loading_and_follows_system_until_resolved() {
    let manager = manager_with(Rc::new(MockStore::holding("light")), true);

    assert!(manager.is_loading());
    assert_eq!(manager.status(), ThemeStatus::Loading);
    assert!(manager.is_dark());
}

#[test]
fn test_stored_value_wins_over_system_default() {
    for system_dark in [false, true] {
        let mut manager = manager_with(Rc::new(MockStore::holding("dark")), system_dark);
        assert_eq!(block_on(manager.load()), ThemePreference::Dark);
        assert!(manager.is_dark());
        assert!(!manager.is_loading());

        let mut manager = manager_with(Rc::new(MockStore::holding("light")), system_dark);
        assert_eq!(block_on(manager.load()), ThemePreference::Light);
        assert!(!manager.is_dark());
    }
}

#[test]
fn test_empty_store_follows_system_default() {
    let mut manager = manager_with(Rc::new(MockStore::new()), true);
    block_on(manager.load());
    assert!(manager.is_dark());

    let mut manager = manager_with(Rc::new(MockStore::new()), false);
    block_on(manager.load());
    assert!(!manager.is_dark());
}

#[test]
fn test_invalid_stored_values_follow_system_default() {
    for raw in ["", "Dark", "LIGHT", " dark", "light\n", "auto", "true", "{\"theme\":\"dark\"}"] {
        for system_dark in [false, true] {
            let mut manager = manager_with(Rc::new(MockStore::holding(raw)), system_dark);
            block_on(manager.load());
            assert_eq!(manager.is_dark(), system_dark, "stored value {:?}", raw);
        }
    }
}

#[test]
fn test_failed_read_follows_system_default() {
    let store = Rc::new(MockStore::failing_reads());
    let mut manager = manager_with(store.clone(), true);

    assert_eq!(block_on(manager.load()), ThemePreference::Dark);
    assert_eq!(manager.status(), ThemeStatus::Ready(ThemePreference::Dark));
    assert_eq!(store.gets.get(), 1);
}

#[test]
fn test_resolve_is_read_only_and_repeatable() {
    let store = Rc::new(MockStore::holding("dark"));
    let manager = manager_with(store.clone(), false);

    let first = block_on(manager.resolve());
    let second = block_on(manager.resolve());

    assert_eq!(first, second);
    assert!(store.writes.borrow().is_empty());
    assert_eq!(store.gets.get(), 2);
    // Resolving alone does not leave the loading state.
    assert!(manager.is_loading());
}

#[test]
fn test_finish_loading_only_applies_once() {
    let mut manager = manager_with(Rc::new(MockStore::new()), false);

    manager.finish_loading(ThemePreference::Dark);
    manager.finish_loading(ThemePreference::Light);

    assert_eq!(manager.status(), ThemeStatus::Ready(ThemePreference::Dark));
}

#[test]
fn test_toggle_flips_synchronously_and_twice_restores() {
    let mut manager = manager_with(Rc::new(MockStore::holding("light")), false);
    block_on(manager.load());

    let write = manager.toggle().unwrap();
    assert!(manager.is_dark());
    block_on(write);

    let write = manager.toggle().unwrap();
    assert!(!manager.is_dark());
    block_on(write);
}

#[test]
fn test_toggle_writes_once_with_matching_literal() {
    let store = Rc::new(MockStore::holding("light"));
    let mut manager = manager_with(store.clone(), false);
    block_on(manager.load());

    let write = manager.toggle().unwrap();
    // Nothing is persisted before the write is driven.
    assert!(store.writes.borrow().is_empty());
    block_on(write);
    assert_eq!(*store.writes.borrow(), vec![(THEME_KEY.to_string(), "dark".to_string())]);

    block_on(manager.toggle().unwrap());
    assert_eq!(store.written_values(), vec!["dark".to_string(), "light".to_string()]);
}

#[test]
fn test_failed_write_keeps_toggled_value() {
    let store = Rc::new(MockStore::failing_writes());
    let mut manager = manager_with(store.clone(), false);
    block_on(manager.load());

    block_on(manager.toggle().unwrap());

    assert!(manager.is_dark());
    assert_eq!(store.written_values(), vec!["dark".to_string()]);
    assert_eq!(*store.value.borrow(), None);
}

#[test]
fn test_toggle_while_loading_is_rejected() {
    let store = Rc::new(MockStore::new());
    let mut manager = manager_with(store.clone(), true);

    assert_eq!(manager.toggle().err(), Some(ThemeError::NotReady));
    assert!(manager.is_loading());
    assert!(store.writes.borrow().is_empty());
}

#[test]
fn test_toggled_choice_survives_restart() {
    let store = Rc::new(MemoryStore::new());

    let mut manager = manager_with(store.clone(), false);
    block_on(manager.load());
    block_on(manager.toggle().unwrap());

    let mut relaunched = manager_with(store.clone(), false);
    assert_eq!(block_on(relaunched.load()), ThemePreference::Dark);
    assert_eq!(store.snapshot().get(THEME_KEY).map(String::as_str), Some("dark"));
}

#[test]
fn test_system_appearance_is_read_once() {
    let appearance = CountingAppearance::new(true);
    let mut manager = ThemePreferenceManager::new(Rc::new(MockStore::new()), &appearance);

    for _ in 0..5 {
        assert!(manager.is_dark());
    }
    assert_eq!(block_on(manager.load()), ThemePreference::Dark);
    block_on(manager.resolve());

    assert_eq!(appearance.reads.get(), 1);
}
