pub mod mocks;

use std::rc::Rc;

use crate::storage::KeyValueStore;
use crate::theme::{FixedAppearance, ThemePreferenceManager};

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn manager_with(store: Rc<dyn KeyValueStore>, system_dark: bool) -> ThemePreferenceManager {
    setup();
    ThemePreferenceManager::new(store, &FixedAppearance(system_dark))
}
