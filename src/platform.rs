//! Picks the storage and appearance backends for the current target.

use std::rc::Rc;

use crate::configs::AppConfig;
use crate::storage::KeyValueStore;
use crate::theme::{FixedAppearance, SystemAppearanceSource, ThemePreferenceManager};

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store(config: &AppConfig) -> Rc<dyn KeyValueStore> {
    let store = crate::storage::FileStore::in_dir(&config.data_dir);
    log::debug!("Preferences file: {}", store.path().display());
    Rc::new(store)
}

#[cfg(target_arch = "wasm32")]
pub fn default_store(_config: &AppConfig) -> Rc<dyn KeyValueStore> {
    let available = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some();
    if available {
        Rc::new(crate::storage::LocalStorageStore)
    } else {
        log::warn!("localStorage unavailable, theme preference will not persist");
        Rc::new(crate::storage::MemoryStore::new())
    }
}

pub fn default_appearance(config: &AppConfig) -> Rc<dyn SystemAppearanceSource> {
    if let Some(forced) = config.forced_appearance {
        log::info!("System appearance forced to {}", forced);
        return Rc::new(FixedAppearance(forced.is_dark()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(crate::theme::OsAppearance)
    }

    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(crate::theme::WebAppearance)
    }
}

pub fn build_theme_manager(config: &AppConfig) -> ThemePreferenceManager {
    ThemePreferenceManager::new(default_store(config), &*default_appearance(config))
}
