use std::path::PathBuf;

use crate::theme::ThemePreference;

const DATA_DIR_VAR: &str = "APP_DATA_DIR";
const FORCE_APPEARANCE_VAR: &str = "APP_FORCE_APPEARANCE";
const FALLBACK_DATA_DIR: &str = ".app-data";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Directory holding the preferences file on native targets.
    pub data_dir: PathBuf,
    /// Replaces the detected system appearance when set.
    pub forced_appearance: Option<ThemePreference>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = match lookup(DATA_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                // The browser build stores in localStorage and never uses the directory.
                let level = if cfg!(target_arch = "wasm32") {
                    log::Level::Debug
                } else {
                    log::Level::Warn
                };
                log::log!(level, "{} not set, storing preferences in {}", DATA_DIR_VAR, FALLBACK_DATA_DIR);
                PathBuf::from(FALLBACK_DATA_DIR)
            }
        };

        let forced_appearance = lookup(FORCE_APPEARANCE_VAR).and_then(|raw| {
            let parsed = ThemePreference::parse_stored(raw.trim());
            if parsed.is_none() {
                log::warn!("Ignoring {}={:?}, expected \"light\" or \"dark\"", FORCE_APPEARANCE_VAR, raw);
            }
            parsed
        });

        if !cfg!(target_arch = "wasm32") {
            log::info!("Using data directory: {}", data_dir.display());
        }

        Self {
            data_dir,
            forced_appearance,
        }
    }
}
