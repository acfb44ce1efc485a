use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use super::appearance::SystemAppearanceSource;
use super::preference::{ThemePreference, THEME_KEY};
use crate::error::ThemeError;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeStatus {
    Loading,
    Ready(ThemePreference),
}

/// Persistence write produced by [`ThemePreferenceManager::toggle`].
///
/// Resolves to `()` whether or not the write succeeded. Nothing is persisted
/// until it is driven.
pub type PendingWrite = LocalBoxFuture<'static, ()>;

/// Owns the in-memory light/dark preference and keeps the durable copy in
/// the injected store up to date.
///
/// The value starts out [`ThemeStatus::Loading`] and becomes ready once the
/// stored preference has been resolved. Storage faults never escape: a
/// failed read falls back to the system appearance and a failed write only
/// means the choice will not survive a restart.
pub struct ThemePreferenceManager {
    store: Rc<dyn KeyValueStore>,
    system_default: ThemePreference,
    status: ThemeStatus,
}

impl ThemePreferenceManager {
    /// Reads the system appearance once; later fallbacks reuse that value.
    pub fn new(store: Rc<dyn KeyValueStore>, appearance: &dyn SystemAppearanceSource) -> Self {
        let system_default = ThemePreference::from_is_dark(appearance.prefers_dark());
        log::debug!("System appearance at startup: {}", system_default);
        Self {
            store,
            system_default,
            status: ThemeStatus::Loading,
        }
    }

    pub fn status(&self) -> ThemeStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ThemeStatus::Loading
    }

    /// While loading this reports the system appearance read at startup.
    pub fn is_dark(&self) -> bool {
        match self.status {
            ThemeStatus::Ready(preference) => preference.is_dark(),
            ThemeStatus::Loading => self.system_default.is_dark(),
        }
    }

    /// Reads the stored preference, falling back to the system appearance.
    ///
    /// Never writes to the store and never fails. The returned future does
    /// not borrow the manager, so it can be awaited from a detached task and
    /// its result handed to [`finish_loading`](Self::finish_loading).
    pub fn resolve(&self) -> LocalBoxFuture<'static, ThemePreference> {
        let store = Rc::clone(&self.store);
        let system_default = self.system_default;
        async move {
            let stored = match store.get(THEME_KEY).await {
                Ok(stored) => stored,
                Err(e) => {
                    log::warn!("Failed to read theme preference: {}", e);
                    None
                }
            };

            match stored.as_deref().and_then(ThemePreference::parse_stored) {
                Some(preference) => {
                    log::info!("Using stored theme preference: {}", preference);
                    preference
                }
                None => {
                    if let Some(raw) = stored {
                        log::debug!("Ignoring invalid stored theme {:?}", raw);
                    }
                    log::info!("No stored theme preference, following system: {}", system_default);
                    system_default
                }
            }
        }
        .boxed_local()
    }

    pub fn finish_loading(&mut self, preference: ThemePreference) {
        match self.status {
            ThemeStatus::Loading => self.status = ThemeStatus::Ready(preference),
            ThemeStatus::Ready(current) => {
                log::debug!("Theme already resolved to {}, ignoring {}", current, preference);
            }
        }
    }

    pub async fn load(&mut self) -> ThemePreference {
        let preference = self.resolve().await;
        self.finish_loading(preference);
        preference
    }

    /// Flips the preference immediately and returns the write that persists
    /// it. Errors with [`ThemeError::NotReady`] while still loading.
    #[must_use = "the preference is not persisted unless the returned write is spawned"]
    pub fn toggle(&mut self) -> Result<PendingWrite, ThemeError> {
        let ThemeStatus::Ready(current) = self.status else {
            return Err(ThemeError::NotReady);
        };
        let next = current.toggled();
        self.status = ThemeStatus::Ready(next);

        let store = Rc::clone(&self.store);
        Ok(async move {
            if let Err(e) = store.set(THEME_KEY, next.as_str()).await {
                log::warn!("Failed to persist theme preference {}: {}", next, e);
            }
        }
        .boxed_local())
    }
}
