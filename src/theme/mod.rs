mod appearance;
mod manager;
mod preference;

pub use appearance::{FixedAppearance, SystemAppearanceSource};
#[cfg(not(target_arch = "wasm32"))]
pub use appearance::OsAppearance;
#[cfg(target_arch = "wasm32")]
pub use appearance::WebAppearance;
pub use manager::{PendingWrite, ThemePreferenceManager, ThemeStatus};
pub use preference::{ThemePreference, THEME_KEY};
