//! Sources for the operating system's light/dark preference.

pub trait SystemAppearanceSource {
    fn prefers_dark(&self) -> bool;
}

/// Always reports the same appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedAppearance(pub bool);

impl SystemAppearanceSource for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Desktop and mobile detection through `dark-light`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsAppearance;

#[cfg(not(target_arch = "wasm32"))]
impl SystemAppearanceSource for OsAppearance {
    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            dark_light::Mode::Dark => true,
            dark_light::Mode::Light => false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAppearance;

#[cfg(target_arch = "wasm32")]
impl SystemAppearanceSource for WebAppearance {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}
