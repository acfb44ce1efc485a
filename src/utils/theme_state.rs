use dioxus::prelude::*;

use crate::theme::ThemePreferenceManager;

pub type ThemeState = Signal<ThemePreferenceManager>;

/// Provides the manager to the component tree and starts resolving the
/// stored preference once, on first render.
pub fn use_theme_provider(build: impl FnOnce() -> ThemePreferenceManager) -> ThemeState {
    let theme = use_signal(build);
    use_context_provider(|| theme);

    use_hook(move || {
        let mut theme = theme;
        let resolving = theme.peek().resolve();
        spawn(async move {
            let preference = resolving.await;
            theme.write().finish_loading(preference);
        });
    });

    theme
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Flips the theme and persists it in the background.
pub fn toggle_theme(mut theme: ThemeState) {
    let toggled = theme.write().toggle();
    match toggled {
        Ok(write) => {
            spawn(write);
        }
        Err(e) => log::warn!("Ignoring theme toggle: {}", e),
    }
}
