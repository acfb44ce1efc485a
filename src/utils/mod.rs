mod theme_state;

pub use theme_state::{toggle_theme, use_theme, use_theme_provider, ThemeState};
