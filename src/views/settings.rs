use dioxus::prelude::*;
use crate::utils::{ toggle_theme, use_theme };

#[component]
pub fn Settings() -> Element {
    let theme = use_theme();
    let is_dark = theme.read().is_dark();

    rsx! {
        div {
            class: "centered settings",
            h2 { class: "screen-title", "Settings" }
            button {
                class: if is_dark { "theme-toggle theme-toggle-dark" } else { "theme-toggle" },
                onclick: move |_| toggle_theme(theme),
                if is_dark {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                }
            }
            p { class: "settings-note", "Your choice is remembered." }
        }
    }
}
