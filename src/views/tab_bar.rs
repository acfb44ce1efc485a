use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::use_theme;

const TAB_BAR_CSS: Asset = asset!("/assets/styling/tab_bar.css");

#[component]
pub fn TabBar() -> Element {
    let theme = use_theme();
    let current = use_route::<Route>();
    let is_dark = theme.read().is_dark();

    rsx! {
        div {
            class: "screen",
            document::Link { rel: "stylesheet", href: TAB_BAR_CSS }

            header {
                class: if is_dark { "header header-dark" } else { "header" },
                h1 { {current.title()} }
            }

            main {
                class: "content",
                Outlet::<Route> {}
            }

            nav {
                id: "tab-bar",
                class: if is_dark { "tab-bar tab-bar-dark" } else { "tab-bar" },
                for tab in Route::tabs() {
                    Link {
                        key: "{tab}",
                        class: if tab == current { "tab tab-active" } else { "tab" },
                        to: tab.clone(),
                        span { class: "tab-icon", {tab.icon()} }
                        span { class: "tab-label", {tab.title()} }
                    }
                }
            }
        }
    }
}
