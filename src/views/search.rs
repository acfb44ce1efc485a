use dioxus::prelude::*;

#[component]
pub fn Search() -> Element {
    rsx! {
        div {
            class: "centered",
            h2 { class: "screen-title", "Search" }
            p { class: "screen-subtitle", "Type to search" }
        }
    }
}
