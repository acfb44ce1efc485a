use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { 
            class: "centered",
            h2 { 
                class: "screen-title",
                "Welcome 👋"
            }
            p { 
                class: "screen-subtitle",
                "Starter app for iOS & Android"
            }
        }
    }
}
