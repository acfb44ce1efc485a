use dioxus::prelude::*;
use mobile_app::configs::AppConfig;
use mobile_app::platform::build_theme_manager;
use mobile_app::utils::use_theme_provider;
use mobile_app::views::Loading;
use mobile_app::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_theme_provider(|| build_theme_manager(&AppConfig::from_env()));
    let is_loading = theme.read().is_loading();
    let is_dark = theme.read().is_dark();

    rsx! {
        div {
            class: if is_dark { "app dark" } else { "app" },
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            if is_loading {
                Loading {}
            } else {
                Router::<Route> {}
            }
        }
    }
}
