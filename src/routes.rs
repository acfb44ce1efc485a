use dioxus::prelude::*;
use crate::views::{ Home, Search, Settings, TabBar };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(TabBar)]
    #[route("/")]
    Home,
    #[route("/search")]
    Search,
    #[route("/settings")]
    Settings,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "🏠",
            Route::Search => "🔍",
            Route::Settings => "⚙️",
        }
    }

    pub fn tabs() -> [Route; 3] {
        [Route::Home, Route::Search, Route::Settings]
    }
}
