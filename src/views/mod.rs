mod home;
mod loading;
mod search;
mod settings;
mod tab_bar;

pub use home::Home;
pub use loading::Loading;
pub use search::Search;
pub use settings::Settings;
pub use tab_bar::TabBar;
