pub mod configs;
pub mod error;
pub mod platform;
pub mod storage;
pub mod theme;
pub mod utils;
pub mod views;
mod routes;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::error::{ StorageError, ThemeError };
pub use crate::theme::{ ThemePreference, ThemePreferenceManager };
