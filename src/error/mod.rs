mod storage;
mod theme;

pub use storage::StorageError;
pub use theme::ThemeError;
