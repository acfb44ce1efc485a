use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    IO(String),
    Unavailable(String),
    Serialization(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IO(msg) => write!(f, "I/O Error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StorageError::Unavailable(format!("{:?}", value))
    }
}
