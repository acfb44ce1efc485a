use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
    /// The stored preference has not been resolved yet.
    NotReady,
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::NotReady => write!(f, "Theme Error: preference is still loading"),
        }
    }
}

impl std::error::Error for ThemeError {}
