//! Crate-level error types.
//!
//! Animation and loader computations are infallible; only options I/O can
//! fail.

use std::fmt;

/// Errors produced by the xr-showcase crate.
#[derive(Debug)]
pub enum ShowcaseError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ShowcaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for ShowcaseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
