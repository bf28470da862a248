//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbit-snap crate.
#[derive(Debug)]
pub enum RigError {
    /// No preset with the given name (or hotkey) is registered.
    NotFound(String),
    /// A preset index outside the registry was requested.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of registered presets.
        len: usize,
    },
    /// A preset with this name already exists.
    DuplicatePreset(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "snap preset '{name}' not found"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "snap preset index {index} out of range (len {len})")
            }
            Self::DuplicatePreset(name) => {
                write!(f, "snap preset '{name}' already exists")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
