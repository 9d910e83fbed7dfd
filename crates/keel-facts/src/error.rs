//! Error types for fact loading and detection.

use std::path::PathBuf;

/// Errors that can occur while loading or detecting platform facts.
#[derive(Debug, thiserror::Error)]
pub enum FactsError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing fact files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fact file not found.
    #[error("facts file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A required build configuration key was absent or malformed.
    #[error("cannot detect {key}: {detail}")]
    Detection {
        /// The cargo configuration key that was inspected.
        key: &'static str,
        /// What was wrong with it.
        detail: String,
    },
}

/// Result type for fact operations.
pub type Result<T> = std::result::Result<T, FactsError>;
