//! Errors from resolving and emitting a namespace for a fact set.

use thiserror::Error;

/// Convenience alias for results within keel.
pub type Result<T> = std::result::Result<T, KeelError>;

/// Errors that can occur while resolving a fact set or emitting a header.
#[derive(Debug, Error)]
pub enum KeelError {
    /// No compiler collaborator exists for the fact set's compiler family.
    #[error("Unsupported platform! no compiler collaborator for '{compiler}' (facts '{platform}')")]
    UnsupportedCompiler { platform: String, compiler: String },

    /// Pointer size other than 4 or 8 bytes.
    #[error("facts '{platform}': pointer size {pointer_size} is not supported (expected 4 or 8 bytes)")]
    UnsupportedPointerSize { platform: String, pointer_size: u32 },

    /// Registers wider than pointers; a pointer-sized register type would truncate.
    #[error(
        "facts '{platform}': register width ({register_bits} bits) exceeds pointer width ({pointer_bits} bits)"
    )]
    RegisterWiderThanPointer {
        platform: String,
        register_bits: u32,
        pointer_bits: u32,
    },

    /// A header prefix that is not a valid C identifier.
    #[error("invalid header prefix '{prefix}': must be a C identifier")]
    InvalidPrefix { prefix: String },

    /// Fact loading error.
    #[error(transparent)]
    Facts(#[from] keel_facts::FactsError),
}
