//! A single portable vocabulary of integer types, limits, pointer helpers,
//! and format specifiers, resolved once per build from the target's
//! platform and compiler facts.
//!
//! ## Modules
//!
//! - [`int`] — Canonical 8/16/32/64-bit integers and their limits
//! - [`reg`] — Register-width integers aliased to the pointer-sized ones
//! - [`compiler`] — The one compiler collaborator this build selected
//! - [`util`] — Pointer and array helpers behind the `keel_*!` macros
//! - [`fmt`] — `printf`-style specifiers for the canonical integers
//! - [`host`] — The facts this crate was compiled against
//! - [`resolve`] — The same mapping as a function of an explicit fact set
//! - [`emit`] — Render a resolution as a re-includable C header

pub mod compiler;
pub mod emit;
pub mod error;
pub mod fmt;
pub mod host;
pub mod int;
pub mod reg;
pub mod resolve;
pub mod util;

pub use error::{KeelError, Result};
pub use host::host_facts;
pub use int::*;
pub use reg::*;
pub use resolve::{resolve, resolve_file, Resolution};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
