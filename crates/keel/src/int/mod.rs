//! Canonical fixed-width integer types and their limits.
//!
//! Exactly one of two paths is compiled:
//! - **native** (default): the language's own sized integers
//! - **manual** (`manual-int` feature): C ABI types with literal limits,
//!   the 64-bit pair bound to the compiler's extended integer
//!
//! Both export the same names, so nothing downstream can tell which one
//! was taken except through [`NATIVE`].

#[cfg(not(keel_manual_int))]
mod native;
#[cfg(not(keel_manual_int))]
pub use native::*;

#[cfg(keel_manual_int)]
mod manual;
#[cfg(keel_manual_int)]
pub use manual::*;

/// Whether the canonical integers come from the native sized-integer facility.
pub const NATIVE: bool = cfg!(not(keel_manual_int));
