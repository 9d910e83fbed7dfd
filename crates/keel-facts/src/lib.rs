//! Platform and compiler facts for the keel normalization layer.
//!
//! Everything downstream of this crate is a pure function of one
//! [`PlatformFacts`] value:
//! - **Target family:** which OS/SDK world the code is built for
//! - **Compiler family:** which C toolchain dialect the target speaks
//! - **Pointer size and register width:** the two machine widths
//! - **Native sized integers:** whether `<stdint.h>`-style types exist
//!
//! Facts come from one of three places: the cargo build configuration
//! ([`detect`]), a `.facts.toml` file ([`parse`]), or a built-in preset
//! ([`PlatformFacts::builtin`]).

pub mod detect;
pub mod error;
pub mod facts;
pub mod parse;

pub use error::{FactsError, Result};
pub use facts::{CompilerFamily, PlatformFacts, TargetFamily};
