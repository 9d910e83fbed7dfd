//! Compiler collaborator selection.
//!
//! Each supported compiler family has a collaborator module describing its
//! dialect: the extended 64-bit integer, the `printf` length modifier for
//! it, and the spelling of the compiler-specific macros. Both modules are
//! always compiled as data so any target can be resolved from any host;
//! exactly one is selected as [`active`] for this build, and a build with
//! no matching family does not compile.

use keel_facts::CompilerFamily;
use serde::Serialize;

pub mod gcc;
pub mod msvc;

#[cfg(keel_compiler = "msvc")]
pub use self::msvc as active;

#[cfg(keel_compiler = "gcc")]
pub use self::gcc as active;

#[cfg(not(any(keel_compiler = "msvc", keel_compiler = "gcc")))]
compile_error!(concat!(
    "Unsupported platform! keel has no compiler collaborator for `",
    env!("KEEL_COMPILER_NAME"),
    "` (target `",
    env!("KEEL_TARGET_NAME"),
    "`). Set KEEL_COMPILER=msvc or KEEL_COMPILER=gcc if the toolchain speaks one of those dialects."
));

/// How one compiler family spells the things keel needs from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompilerMacros {
    /// Family name as written in fact files.
    pub family: &'static str,
    /// Human-readable compiler name.
    pub display_name: &'static str,
    /// The compiler's own 64-bit integer keyword.
    pub int64_keyword: &'static str,
    /// `printf` length modifier for 64-bit integers.
    pub int64_length_modifier: &'static str,
    pub force_inline: &'static str,
    pub no_inline: &'static str,
    pub thread_local: &'static str,
    pub debug_break: &'static str,
    /// Branch hint wrapping `x`; the identity where the compiler has none.
    pub likely: &'static str,
    pub unlikely: &'static str,
}

/// Look up the collaborator for a compiler family.
pub fn macros_for(family: &CompilerFamily) -> Option<&'static CompilerMacros> {
    match family {
        CompilerFamily::Msvc => Some(&msvc::MACROS),
        CompilerFamily::Gcc => Some(&gcc::MACROS),
        CompilerFamily::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_matches_host_compiler() {
        let host = CompilerFamily::parse(crate::host::COMPILER);
        assert_eq!(macros_for(&host), Some(&active::MACROS));
        assert_eq!(active::MACROS.family, crate::host::COMPILER);
    }

    #[test]
    fn unknown_family_has_no_collaborator() {
        assert!(macros_for(&CompilerFamily::parse("watcom")).is_none());
    }

    #[test]
    fn collaborators_differ_where_dialects_differ() {
        assert_eq!(msvc::MACROS.int64_keyword, "__int64");
        assert_eq!(gcc::MACROS.int64_keyword, "long long");
        assert_ne!(msvc::MACROS.thread_local, gcc::MACROS.thread_local);
        // both accept C99's `ll` today
        assert_eq!(msvc::MACROS.int64_length_modifier, gcc::MACROS.int64_length_modifier);
    }
}
