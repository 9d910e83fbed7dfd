//! Microsoft Visual C++.

use core::ffi::{c_longlong, c_ulonglong};

use super::CompilerMacros;

/// `__int64`.
pub type ExtInt64 = c_longlong;
/// `unsigned __int64`.
pub type ExtUInt64 = c_ulonglong;

pub const MACROS: CompilerMacros = CompilerMacros {
    family: "msvc",
    display_name: "Microsoft Visual C++",
    int64_keyword: "__int64",
    int64_length_modifier: "ll",
    force_inline: "__forceinline",
    no_inline: "__declspec(noinline)",
    thread_local: "__declspec(thread)",
    debug_break: "__debugbreak()",
    likely: "(x)",
    unlikely: "(x)",
};
