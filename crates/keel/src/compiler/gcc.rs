//! GCC and compilers that speak its dialect (Clang, ICC).

use core::ffi::{c_longlong, c_ulonglong};

use super::CompilerMacros;

/// `long long`, available as an extension even in C89 mode.
pub type ExtInt64 = c_longlong;
pub type ExtUInt64 = c_ulonglong;

pub const MACROS: CompilerMacros = CompilerMacros {
    family: "gcc",
    display_name: "GCC-compatible",
    int64_keyword: "long long",
    int64_length_modifier: "ll",
    force_inline: "inline __attribute__((always_inline))",
    no_inline: "__attribute__((noinline))",
    thread_local: "__thread",
    debug_break: "__builtin_trap()",
    likely: "__builtin_expect(!!(x), 1)",
    unlikely: "__builtin_expect(!!(x), 0)",
};
