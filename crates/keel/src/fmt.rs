//! `printf`-style format specifiers for the canonical integers.
//!
//! Specifiers are the conversion text without the leading `%`. There is no
//! universal 64-bit conversion, so the 64-bit set uses the compiler's `ll`
//! length modifier. Pointer-width specifiers pick the 32-bit set when
//! pointers are 4 bytes and the 64-bit set otherwise; register-width
//! specifiers are the pointer-width ones, because the register-width
//! integers are the pointer-width integers.

use serde::Serialize;

pub const U32D: &str = "u";
pub const S32D: &str = "d";
pub const U32X: &str = "x";
pub const U64D: &str = "llu";
pub const S64D: &str = "lld";
pub const U64X: &str = "llx";

#[cfg(target_pointer_width = "32")]
mod ptr {
    pub const UPTRD: &str = super::U32D;
    pub const SPTRD: &str = super::S32D;
    pub const UPTRX: &str = super::U32X;
}

#[cfg(not(target_pointer_width = "32"))]
mod ptr {
    pub const UPTRD: &str = super::U64D;
    pub const SPTRD: &str = super::S64D;
    pub const UPTRX: &str = super::U64X;
}

pub use ptr::{SPTRD, UPTRD, UPTRX};

pub const UREGD: &str = UPTRD;
pub const SREGD: &str = SPTRD;
pub const UREGX: &str = UPTRX;

/// The full specifier set for one target, as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FormatSpecifiers {
    pub u32d: String,
    pub s32d: String,
    pub u32x: String,
    pub u64d: String,
    pub s64d: String,
    pub u64x: String,
    pub uptrd: String,
    pub sptrd: String,
    pub uptrx: String,
    pub uregd: String,
    pub sregd: String,
    pub uregx: String,
}

impl FormatSpecifiers {
    /// Derive the set for a pointer size in bytes, using `int64_modifier`
    /// as the 64-bit length modifier.
    pub fn for_pointer_size(pointer_size: u32, int64_modifier: &str) -> Self {
        let u64d = format!("{int64_modifier}u");
        let s64d = format!("{int64_modifier}d");
        let u64x = format!("{int64_modifier}x");
        let (uptrd, sptrd, uptrx) = if pointer_size == 4 {
            (U32D.to_string(), S32D.to_string(), U32X.to_string())
        } else {
            (u64d.clone(), s64d.clone(), u64x.clone())
        };
        Self {
            u32d: U32D.into(),
            s32d: S32D.into(),
            u32x: U32X.into(),
            u64d,
            s64d,
            u64x,
            uregd: uptrd.clone(),
            sregd: sptrd.clone(),
            uregx: uptrx.clone(),
            uptrd,
            sptrd,
            uptrx,
        }
    }

    /// The set this build was compiled with.
    pub fn host() -> Self {
        Self {
            u32d: U32D.into(),
            s32d: S32D.into(),
            u32x: U32X.into(),
            u64d: U64D.into(),
            s64d: S64D.into(),
            u64x: U64X.into(),
            uptrd: UPTRD.into(),
            sptrd: SPTRD.into(),
            uptrx: UPTRX.into(),
            uregd: UREGD.into(),
            sregd: SREGD.into(),
            uregx: UREGX.into(),
        }
    }

    /// `(suffix, specifier)` pairs in a stable order. The suffix is the
    /// canonical name without any prefix, e.g. `U32D`.
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("U32D", self.u32d.as_str()),
            ("S32D", self.s32d.as_str()),
            ("U32X", self.u32x.as_str()),
            ("U64D", self.u64d.as_str()),
            ("S64D", self.s64d.as_str()),
            ("U64X", self.u64x.as_str()),
            ("UPTRD", self.uptrd.as_str()),
            ("SPTRD", self.sptrd.as_str()),
            ("UPTRX", self.uptrx.as_str()),
            ("UREGD", self.uregd.as_str()),
            ("SREGD", self.sregd.as_str()),
            ("UREGX", self.uregx.as_str()),
        ]
    }
}

/// A complete `printf` conversion: `printf_conversion("llu")` is `"%llu"`.
pub fn printf_conversion(spec: &str) -> String {
    format!("%{spec}")
}
