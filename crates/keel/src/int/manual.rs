//! Canonical integers declared by hand from C ABI types.
//!
//! Used when the toolchain has no native sized-integer facility. Every
//! limit is a literal; every width is checked at compile time.

use core::ffi::{c_int, c_schar, c_short, c_uchar, c_uint, c_ushort};
use core::mem::size_of;

use crate::compiler::active::{ExtInt64, ExtUInt64};

pub type Int8 = c_schar;
pub type UInt8 = c_uchar;
pub const INT8_MIN: Int8 = -0x7f - 1;
pub const INT8_MAX: Int8 = 0x7f;
pub const UINT8_MAX: UInt8 = 0xff;

pub type Int16 = c_short;
pub type UInt16 = c_ushort;
pub const INT16_MIN: Int16 = -0x7fff - 1;
pub const INT16_MAX: Int16 = 0x7fff;
pub const UINT16_MAX: UInt16 = 0xffff;

pub type Int32 = c_int;
pub type UInt32 = c_uint;
pub const INT32_MIN: Int32 = -0x7fff_ffff - 1;
pub const INT32_MAX: Int32 = 0x7fff_ffff;
pub const UINT32_MAX: UInt32 = 0xffff_ffff;

// The 64-bit pair comes from the compiler collaborator: standard `long
// long` support may be missing, the extended keyword never is.
pub type Int64 = ExtInt64;
pub type UInt64 = ExtUInt64;
pub const INT64_MIN: Int64 = -0x7fff_ffff_ffff_ffff - 1;
pub const INT64_MAX: Int64 = 0x7fff_ffff_ffff_ffff;
pub const UINT64_MAX: UInt64 = 0xffff_ffff_ffff_ffff;

#[cfg(target_pointer_width = "16")]
mod ptr {
    pub type IntPtr = super::Int16;
    pub type UIntPtr = super::UInt16;
    pub const INTPTR_MIN: IntPtr = super::INT16_MIN;
    pub const INTPTR_MAX: IntPtr = super::INT16_MAX;
    pub const UINTPTR_MAX: UIntPtr = super::UINT16_MAX;
}

#[cfg(target_pointer_width = "32")]
mod ptr {
    pub type IntPtr = super::Int32;
    pub type UIntPtr = super::UInt32;
    pub const INTPTR_MIN: IntPtr = super::INT32_MIN;
    pub const INTPTR_MAX: IntPtr = super::INT32_MAX;
    pub const UINTPTR_MAX: UIntPtr = super::UINT32_MAX;
}

#[cfg(target_pointer_width = "64")]
mod ptr {
    pub type IntPtr = super::Int64;
    pub type UIntPtr = super::UInt64;
    pub const INTPTR_MIN: IntPtr = super::INT64_MIN;
    pub const INTPTR_MAX: IntPtr = super::INT64_MAX;
    pub const UINTPTR_MAX: UIntPtr = super::UINT64_MAX;
}

pub use ptr::{IntPtr, UIntPtr, INTPTR_MAX, INTPTR_MIN, UINTPTR_MAX};

const _: () = {
    assert!(size_of::<Int8>() == 1 && size_of::<UInt8>() == 1, "C char is not 8 bits");
    assert!(size_of::<Int16>() == 2 && size_of::<UInt16>() == 2, "C short is not 16 bits");
    assert!(size_of::<Int32>() == 4 && size_of::<UInt32>() == 4, "C int is not 32 bits");
    assert!(size_of::<Int64>() == 8 && size_of::<UInt64>() == 8, "extended integer is not 64 bits");
    assert!(size_of::<IntPtr>() == size_of::<usize>(), "pointer-sized integer is not pointer sized");
};
