//! Canonical integers from the native sized-integer facility.

pub type Int8 = i8;
pub type UInt8 = u8;
pub const INT8_MIN: Int8 = i8::MIN;
pub const INT8_MAX: Int8 = i8::MAX;
pub const UINT8_MAX: UInt8 = u8::MAX;

pub type Int16 = i16;
pub type UInt16 = u16;
pub const INT16_MIN: Int16 = i16::MIN;
pub const INT16_MAX: Int16 = i16::MAX;
pub const UINT16_MAX: UInt16 = u16::MAX;

pub type Int32 = i32;
pub type UInt32 = u32;
pub const INT32_MIN: Int32 = i32::MIN;
pub const INT32_MAX: Int32 = i32::MAX;
pub const UINT32_MAX: UInt32 = u32::MAX;

pub type Int64 = i64;
pub type UInt64 = u64;
pub const INT64_MIN: Int64 = i64::MIN;
pub const INT64_MAX: Int64 = i64::MAX;
pub const UINT64_MAX: UInt64 = u64::MAX;

/// Signed integer the size of a pointer.
pub type IntPtr = isize;
/// Unsigned integer the size of a pointer.
pub type UIntPtr = usize;
pub const INTPTR_MIN: IntPtr = isize::MIN;
pub const INTPTR_MAX: IntPtr = isize::MAX;
pub const UINTPTR_MAX: UIntPtr = usize::MAX;
