//! Platform-independent helpers.
//!
//! The `keel_*!` macros are exported at the crate root. The functions here
//! are what they expand to where a function will do; all of them are
//! `const` so the results fold at compile time.

use core::mem::size_of;

/// Add `ofs` bytes to `ptr`, stepping at single-byte granularity.
///
/// The result is not dereferenced here; it is the caller's job to make sure
/// it points somewhere valid before using it.
#[inline(always)]
pub const fn ptr_offset<T>(ptr: *const T, ofs: isize) -> *const u8 {
    ptr.cast::<u8>().wrapping_offset(ofs)
}

/// Mutable counterpart of [`ptr_offset`].
#[inline(always)]
pub const fn ptr_offset_mut<T>(ptr: *mut T, ofs: isize) -> *mut u8 {
    ptr.cast::<u8>().wrapping_offset(ofs)
}

/// Number of elements in a fixed-size array: its byte size over one
/// element's byte size. Zero-sized elements report the array length.
#[inline(always)]
pub const fn static_array_size<T, const N: usize>(_arr: &[T; N]) -> usize {
    match size_of::<T>() {
        0 => N,
        elem => size_of::<[T; N]>() / elem,
    }
}

/// Text of the tokens, with a leading macro invocation expanded first.
///
/// `keel_stringify!(name!())` yields the text of whatever literal `name!()`
/// expands to; anything else is stringified as written.
#[macro_export]
macro_rules! keel_stringify {
    ($($seg:ident)::+ ! $args:tt) => {
        concat!($($seg)::+ ! $args)
    };
    ($($tokens:tt)*) => {
        stringify!($($tokens)*)
    };
}

/// Paste identifiers (or an identifier and integer literals) into one
/// identifier: `keel_cat!(width_, 32)` is `width_32`.
#[macro_export]
macro_rules! keel_cat {
    ($($part:tt),+ $(,)?) => {
        $crate::__private::paste! { [<$($part)+>] }
    };
}

/// A name unlikely to collide: `prefix` followed by the current line.
#[macro_export]
macro_rules! keel_unique_name {
    ($prefix:ident) => {
        concat!(stringify!($prefix), line!())
    };
}

/// `ptr` advanced by `ofs` bytes, as a byte pointer. References and
/// mutable pointers coerce.
#[macro_export]
macro_rules! keel_ptr_offset {
    ($ptr:expr, $ofs:expr) => {
        $crate::util::ptr_offset($ptr, ($ofs) as isize)
    };
}

/// Byte offset of a field within a type.
#[macro_export]
macro_rules! keel_member_offset {
    ($ty:ty, $($field:tt)+) => {
        ::core::mem::offset_of!($ty, $($field)+)
    };
}

/// Element count of a fixed-size array, usable in const context.
#[macro_export]
macro_rules! keel_static_array_size {
    ($arr:expr) => {
        $crate::util::static_array_size(&$arr)
    };
}

/// Mark values as intentionally unused. Borrows, so nothing is moved or
/// dropped early.
#[macro_export]
macro_rules! keel_unused {
    ($($value:expr),+ $(,)?) => {
        $( let _ = &$value; )+
    };
}
