//! Register-width integers.
//!
//! `IntReg`/`UIntReg` are the pointer-sized canonical integers under another
//! name. That is only correct while general-purpose registers are no wider
//! than pointers, so targets where they are (x32, AArch64 ILP32, MIPS n32)
//! are rejected at build time rather than handed a truncated register type.

use core::mem::size_of;

use crate::host;
use crate::int::{IntPtr, UIntPtr, INTPTR_MAX, INTPTR_MIN, UINTPTR_MAX};

#[cfg(keel_register_exceeds_pointer)]
compile_error!(concat!(
    "keel: general-purpose registers on `",
    env!("KEEL_TARGET_NAME"),
    "` are wider than its pointers; IntReg/UIntReg would be narrower than a register"
));

/// Signed integer the width of a general-purpose register.
pub type IntReg = IntPtr;
/// Unsigned integer the width of a general-purpose register.
pub type UIntReg = UIntPtr;
pub const INTREG_MIN: IntReg = INTPTR_MIN;
pub const INTREG_MAX: IntReg = INTPTR_MAX;
pub const UINTREG_MAX: UIntReg = UINTPTR_MAX;

/// General-purpose register width in bits.
pub const REGISTER_BITS: u32 = host::REGISTER_BITS;

const _: () = assert!(
    size_of::<UIntReg>() * 8 == host::POINTER_BITS as usize,
    "register-width integer is not pointer width"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_max_equals_pointer_max() {
        assert_eq!(UINTREG_MAX as u128, UINTPTR_MAX as u128);
        assert_eq!(INTREG_MAX as i128, INTPTR_MAX as i128);
        assert_eq!(INTREG_MIN as i128, INTPTR_MIN as i128);
    }

    #[test]
    fn register_width_is_pointer_width() {
        assert_eq!(size_of::<IntReg>(), size_of::<*const ()>());
        assert!(REGISTER_BITS <= host::POINTER_BITS);
    }
}
