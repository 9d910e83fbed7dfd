//! Facts this crate was compiled against.
//!
//! The constants are written by the build script from cargo's target
//! configuration. They are the same facts the cfg-gated modules were
//! selected with, so [`host_facts`] always describes the namespace this
//! build actually exposes.

use keel_facts::{CompilerFamily, PlatformFacts};

mod detected {
    include!(concat!(env!("OUT_DIR"), "/host_facts.rs"));
}

pub use detected::{COMPILER, HAS_STDINT, NAME, POINTER_SIZE, REGISTER_BITS, TARGET};

/// Pointer width in bits.
pub const POINTER_BITS: u32 = POINTER_SIZE * 8;

const _: () = assert!(
    POINTER_SIZE as usize == core::mem::size_of::<usize>(),
    "build script pointer size disagrees with the compiled target"
);

/// The host fact set as a value.
pub fn host_facts() -> PlatformFacts {
    PlatformFacts {
        name: NAME.to_string(),
        target: TARGET,
        compiler: CompilerFamily::parse(COMPILER),
        pointer_size: POINTER_SIZE,
        register_bits: REGISTER_BITS,
        has_stdint: HAS_STDINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_facts_match_compiled_target() {
        let facts = host_facts();
        assert_eq!(facts.pointer_bits() as usize, usize::BITS as usize);
        assert!(facts.compiler.is_supported());
        assert!(!facts.register_exceeds_pointer());
        assert_eq!(facts.has_stdint, cfg!(not(keel_manual_int)));
    }

    #[test]
    fn host_target_family_matches_cfg() {
        if cfg!(target_os = "windows") {
            assert_eq!(TARGET, keel_facts::TargetFamily::Win32);
        } else if cfg!(any(target_os = "linux", target_os = "android")) {
            assert_eq!(TARGET, keel_facts::TargetFamily::Linux);
        } else if cfg!(target_os = "macos") {
            assert_eq!(TARGET, keel_facts::TargetFamily::Apple);
        }
    }
}
