//! Fact detection from cargo's target configuration.
//!
//! Build scripts see the target through `CARGO_CFG_*` environment
//! variables. [`from_cargo_cfg`] turns those into a [`PlatformFacts`]; the
//! lookup is injected so the same logic runs against a fake environment in
//! tests.

use tracing::{debug, warn};

use crate::error::{FactsError, Result};
use crate::facts::{CompilerFamily, PlatformFacts, TargetFamily};

/// Environment variable that overrides compiler family detection.
pub const COMPILER_OVERRIDE_VAR: &str = "KEEL_COMPILER";

/// Cargo configuration keys consulted by [`from_cargo_cfg`].
pub const CARGO_CFG_KEYS: [&str; 5] = [
    "CARGO_CFG_TARGET_OS",
    "CARGO_CFG_TARGET_FAMILY",
    "CARGO_CFG_TARGET_ENV",
    "CARGO_CFG_TARGET_ARCH",
    "CARGO_CFG_TARGET_POINTER_WIDTH",
];

/// General-purpose register width of a `target_arch`, in bits.
///
/// This is the architecture's register width, independent of the pointer
/// ABI: `x86_64` reports 64 even for the x32 ABI.
pub fn register_bits_for_arch(arch: &str) -> Option<u32> {
    match arch {
        "x86_64" | "aarch64" | "arm64ec" | "mips64" | "mips64r6" | "powerpc64" | "riscv64"
        | "sparc64" | "loongarch64" | "s390x" | "bpf" | "wasm64" | "nvptx64" => Some(64),
        "x86" | "arm" | "mips" | "mips32r6" | "powerpc" | "riscv32" | "sparc" | "wasm32"
        | "m68k" | "csky" | "hexagon" | "xtensa" => Some(32),
        "avr" | "msp430" => Some(16),
        _ => None,
    }
}

/// Target family from `target_os` and the comma-separated `target_family`.
pub fn target_family(os: &str, families: &str) -> TargetFamily {
    match os {
        "windows" => TargetFamily::Win32,
        "macos" | "ios" | "tvos" | "watchos" | "visionos" => TargetFamily::Apple,
        "linux" | "android" => TargetFamily::Linux,
        _ if families.split(',').any(|f| f.trim() == "unix") => TargetFamily::Posix,
        _ => TargetFamily::Freestanding,
    }
}

/// Compiler family from `target_env`.
///
/// An empty environment is the common case for GCC-style toolchains
/// (Apple, the BSDs, bare-metal EABI).
pub fn compiler_family(env: &str) -> CompilerFamily {
    match env {
        "msvc" => CompilerFamily::Msvc,
        "" | "gnu" | "musl" | "uclibc" | "newlib" | "ohos" | "sgx" | "relibc" => {
            CompilerFamily::Gcc
        }
        other => CompilerFamily::Unknown(other.to_string()),
    }
}

/// Build a fact set from cargo's `CARGO_CFG_*` variables.
///
/// `lookup` returns the value of an environment variable. `has_stdint` is
/// decided by the caller, usually from a cargo feature.
pub fn from_cargo_cfg<F>(lookup: F, has_stdint: bool) -> Result<PlatformFacts>
where
    F: Fn(&str) -> Option<String>,
{
    let os = lookup("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let families = lookup("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();
    let env = lookup("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    let arch = lookup("CARGO_CFG_TARGET_ARCH").ok_or(FactsError::Detection {
        key: "CARGO_CFG_TARGET_ARCH",
        detail: "not set".into(),
    })?;
    let width = lookup("CARGO_CFG_TARGET_POINTER_WIDTH").ok_or(FactsError::Detection {
        key: "CARGO_CFG_TARGET_POINTER_WIDTH",
        detail: "not set".into(),
    })?;
    let pointer_bits: u32 = width.parse().map_err(|_| FactsError::Detection {
        key: "CARGO_CFG_TARGET_POINTER_WIDTH",
        detail: format!("'{width}' is not a number"),
    })?;

    let compiler = match lookup(COMPILER_OVERRIDE_VAR) {
        Some(name) if !name.is_empty() => {
            debug!(%name, "compiler family overridden");
            CompilerFamily::parse(&name)
        }
        _ => compiler_family(&env),
    };

    let register_bits = match register_bits_for_arch(&arch) {
        Some(bits) => bits,
        None => {
            warn!(%arch, pointer_bits, "unknown architecture; assuming register width equals pointer width");
            pointer_bits
        }
    };

    let name = if os.is_empty() || os == "none" {
        arch.clone()
    } else {
        format!("{os}-{arch}")
    };

    let facts = PlatformFacts {
        name,
        target: target_family(&os, &families),
        compiler,
        pointer_size: pointer_bits / 8,
        register_bits,
        has_stdint,
    };
    debug!(?facts, "detected platform facts");
    Ok(facts)
}
