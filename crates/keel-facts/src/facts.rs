//! The platform fact set.
//!
//! A [`PlatformFacts`] value is read-only input to the rest of keel. It
//! names exactly one target family and exactly one compiler family, plus
//! the pointer size, register width, and whether native sized integers
//! are available.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The OS/SDK family a build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFamily {
    /// Win32 API (desktop Windows, including MinGW builds).
    Win32,
    /// Apple platforms (macOS, iOS and friends).
    Apple,
    /// Linux and Android.
    Linux,
    /// Any other POSIX system.
    Posix,
    /// No operating system, or one keel knows nothing about.
    Freestanding,
    // Console SDKs (Xbox 360 and its <xtl.h>) have no Rust target.
}

impl TargetFamily {
    /// Every target family, in declaration order.
    pub const ALL: [TargetFamily; 5] = [
        Self::Win32,
        Self::Apple,
        Self::Linux,
        Self::Posix,
        Self::Freestanding,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win32 => "win32",
            Self::Apple => "apple",
            Self::Linux => "linux",
            Self::Posix => "posix",
            Self::Freestanding => "freestanding",
        }
    }
}

impl fmt::Display for TargetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown target family '{s}'"))
    }
}

/// The C toolchain dialect of a target.
///
/// Unrecognized names are preserved in [`CompilerFamily::Unknown`] rather
/// than rejected at parse time, so the resolver can report them with a
/// proper diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompilerFamily {
    /// Microsoft Visual C++.
    Msvc,
    /// GCC and GCC-compatible compilers (Clang, ICC in GNU mode).
    Gcc,
    /// A compiler keel has no collaborator for.
    Unknown(String),
}

impl CompilerFamily {
    /// Parse a compiler family name. Accepts common aliases.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "msvc" | "cl" => Self::Msvc,
            "gcc" | "clang" | "gnu" => Self::Gcc,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether a compiler collaborator exists for this family.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Name as written in fact files.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Msvc => "msvc",
            Self::Gcc => "gcc",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CompilerFamily {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CompilerFamily> for String {
    fn from(c: CompilerFamily) -> Self {
        c.as_str().to_string()
    }
}

fn default_true() -> bool {
    true
}

/// The complete set of facts one build unit is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformFacts {
    /// Fact set name (e.g., "linux-x86_64", "windows-x86-msvc").
    pub name: String,
    /// Target platform family.
    pub target: TargetFamily,
    /// Compiler family.
    pub compiler: CompilerFamily,
    /// Pointer size in bytes (4 or 8).
    pub pointer_size: u32,
    /// General-purpose register width in bits.
    pub register_bits: u32,
    /// Whether the toolchain ships native sized integer types.
    #[serde(default = "default_true")]
    pub has_stdint: bool,
}

impl PlatformFacts {
    /// Pointer width in bits.
    pub fn pointer_bits(&self) -> u32 {
        self.pointer_size * 8
    }

    /// Whether general-purpose registers are wider than pointers.
    ///
    /// On such targets a pointer-sized integer is not register-sized.
    pub fn register_exceeds_pointer(&self) -> bool {
        self.register_bits > self.pointer_bits()
    }

    fn preset(
        name: &str,
        target: TargetFamily,
        compiler: CompilerFamily,
        pointer_size: u32,
        register_bits: u32,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            compiler,
            pointer_size,
            register_bits,
            has_stdint: true,
        }
    }

    /// Linux on x86-64 with GCC.
    pub fn linux_x86_64() -> Self {
        Self::preset("linux-x86_64", TargetFamily::Linux, CompilerFamily::Gcc, 8, 64)
    }

    /// Linux on AArch64 with GCC.
    pub fn linux_aarch64() -> Self {
        Self::preset("linux-aarch64", TargetFamily::Linux, CompilerFamily::Gcc, 8, 64)
    }

    /// Linux on 32-bit ARM with GCC.
    pub fn linux_armv7() -> Self {
        Self::preset("linux-armv7", TargetFamily::Linux, CompilerFamily::Gcc, 4, 32)
    }

    /// The x32 ABI: 64-bit registers, 32-bit pointers.
    pub fn linux_x32() -> Self {
        Self::preset("linux-x32", TargetFamily::Linux, CompilerFamily::Gcc, 4, 64)
    }

    /// 64-bit Windows with MSVC.
    pub fn windows_x86_64_msvc() -> Self {
        Self::preset(
            "windows-x86_64-msvc",
            TargetFamily::Win32,
            CompilerFamily::Msvc,
            8,
            64,
        )
    }

    /// 32-bit Windows with an old MSVC that predates `<stdint.h>`.
    pub fn windows_x86_msvc_legacy() -> Self {
        let mut f = Self::preset(
            "windows-x86-msvc-legacy",
            TargetFamily::Win32,
            CompilerFamily::Msvc,
            4,
            32,
        );
        f.has_stdint = false;
        f
    }

    /// 64-bit Windows with MinGW (GCC on the Win32 API).
    pub fn windows_x86_64_mingw() -> Self {
        Self::preset(
            "windows-x86_64-mingw",
            TargetFamily::Win32,
            CompilerFamily::Gcc,
            8,
            64,
        )
    }

    /// macOS on Apple silicon with Clang.
    pub fn macos_aarch64() -> Self {
        Self::preset("macos-aarch64", TargetFamily::Apple, CompilerFamily::Gcc, 8, 64)
    }

    /// Bare-metal Cortex-M with arm-none-eabi-gcc.
    pub fn cortex_m() -> Self {
        Self::preset("cortex-m", TargetFamily::Freestanding, CompilerFamily::Gcc, 4, 32)
    }

    /// Look up a built-in fact set by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "linux-x86_64" => Some(Self::linux_x86_64()),
            "linux-aarch64" => Some(Self::linux_aarch64()),
            "linux-armv7" => Some(Self::linux_armv7()),
            "linux-x32" => Some(Self::linux_x32()),
            "windows-x86_64-msvc" => Some(Self::windows_x86_64_msvc()),
            "windows-x86-msvc-legacy" => Some(Self::windows_x86_msvc_legacy()),
            "windows-x86_64-mingw" => Some(Self::windows_x86_64_mingw()),
            "macos-aarch64" => Some(Self::macos_aarch64()),
            "cortex-m" => Some(Self::cortex_m()),
            _ => None,
        }
    }

    /// All built-in fact set names with a one-line description.
    pub fn builtin_presets() -> Vec<(&'static str, &'static str)> {
        vec![
            ("linux-x86_64", "Linux, x86-64, GCC"),
            ("linux-aarch64", "Linux, AArch64, GCC"),
            ("linux-armv7", "Linux, 32-bit ARM, GCC"),
            ("linux-x32", "Linux x32 ABI (64-bit registers, 32-bit pointers)"),
            ("windows-x86_64-msvc", "Windows, x86-64, MSVC"),
            ("windows-x86-msvc-legacy", "Windows, x86, MSVC without <stdint.h>"),
            ("windows-x86_64-mingw", "Windows, x86-64, MinGW"),
            ("macos-aarch64", "macOS, Apple silicon, Clang"),
            ("cortex-m", "Bare-metal Cortex-M, arm-none-eabi-gcc"),
        ]
    }
}
