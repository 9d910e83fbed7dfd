//! Resolution of a fact set into the canonical namespace, as data.
//!
//! The cfg-gated modules give this build its namespace. [`resolve`] computes
//! the namespace any fact set would get, with the same decisions in the
//! same order:
//! 1. pick the compiler collaborator (no collaborator is fatal)
//! 2. check the pointer size and audit register width against it
//! 3. bind the fixed-width integers (native or manual path)
//! 4. alias pointer-width and register-width integers
//! 5. derive the format specifiers

use std::path::Path;

use keel_facts::parse::load_facts_toml;
use keel_facts::PlatformFacts;
use serde::Serialize;
use tracing::debug;

use crate::compiler::{self, CompilerMacros};
use crate::error::{KeelError, Result};
use crate::fmt::FormatSpecifiers;
use crate::host;

/// Where the fixed-width integers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegerSource {
    /// The toolchain's native sized-integer facility (`<stdint.h>`).
    Native,
    /// Declared by hand from the basic C types.
    Manual,
}

/// One canonical integer type and its limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CanonicalType {
    /// Semantic name, e.g. "8-bit signed integer".
    pub semantic: String,
    /// C spelling, e.g. `int8_t`.
    pub c_name: String,
    /// Name of the alias in this crate, e.g. `Int8`.
    pub rust_name: &'static str,
    /// The C type the name is bound to.
    pub underlying: String,
    pub bits: u32,
    pub signed: bool,
    /// Minimum constant name; unsigned types have none.
    pub min_name: Option<String>,
    pub max_name: String,
    pub min: i128,
    pub max: u128,
    /// C expression for the minimum, when the resolution defines one.
    pub min_expr: Option<String>,
    /// C expression for the maximum.
    pub max_expr: String,
}

impl CanonicalType {
    /// Byte size implied by the bit width.
    pub fn byte_size(&self) -> u32 {
        self.bits / 8
    }
}

/// A signed/unsigned pair of the same width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypePair {
    pub signed: CanonicalType,
    pub unsigned: CanonicalType,
}

/// The canonical namespace one fact set resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Resolution {
    pub facts: PlatformFacts,
    pub integer_source: IntegerSource,
    /// 8/16/32/64-bit integers, signed before unsigned at each width.
    pub fixed: Vec<CanonicalType>,
    pub pointer: TypePair,
    pub register: TypePair,
    pub compiler: CompilerMacros,
    pub formats: FormatSpecifiers,
}

impl Resolution {
    /// Resolve the facts this crate was compiled against.
    pub fn host() -> Result<Self> {
        resolve(&host::host_facts())
    }

    /// Every canonical type: fixed-width, then pointer-width, then register-width.
    pub fn all_types(&self) -> impl Iterator<Item = &CanonicalType> {
        self.fixed.iter().chain([
            &self.pointer.signed,
            &self.pointer.unsigned,
            &self.register.signed,
            &self.register.unsigned,
        ])
    }

    /// Look up a canonical type by its C name.
    pub fn canonical_type(&self, c_name: &str) -> Option<&CanonicalType> {
        self.all_types().find(|t| t.c_name == c_name)
    }

    /// The fixed-width type of a given width and signedness.
    pub fn fixed_type(&self, bits: u32, signed: bool) -> Option<&CanonicalType> {
        self.fixed
            .iter()
            .find(|t| t.bits == bits && t.signed == signed)
    }
}

const FIXED_WIDTHS: [u32; 4] = [8, 16, 32, 64];

fn rust_name(bits: u32, signed: bool) -> &'static str {
    match (bits, signed) {
        (8, true) => "Int8",
        (8, false) => "UInt8",
        (16, true) => "Int16",
        (16, false) => "UInt16",
        (32, true) => "Int32",
        (32, false) => "UInt32",
        (64, true) => "Int64",
        _ => "UInt64",
    }
}

/// The basic C type a manual declaration binds a width to.
fn manual_underlying(bits: u32, signed: bool, compiler: &CompilerMacros) -> String {
    let base = match bits {
        8 => "char",
        16 => "short",
        32 => "int",
        _ => compiler.int64_keyword,
    };
    match (bits, signed) {
        (8, true) => "signed char".into(),
        (_, true) => base.into(),
        (_, false) => format!("unsigned {base}"),
    }
}

fn signed_max(bits: u32) -> u128 {
    (1u128 << (bits - 1)) - 1
}

fn unsigned_max(bits: u32) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

fn fixed_type(bits: u32, signed: bool, source: IntegerSource, compiler: &CompilerMacros) -> CanonicalType {
    let stem = if signed { "INT" } else { "UINT" };
    let c_name = format!("{}int{bits}_t", if signed { "" } else { "u" });
    let (min, max) = if signed {
        (-(signed_max(bits) as i128) - 1, signed_max(bits))
    } else {
        (0, unsigned_max(bits))
    };

    let (underlying, min_expr, max_expr) = match source {
        // <stdint.h> defines the types and their limits.
        IntegerSource::Native => (
            c_name.clone(),
            signed.then(|| format!("INT{bits}_MIN")),
            format!("{stem}{bits}_MAX"),
        ),
        IntegerSource::Manual => {
            let suffix = if !signed && bits == 64 { "u" } else { "" };
            (
                manual_underlying(bits, signed, compiler),
                signed.then(|| format!("(-0x{:x} - 1)", signed_max(bits))),
                format!("0x{max:x}{suffix}"),
            )
        }
    };

    CanonicalType {
        semantic: format!("{bits}-bit {} integer", if signed { "signed" } else { "unsigned" }),
        rust_name: rust_name(bits, signed),
        underlying,
        bits,
        signed,
        min_name: signed.then(|| format!("INT{bits}_MIN")),
        max_name: format!("{stem}{bits}_MAX"),
        min,
        max,
        min_expr,
        max_expr,
        c_name,
    }
}

/// A type named `c_name` aliasing `target`, with limits renamed under `stem`.
fn alias_type(
    target: &CanonicalType,
    c_name: &str,
    rust_name: &'static str,
    stem: &str,
    semantic: &str,
) -> CanonicalType {
    let prefix = if target.signed { "" } else { "U" };
    CanonicalType {
        semantic: semantic.into(),
        c_name: c_name.into(),
        rust_name,
        underlying: target.c_name.clone(),
        bits: target.bits,
        signed: target.signed,
        min_name: target.signed.then(|| format!("{stem}_MIN")),
        max_name: format!("{prefix}{stem}_MAX"),
        min: target.min,
        max: target.max,
        min_expr: target.min_name.clone(),
        max_expr: target.max_name.clone(),
    }
}

/// Pointer-width types for `pointer_bits`, or `None` when no fixed-width
/// type has that width.
fn pointer_pair(fixed: &[CanonicalType], pointer_bits: u32, source: IntegerSource) -> Option<TypePair> {
    let find = |signed: bool| {
        fixed
            .iter()
            .find(|t| t.bits == pointer_bits && t.signed == signed)
            .cloned()
    };
    let (s, u) = (find(true)?, find(false)?);

    match source {
        IntegerSource::Native => {
            // intptr_t and its limits come from <stdint.h> directly.
            let native = |t: &CanonicalType, c_name: &str, rust_name: &'static str| {
                let semantic = if t.signed {
                    "pointer-width signed integer"
                } else {
                    "pointer-width unsigned integer"
                };
                let mut ty = alias_type(t, c_name, rust_name, "INTPTR", semantic);
                ty.underlying = c_name.into();
                ty.min_expr = ty.min_name.clone();
                ty.max_expr = ty.max_name.clone();
                ty
            };
            Some(TypePair {
                signed: native(&s, "intptr_t", "IntPtr"),
                unsigned: native(&u, "uintptr_t", "UIntPtr"),
            })
        }
        IntegerSource::Manual => Some(TypePair {
            signed: alias_type(&s, "intptr_t", "IntPtr", "INTPTR", "pointer-width signed integer"),
            unsigned: alias_type(&u, "uintptr_t", "UIntPtr", "INTPTR", "pointer-width unsigned integer"),
        }),
    }
}

fn register_pair(pointer: &TypePair) -> TypePair {
    TypePair {
        signed: alias_type(
            &pointer.signed,
            "intreg_t",
            "IntReg",
            "INTREG",
            "register-width signed integer",
        ),
        unsigned: alias_type(
            &pointer.unsigned,
            "uintreg_t",
            "UIntReg",
            "INTREG",
            "register-width unsigned integer",
        ),
    }
}

/// Resolve a fact set into its canonical namespace.
pub fn resolve(facts: &PlatformFacts) -> Result<Resolution> {
    debug!(platform = %facts.name, compiler = %facts.compiler, "resolving namespace");

    let compiler = compiler::macros_for(&facts.compiler).ok_or_else(|| {
        KeelError::UnsupportedCompiler {
            platform: facts.name.clone(),
            compiler: facts.compiler.to_string(),
        }
    })?;

    if !matches!(facts.pointer_size, 4 | 8) {
        return Err(KeelError::UnsupportedPointerSize {
            platform: facts.name.clone(),
            pointer_size: facts.pointer_size,
        });
    }
    if facts.register_exceeds_pointer() {
        return Err(KeelError::RegisterWiderThanPointer {
            platform: facts.name.clone(),
            register_bits: facts.register_bits,
            pointer_bits: facts.pointer_bits(),
        });
    }

    let source = if facts.has_stdint {
        IntegerSource::Native
    } else {
        IntegerSource::Manual
    };

    let fixed: Vec<CanonicalType> = FIXED_WIDTHS
        .iter()
        .flat_map(|&bits| [true, false].map(|signed| fixed_type(bits, signed, source, compiler)))
        .collect();
    let pointer = pointer_pair(&fixed, facts.pointer_bits(), source).ok_or_else(|| {
        KeelError::UnsupportedPointerSize {
            platform: facts.name.clone(),
            pointer_size: facts.pointer_size,
        }
    })?;
    let register = register_pair(&pointer);
    let formats = FormatSpecifiers::for_pointer_size(facts.pointer_size, compiler.int64_length_modifier);

    debug!(
        platform = %facts.name,
        ?source,
        compiler = compiler.family,
        pointer_bits = facts.pointer_bits(),
        "namespace resolved"
    );

    Ok(Resolution {
        facts: facts.clone(),
        integer_source: source,
        fixed,
        pointer,
        register,
        compiler: *compiler,
        formats,
    })
}

/// Load a `.facts.toml` file and resolve it.
pub fn resolve_file(path: &Path) -> Result<Resolution> {
    let facts = load_facts_toml(path)?;
    resolve(&facts)
}
