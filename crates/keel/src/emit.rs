//! Render a [`Resolution`] as a C header.
//!
//! The header is the same namespace the Rust side exposes, for C and C++
//! translation units built against the same facts. It is guarded against
//! repeated inclusion and every section is driven by the resolution, so
//! two fact sets that resolve the same produce byte-identical headers.
//!
//! Integer and limit names keep their canonical C spelling (`int32_t`,
//! `UINT64_MAX`). Compiler macros, utility macros, and format specifiers
//! carry the configured prefix (`KEEL_FORCE_INLINE`, `KEEL_CAT`,
//! `KEEL_U64D`).

use keel_facts::TargetFamily;
use tracing::debug;

use crate::error::{KeelError, Result};
use crate::resolve::{CanonicalType, IntegerSource, Resolution};

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "KEEL";

/// Macros that trim `<windows.h>` while it is included.
const LEAN_WINDOWS_MACROS: [&str; 2] = ["WIN32_LEAN_AND_MEAN", "NOMINMAX"];

/// Column the values of `#define`s are aligned to.
const DEFINE_COLUMN: usize = 32;

/// Options for [`emit_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Prefix of the compiler macros, utility macros, and format specifiers.
    pub prefix: String,
    /// Include guard; `<PREFIX>_CORE_H` when unset.
    pub guard: Option<String>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            guard: None,
        }
    }
}

impl HeaderOptions {
    /// Options with the given prefix and the default guard.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            guard: None,
        }
    }

    /// The include guard that will be emitted.
    pub fn guard(&self) -> String {
        self.guard
            .clone()
            .unwrap_or_else(|| format!("{}_CORE_H", self.prefix))
    }
}

/// Whether `s` is a valid C identifier.
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

struct Header {
    out: String,
}

impl Header {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.blank();
        self.line(&format!("/* {title} */"));
    }

    fn define(&mut self, name: &str, value: &str) {
        let head = format!("#define {name}");
        if value.is_empty() {
            self.line(&head);
        } else {
            let pad = DEFINE_COLUMN.saturating_sub(head.len()).max(1);
            self.line(&format!("{head}{:pad$}{value}", ""));
        }
    }

    fn typedef(&mut self, ty: &CanonicalType) {
        self.line(&format!("typedef {} {};", ty.underlying, ty.c_name));
    }

    fn limits(&mut self, ty: &CanonicalType) {
        if let (Some(name), Some(expr)) = (&ty.min_name, &ty.min_expr) {
            self.define(name, expr);
        }
        self.define(&ty.max_name, &ty.max_expr);
    }
}

/// Render `resolution` as a header.
pub fn emit_header(resolution: &Resolution, options: &HeaderOptions) -> Result<String> {
    if !is_c_identifier(&options.prefix) {
        return Err(KeelError::InvalidPrefix {
            prefix: options.prefix.clone(),
        });
    }
    let guard = options.guard();
    if !is_c_identifier(&guard) {
        return Err(KeelError::InvalidPrefix { prefix: guard });
    }
    let p = options.prefix.as_str();
    let facts = &resolution.facts;
    let compiler = &resolution.compiler;

    let mut h = Header { out: String::new() };
    h.line(&format!(
        "/* Generated by keel for {} ({}, {}). Do not edit. */",
        facts.name, facts.target, compiler.display_name
    ));
    h.line(&format!("#ifndef {guard}"));
    h.line(&format!("#define {guard}"));

    if facts.target == TargetFamily::Win32 {
        h.section("platform");
        for name in LEAN_WINDOWS_MACROS {
            h.line(&format!("#ifndef {name}"));
            h.define(name, "");
            h.line("#endif");
        }
        h.line("#include <windows.h>");
        for name in LEAN_WINDOWS_MACROS {
            h.line(&format!("#undef {name}"));
        }
    }

    h.section("fixed-width integers");
    h.line("#include <stddef.h>");
    match resolution.integer_source {
        IntegerSource::Native => h.line("#include <stdint.h>"),
        IntegerSource::Manual => {
            for ty in &resolution.fixed {
                h.typedef(ty);
            }
            h.blank();
            for ty in &resolution.fixed {
                h.limits(ty);
            }
            h.section("pointer-width integers");
            h.typedef(&resolution.pointer.signed);
            h.typedef(&resolution.pointer.unsigned);
            h.limits(&resolution.pointer.signed);
            h.limits(&resolution.pointer.unsigned);
        }
    }

    h.section("register-width integers");
    h.typedef(&resolution.register.signed);
    h.typedef(&resolution.register.unsigned);
    h.limits(&resolution.register.signed);
    h.limits(&resolution.register.unsigned);

    h.section(compiler.display_name);
    h.define(&format!("{p}_FORCE_INLINE"), compiler.force_inline);
    h.define(&format!("{p}_NO_INLINE"), compiler.no_inline);
    h.define(&format!("{p}_THREAD_LOCAL"), compiler.thread_local);
    h.define(&format!("{p}_DEBUG_BREAK()"), compiler.debug_break);
    h.define(&format!("{p}_LIKELY(x)"), compiler.likely);
    h.define(&format!("{p}_UNLIKELY(x)"), compiler.unlikely);

    h.section("utilities");
    // two stages so macro arguments expand before # and ##
    h.define(&format!("{p}_STRINGIFY_(x)"), "#x");
    h.define(&format!("{p}_STRINGIFY(x)"), &format!("{p}_STRINGIFY_(x)"));
    h.define(&format!("{p}_CAT_(a, b)"), "a##b");
    h.define(&format!("{p}_CAT(a, b)"), &format!("{p}_CAT_(a, b)"));
    h.define(
        &format!("{p}_UNIQUE_VARIABLE(prefix)"),
        &format!("{p}_CAT(prefix, __LINE__)"),
    );
    h.define(
        &format!("{p}_PTR_OFFSET(ptr, ofs)"),
        "((void *)((char *)(ptr) + (ofs)))",
    );
    h.define(&format!("{p}_MEMBER_OFFSET(type, member)"), "offsetof(type, member)");
    h.define(
        &format!("{p}_STATIC_ARRAY_SIZE(arr)"),
        "(sizeof(arr) / sizeof((arr)[0]))",
    );
    h.define(&format!("{p}_UNUSED(x)"), "((void)(x))");

    h.section("format specifiers");
    for (name, spec) in resolution.formats.entries() {
        h.define(&format!("{p}_{name}"), &format!("\"{spec}\""));
    }

    h.blank();
    h.line(&format!("#endif /* {guard} */"));

    debug!(platform = %facts.name, %guard, bytes = h.out.len(), "header emitted");
    Ok(h.out)
}

#[cfg(test)]
mod tests {
    use keel_facts::PlatformFacts;

    use super::*;
    use crate::resolve::resolve;

    fn header_for(facts: PlatformFacts) -> String {
        emit_header(&resolve(&facts).unwrap(), &HeaderOptions::default()).unwrap()
    }

    #[test]
    fn guarded_against_reinclusion() {
        let h = header_for(PlatformFacts::linux_x86_64());
        assert!(h.contains("#ifndef KEEL_CORE_H\n#define KEEL_CORE_H\n"));
        assert!(h.trim_end().ends_with("#endif /* KEEL_CORE_H */"));
    }

    #[test]
    fn native_path_includes_stdint_and_skips_typedefs() {
        let h = header_for(PlatformFacts::linux_x86_64());
        assert!(h.contains("#include <stdint.h>"));
        assert!(!h.contains("typedef signed char int8_t;"));
        assert!(h.contains("typedef intptr_t intreg_t;"));
        assert!(h.contains("UINTREG_MAX"));
        assert!(!h.contains("windows.h"));
    }

    #[test]
    fn manual_path_declares_everything() {
        let h = header_for(PlatformFacts::windows_x86_msvc_legacy());
        assert!(!h.contains("<stdint.h>"));
        assert!(h.contains("typedef signed char int8_t;"));
        assert!(h.contains("typedef __int64 int64_t;"));
        assert!(h.contains("typedef unsigned __int64 uint64_t;"));
        assert!(h.contains("typedef int32_t intptr_t;"));
        assert!(h.contains("0xffffffffffffffffu"));
        assert!(h.contains("(-0x7fffffffffffffff - 1)"));
    }

    #[test]
    fn win32_pulls_in_lean_windows_header() {
        let h = header_for(PlatformFacts::windows_x86_64_msvc());
        let include = h.find("#include <windows.h>").unwrap();
        for name in LEAN_WINDOWS_MACROS {
            let guarded = format!("#ifndef {name}\n#define {name}\n#endif\n");
            let define = h.find(&guarded).unwrap_or_else(|| panic!("{name} not guarded"));
            let undef = h.find(&format!("#undef {name}\n")).unwrap_or_else(|| panic!("{name} not undefined"));
            assert!(define < include && include < undef);
        }
        assert!(!header_for(PlatformFacts::linux_x86_64()).contains("#undef"));
    }

    #[test]
    fn format_specifiers_follow_pointer_size() {
        let h32 = header_for(PlatformFacts::linux_armv7());
        let h64 = header_for(PlatformFacts::linux_x86_64());
        let line = |h: &str, name: &str| {
            h.lines()
                .find(|l| l.starts_with(&format!("#define {name} ")))
                .map(|l| l.split_whitespace().last().unwrap_or_default().to_string())
        };
        assert_eq!(line(&h32, "KEEL_SPTRD").as_deref(), Some("\"d\""));
        assert_eq!(line(&h64, "KEEL_SPTRD").as_deref(), Some("\"lld\""));
        assert_eq!(line(&h64, "KEEL_UREGX"), line(&h64, "KEEL_UPTRX"));
    }

    #[test]
    fn prefix_applies_to_macros_and_specifiers() {
        let r = resolve(&PlatformFacts::cortex_m()).unwrap();
        let h = emit_header(&r, &HeaderOptions::with_prefix("TURF")).unwrap();
        assert!(h.contains("#ifndef TURF_CORE_H"));
        assert!(h.contains("#define TURF_FORCE_INLINE"));
        assert!(h.contains("#define TURF_CAT(a, b)"));
        assert!(h.contains("#define TURF_U64D"));
        assert!(h.contains("#define TURF_UREGX"));
        assert!(!h.lines().any(|l| l.starts_with("#define U64D")));
        assert!(!h.contains("KEEL_"));
        // canonical integer names stay unprefixed
        assert!(h.contains("typedef intptr_t intreg_t;"));
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        let r = resolve(&PlatformFacts::linux_x86_64()).unwrap();
        for bad in ["", "9LIVES", "MY-LIB"] {
            let err = emit_header(&r, &HeaderOptions::with_prefix(bad)).unwrap_err();
            assert!(matches!(err, KeelError::InvalidPrefix { .. }));
        }
        let opts = HeaderOptions {
            prefix: "OK".into(),
            guard: Some("not a guard".into()),
        };
        assert!(emit_header(&r, &opts).is_err());
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(
            header_for(PlatformFacts::macos_aarch64()),
            header_for(PlatformFacts::macos_aarch64())
        );
    }

    #[test]
    fn compiler_section_uses_collaborator_spelling() {
        let msvc = header_for(PlatformFacts::windows_x86_64_msvc());
        assert!(msvc.contains("__forceinline"));
        assert!(msvc.contains("__declspec(thread)"));
        let gcc = header_for(PlatformFacts::linux_aarch64());
        assert!(gcc.contains("__builtin_expect(!!(x), 1)"));
        assert!(gcc.contains("__thread"));
    }
}
