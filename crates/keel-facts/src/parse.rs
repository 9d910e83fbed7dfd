//! TOML parsing, serialization, validation, and discovery for fact files.
//!
//! Fact sets are stored as `.facts.toml` files in the `facts/` directory of
//! a keel project. This module provides functions to load, validate,
//! serialize, and discover these files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{FactsError, Result};
use crate::facts::PlatformFacts;

/// File suffix of fact files.
pub const FACTS_SUFFIX: &str = ".facts.toml";

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A validation issue found in a fact set.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Load a fact set from a `.facts.toml` file.
pub fn load_facts_toml(path: &Path) -> Result<PlatformFacts> {
    if !path.exists() {
        return Err(FactsError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_facts_toml(&content)
}

/// Parse a fact set from a TOML string.
pub fn parse_facts_toml(toml_str: &str) -> Result<PlatformFacts> {
    let facts: PlatformFacts = toml::from_str(toml_str)?;
    Ok(facts)
}

/// Serialize a fact set to pretty TOML.
pub fn facts_to_toml(facts: &PlatformFacts) -> Result<String> {
    let toml_str = toml::to_string_pretty(facts)?;
    Ok(toml_str)
}

/// Check a fact set for everything resolution would trip over.
///
/// Returns `Ok(())` if there are no issues at all, or `Err(issues)` with
/// every problem found, warnings included.
pub fn validate_facts(facts: &PlatformFacts) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if facts.name.trim().is_empty() {
        issues.push(ValidationIssue::warning("fact set has an empty name"));
    }

    if !matches!(facts.pointer_size, 4 | 8) {
        issues.push(ValidationIssue::error(format!(
            "pointer size {} is not supported (expected 4 or 8 bytes)",
            facts.pointer_size
        )));
    }

    let valid_register_bits = [8, 16, 32, 64, 128];
    if !valid_register_bits.contains(&facts.register_bits) {
        issues.push(ValidationIssue::error(format!(
            "register width {} is not a valid power of 2 (expected 8, 16, 32, 64, or 128)",
            facts.register_bits
        )));
    }

    if facts.register_exceeds_pointer() {
        issues.push(ValidationIssue::error(format!(
            "register width ({} bits) exceeds pointer width ({} bits); \
             a pointer-sized register type would be truncated",
            facts.register_bits,
            facts.pointer_bits()
        )));
    }

    if !facts.compiler.is_supported() {
        issues.push(ValidationIssue::error(format!(
            "compiler family '{}' is not supported (expected msvc or gcc)",
            facts.compiler
        )));
    }

    if facts.compiler == crate::CompilerFamily::Msvc
        && facts.target != crate::TargetFamily::Win32
    {
        issues.push(ValidationIssue::warning(format!(
            "msvc compiler paired with non-win32 target '{}'",
            facts.target
        )));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Discover all `.facts.toml` files in a project's `facts/` directory.
///
/// Returns a list of (fact set name, file path) pairs sorted by name.
pub fn discover_facts(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let facts_dir = project_dir.join("facts");
    if !facts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(&facts_dir)? {
        let path = entry?.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(FACTS_SUFFIX))
            .map(str::to_string);
        if let Some(name) = name {
            found.push((name, path));
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{CompilerFamily, TargetFamily};

    #[test]
    fn round_trip_legacy_msvc() {
        let original = PlatformFacts::windows_x86_msvc_legacy();
        let toml_str = facts_to_toml(&original).unwrap();
        assert!(toml_str.contains("has-stdint = false"));
        assert_eq!(parse_facts_toml(&toml_str).unwrap(), original);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
name = "minimal-arm"
target = "freestanding"
compiler = "gcc"
pointer-size = 4
register-bits = 32
"#;
        let facts = parse_facts_toml(toml_str).unwrap();
        assert_eq!(facts.name, "minimal-arm");
        assert_eq!(facts.target, TargetFamily::Freestanding);
        assert_eq!(facts.pointer_size, 4);
        // has-stdint defaults to true
        assert!(facts.has_stdint);
    }

    #[test]
    fn parse_keeps_unknown_compiler() {
        let toml_str = r#"
name = "dos"
target = "freestanding"
compiler = "watcom"
pointer-size = 4
register-bits = 32
"#;
        let facts = parse_facts_toml(toml_str).unwrap();
        assert_eq!(facts.compiler, CompilerFamily::Unknown("watcom".into()));
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_facts_toml("this is not valid toml [[[").is_err());
    }

    #[test]
    fn parse_missing_field_returns_error() {
        assert!(parse_facts_toml("name = \"incomplete\"\n").is_err());
    }

    #[test]
    fn parse_unknown_target_returns_error() {
        let toml_str = r#"
name = "bad"
target = "beos"
compiler = "gcc"
pointer-size = 8
register-bits = 64
"#;
        assert!(parse_facts_toml(toml_str).is_err());
    }

    #[test]
    fn validate_presets() {
        for (name, _) in PlatformFacts::builtin_presets() {
            let facts = PlatformFacts::builtin(name).unwrap();
            let result = validate_facts(&facts);
            if name == "linux-x32" {
                let issues = result.unwrap_err();
                assert!(issues.iter().any(|i| i.message.contains("exceeds pointer width")));
            } else {
                assert!(result.is_ok(), "{name} should validate cleanly");
            }
        }
    }

    #[test]
    fn validate_bad_pointer_size() {
        let mut facts = PlatformFacts::linux_x86_64();
        facts.pointer_size = 2;
        facts.register_bits = 16;
        let issues = validate_facts(&facts).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("pointer size 2")));
    }

    #[test]
    fn validate_bad_register_width() {
        let mut facts = PlatformFacts::linux_x86_64();
        facts.register_bits = 48;
        let issues = validate_facts(&facts).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("register width 48")));
    }

    #[test]
    fn validate_unknown_compiler() {
        let mut facts = PlatformFacts::linux_x86_64();
        facts.compiler = CompilerFamily::parse("watcom");
        let issues = validate_facts(&facts).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.message.contains("watcom")));
    }

    #[test]
    fn validate_msvc_off_windows_is_a_warning() {
        let mut facts = PlatformFacts::linux_x86_64();
        facts.compiler = CompilerFamily::Msvc;
        let issues = validate_facts(&facts).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn discover_facts_finds_files() {
        let dir = tempfile::tempdir().unwrap();
        let facts_dir = dir.path().join("facts");
        std::fs::create_dir_all(&facts_dir).unwrap();

        let template = facts_to_toml(&PlatformFacts::cortex_m()).unwrap();
        std::fs::write(facts_dir.join("board-b.facts.toml"), &template).unwrap();
        std::fs::write(facts_dir.join("board-a.facts.toml"), &template).unwrap();
        // Other files are ignored
        std::fs::write(facts_dir.join("notes.txt"), "ignore me").unwrap();

        let found = discover_facts(dir.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, "board-a");
        assert_eq!(found[1].0, "board-b");
    }

    #[test]
    fn discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_facts(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn load_not_found() {
        let result = load_facts_toml(Path::new("/nonexistent/path.facts.toml"));
        assert!(matches!(result.unwrap_err(), FactsError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.facts.toml");
        let mut facts = PlatformFacts::linux_aarch64();
        facts.name = "file-test".into();
        std::fs::write(&path, facts_to_toml(&facts).unwrap()).unwrap();
        assert_eq!(load_facts_toml(&path).unwrap(), facts);
    }
}
