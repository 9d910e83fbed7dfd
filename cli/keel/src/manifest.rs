//! `keel.toml` project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the project configuration.
pub const MANIFEST_FILE: &str = "keel.toml";

/// The top-level configuration of a keel project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeelManifest {
    pub project: ProjectConfig,
    #[serde(default)]
    pub facts: Option<FactsConfig>,
    #[serde(default)]
    pub emit: Option<EmitConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Which fact set commands use when none is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactsConfig {
    /// A preset name, a name under `facts/`, or a path to a fact file.
    #[serde(default)]
    pub default: Option<String>,
}

/// Defaults for `keel emit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmitConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub guard: Option<String>,
    /// Output path, relative to the project directory.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl KeelManifest {
    /// Search upward from `start_dir` for a `keel.toml`, returning it with
    /// the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: KeelManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                tracing::debug!(path = %candidate.display(), "loaded project manifest");
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing keel.toml")
    }

    /// The configured default fact set.
    pub fn default_facts(&self) -> Option<&str> {
        self.facts.as_ref().and_then(|f| f.default.as_deref())
    }

    /// The `[emit]` section, or empty defaults.
    pub fn emit_config(&self) -> EmitConfig {
        self.emit.clone().unwrap_or_default()
    }

    /// The template written by `keel init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"

[facts]
default = "{name}"

[emit]
prefix = "KEEL"
output = "include/keel_core.h"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let manifest = KeelManifest::from_str(
            r#"
[project]
name = "firmware"
description = "Board support"

[facts]
default = "cortex-m"

[emit]
prefix = "FW"
guard = "FW_PLATFORM_H"
output = "include/fw_platform.h"
"#,
        )
        .unwrap();
        assert_eq!(manifest.project.name, "firmware");
        assert_eq!(manifest.default_facts(), Some("cortex-m"));
        let emit = manifest.emit_config();
        assert_eq!(emit.prefix.as_deref(), Some("FW"));
        assert_eq!(emit.guard.as_deref(), Some("FW_PLATFORM_H"));
        assert_eq!(emit.output, Some(PathBuf::from("include/fw_platform.h")));
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = KeelManifest::from_str("[project]\nname = \"bare\"\n").unwrap();
        assert!(manifest.default_facts().is_none());
        assert!(manifest.emit_config().prefix.is_none());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(KeelManifest::from_str("[project\nname =").is_err());
        assert!(KeelManifest::from_str("[facts]\ndefault = \"x\"\n").is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let manifest = KeelManifest::from_str(&KeelManifest::template("demo")).unwrap();
        assert_eq!(manifest.project.name, "demo");
        assert_eq!(manifest.default_facts(), Some("demo"));
        assert_eq!(manifest.emit_config().prefix.as_deref(), Some("KEEL"));
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[project]\nname = \"up\"\n").unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found) = KeelManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.project.name, "up");
        assert_eq!(found, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "not = [valid").unwrap();
        let err = KeelManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
