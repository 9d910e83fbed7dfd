pub mod audit;
pub mod emit;
pub mod host;
pub mod init;
pub mod presets;
pub mod resolve;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use keel_facts::parse::{load_facts_toml, FACTS_SUFFIX};
use keel_facts::PlatformFacts;

use crate::manifest::KeelManifest;

/// Output format of the inspection commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where a fact set was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactSource {
    /// The facts this binary was compiled against.
    Host,
    /// A built-in preset.
    Preset(String),
    /// A `.facts.toml` file.
    File(PathBuf),
}

impl fmt::Display for FactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactSource::Host => write!(f, "host"),
            FactSource::Preset(name) => write!(f, "preset '{name}'"),
            FactSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn looks_like_path(name: &str) -> bool {
    name.ends_with(".toml") || name.contains('/') || name.contains('\\')
}

/// Load the fact set named by `name`, falling back to the manifest default
/// and then the host.
///
/// A name is tried as a file path (if it looks like one), then as a fact
/// file under the project's `facts/` directory, then as a built-in preset.
pub fn load_facts(
    name: Option<&str>,
    project_dir: &Path,
    manifest: Option<&KeelManifest>,
) -> Result<(PlatformFacts, FactSource)> {
    let Some(name) = name.or_else(|| manifest.and_then(|m| m.default_facts())) else {
        return Ok((keel::host_facts(), FactSource::Host));
    };
    if name == "host" {
        return Ok((keel::host_facts(), FactSource::Host));
    }

    if looks_like_path(name) {
        let given = PathBuf::from(name);
        let path = if given.is_file() || given.is_absolute() {
            given
        } else {
            project_dir.join(given)
        };
        let facts = load_facts_toml(&path)
            .with_context(|| format!("loading fact file {}", path.display()))?;
        return Ok((facts, FactSource::File(path)));
    }

    let local = project_dir.join("facts").join(format!("{name}{FACTS_SUFFIX}"));
    if local.is_file() {
        let facts = load_facts_toml(&local)
            .with_context(|| format!("loading fact file {}", local.display()))?;
        return Ok((facts, FactSource::File(local)));
    }

    match PlatformFacts::builtin(name) {
        Some(facts) => Ok((facts, FactSource::Preset(name.to_string()))),
        None => bail!("unknown fact set: '{name}'. Use 'keel presets' to see available fact sets."),
    }
}

#[cfg(test)]
mod tests {
    use keel_facts::parse::facts_to_toml;

    use super::*;

    #[test]
    fn no_name_and_no_manifest_is_host() {
        let dir = tempfile::tempdir().unwrap();
        let (facts, source) = load_facts(None, dir.path(), None).unwrap();
        assert_eq!(source, FactSource::Host);
        assert_eq!(facts, keel::host_facts());
    }

    #[test]
    fn preset_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let (facts, source) = load_facts(Some("cortex-m"), dir.path(), None).unwrap();
        assert_eq!(source, FactSource::Preset("cortex-m".into()));
        assert_eq!(facts.pointer_size, 4);
    }

    #[test]
    fn project_fact_file_shadows_preset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("facts")).unwrap();
        let mut custom = PlatformFacts::cortex_m();
        custom.has_stdint = false;
        std::fs::write(
            dir.path().join("facts/cortex-m.facts.toml"),
            facts_to_toml(&custom).unwrap(),
        )
        .unwrap();

        let (facts, source) = load_facts(Some("cortex-m"), dir.path(), None).unwrap();
        assert!(matches!(source, FactSource::File(_)));
        assert!(!facts.has_stdint);
    }

    #[test]
    fn manifest_default_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let manifest: KeelManifest =
            toml::from_str("[project]\nname = \"p\"\n[facts]\ndefault = \"linux-armv7\"\n").unwrap();
        let (facts, _) = load_facts(None, dir.path(), Some(&manifest)).unwrap();
        assert_eq!(facts.name, "linux-armv7");
    }

    #[test]
    fn path_relative_to_project() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("board.facts.toml"),
            facts_to_toml(&PlatformFacts::linux_aarch64()).unwrap(),
        )
        .unwrap();
        let (facts, source) = load_facts(Some("board.facts.toml"), dir.path(), None).unwrap();
        assert_eq!(facts.name, "linux-aarch64");
        assert_eq!(source, FactSource::File(dir.path().join("board.facts.toml")));
    }

    #[test]
    fn unknown_name_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_facts(Some("pdp-11"), dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("unknown fact set"));
    }
}
