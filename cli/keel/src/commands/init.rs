//! `keel init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use keel_facts::parse::{facts_to_toml, FACTS_SUFFIX};

use super::load_facts;
use crate::manifest::{KeelManifest, MANIFEST_FILE};

/// Create a new keel project in the directory `name`.
///
/// The project's fact file is seeded from `from` (any fact set name) or
/// from the host.
pub fn run(name: &str, from: Option<&str>) -> Result<()> {
    create_project(Path::new(name), name, from)
}

pub(crate) fn create_project(project_dir: &Path, name: &str, from: Option<&str>) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    let cwd = std::env::current_dir()?;
    let (mut facts, source) = load_facts(from, &cwd, None)?;
    facts.name = name.to_string();

    fs::create_dir_all(project_dir.join("facts")).context("creating facts/ directory")?;
    fs::create_dir_all(project_dir.join("include")).context("creating include/ directory")?;

    fs::write(project_dir.join(MANIFEST_FILE), KeelManifest::template(name))
        .context("writing keel.toml")?;

    let facts_file = format!("{name}{FACTS_SUFFIX}");
    fs::write(project_dir.join("facts").join(&facts_file), facts_to_toml(&facts)?)
        .with_context(|| format!("writing facts/{facts_file}"))?;

    println!("Created project '{name}' (facts seeded from {source})");
    println!("  {name}/{MANIFEST_FILE}");
    println!("  {name}/facts/{facts_file}");
    println!("  {name}/include/");

    Ok(())
}

#[cfg(test)]
mod tests {
    use keel_facts::parse::load_facts_toml;

    use super::*;

    #[test]
    fn init_creates_project_structure() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("board");
        create_project(&project, "board", None).unwrap();

        assert!(project.join("keel.toml").is_file());
        assert!(project.join("facts/board.facts.toml").is_file());
        assert!(project.join("include").is_dir());
    }

    #[test]
    fn init_seeds_from_named_facts() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("mcu");
        create_project(&project, "mcu", Some("cortex-m")).unwrap();

        let facts = load_facts_toml(&project.join("facts/mcu.facts.toml")).unwrap();
        assert_eq!(facts.name, "mcu");
        assert_eq!(facts.pointer_size, 4);
    }

    #[test]
    fn init_project_resolves_its_default() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("app");
        create_project(&project, "app", Some("linux-aarch64")).unwrap();

        let (manifest, found) = KeelManifest::find_and_load(&project).unwrap().unwrap();
        let (facts, _) = load_facts(None, &found, Some(&manifest)).unwrap();
        assert_eq!(facts.name, "app");
        assert!(keel::resolve(&facts).is_ok());
    }

    #[test]
    fn init_refuses_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_project(dir.path(), "x", None).is_err());
    }
}
