//! `keel presets` — list the fact sets commands can name.

use std::path::Path;

use anyhow::Result;
use keel_facts::parse::discover_facts;
use keel_facts::PlatformFacts;

pub fn run(project_dir: &Path) -> Result<()> {
    println!("Built-in fact sets:");
    println!();
    for (name, description) in PlatformFacts::builtin_presets() {
        println!("  {name:<25} {description}");
    }

    let local = discover_facts(project_dir)?;
    if !local.is_empty() {
        println!();
        println!("Project fact sets:");
        println!();
        for (name, path) in &local {
            println!("  {name:<25} {}", path.display());
        }
    }
    println!();
    println!("Use 'keel resolve <name>' to see the namespace a fact set resolves to.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_with_and_without_project_facts() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path()).is_ok());
        std::fs::create_dir_all(dir.path().join("facts")).unwrap();
        std::fs::write(dir.path().join("facts/board.facts.toml"), "").unwrap();
        assert!(run(dir.path()).is_ok());
    }
}
