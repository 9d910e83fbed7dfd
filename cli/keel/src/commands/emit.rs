//! `keel emit` — write the C header for a fact set.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use keel::emit::{emit_header, HeaderOptions, DEFAULT_PREFIX};

use super::load_facts;
use crate::manifest::KeelManifest;

/// Command-line overrides; unset fields fall back to `[emit]` in `keel.toml`.
#[derive(Debug, Default)]
pub struct EmitArgs<'a> {
    pub facts: Option<&'a str>,
    pub prefix: Option<&'a str>,
    pub guard: Option<&'a str>,
    pub output: Option<&'a Path>,
    pub stdout: bool,
}

pub fn run(project_dir: &Path, manifest: Option<&KeelManifest>, args: &EmitArgs<'_>) -> Result<()> {
    let config = manifest.map(KeelManifest::emit_config).unwrap_or_default();
    let options = HeaderOptions {
        prefix: args
            .prefix
            .map(str::to_string)
            .or(config.prefix)
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        guard: args.guard.map(str::to_string).or(config.guard),
    };

    let (facts, source) = load_facts(args.facts, project_dir, manifest)?;
    let resolution = keel::resolve(&facts)
        .with_context(|| format!("resolving facts from {source}"))?;
    let header = emit_header(&resolution, &options)?;

    let output: Option<PathBuf> = if args.stdout {
        None
    } else {
        args.output
            .map(Path::to_path_buf)
            .or_else(|| config.output.map(|p| project_dir.join(p)))
    };

    match output {
        None => print!("{header}"),
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&path, &header).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} for '{}' to {}", options.guard(), facts.name, path.display());
        }
    }
    Ok(())
}
