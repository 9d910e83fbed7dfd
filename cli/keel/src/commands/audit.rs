//! `keel audit` — validate fact sets and check that they resolve.
//!
//! With no names, audits the project's `facts/` directory (or the host when
//! there is none). `--presets` adds every built-in fact set.

use std::path::Path;

use anyhow::{bail, Result};
use keel_facts::parse::{discover_facts, validate_facts, Severity, ValidationIssue};
use keel_facts::PlatformFacts;
use tracing::info;

use super::{load_facts, FactSource};
use crate::manifest::KeelManifest;

/// The audit result for one fact set.
#[derive(Debug)]
pub struct AuditOutcome {
    pub label: String,
    pub issues: Vec<ValidationIssue>,
    /// Why resolution failed, if it did.
    pub resolve_error: Option<String>,
}

impl AuditOutcome {
    pub fn passed(&self) -> bool {
        self.resolve_error.is_none() && !self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Validate and resolve one fact set.
pub fn audit_one(label: impl Into<String>, facts: &PlatformFacts) -> AuditOutcome {
    let issues = validate_facts(facts).err().unwrap_or_default();
    let resolve_error = keel::resolve(facts).err().map(|e| e.to_string());
    AuditOutcome {
        label: label.into(),
        issues,
        resolve_error,
    }
}

fn collect(
    project_dir: &Path,
    manifest: Option<&KeelManifest>,
    names: &[String],
    presets: bool,
) -> Result<Vec<(PlatformFacts, FactSource)>> {
    let mut sets = Vec::new();
    for name in names {
        sets.push(load_facts(Some(name.as_str()), project_dir, manifest)?);
    }
    if names.is_empty() {
        for (name, _) in discover_facts(project_dir)? {
            sets.push(load_facts(Some(name.as_str()), project_dir, manifest)?);
        }
        if sets.is_empty() && !presets {
            sets.push(load_facts(None, project_dir, manifest)?);
        }
    }
    if presets {
        for (name, _) in PlatformFacts::builtin_presets() {
            if let Some(facts) = PlatformFacts::builtin(name) {
                sets.push((facts, FactSource::Preset(name.to_string())));
            }
        }
    }
    Ok(sets)
}

pub fn run(
    project_dir: &Path,
    manifest: Option<&KeelManifest>,
    names: &[String],
    presets: bool,
) -> Result<()> {
    let sets = collect(project_dir, manifest, names, presets)?;
    let outcomes: Vec<AuditOutcome> = sets
        .iter()
        .map(|(facts, source)| audit_one(format!("{} ({source})", facts.name), facts))
        .collect();

    for outcome in &outcomes {
        let mark = if outcome.passed() { "ok  " } else { "FAIL" };
        println!("{mark} {}", outcome.label);
        for issue in &outcome.issues {
            let level = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!("       {level}: {}", issue.message);
        }
        if let Some(e) = &outcome.resolve_error {
            println!("       resolve: {e}");
        }
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    info!(audited = outcomes.len(), failed, "audit finished");
    if failed > 0 {
        bail!("{failed} of {} fact sets failed the audit", outcomes.len());
    }
    println!();
    println!("{} fact set(s) audited, all resolve", outcomes.len());
    Ok(())
}
