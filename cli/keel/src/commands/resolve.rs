//! `keel resolve` — show the namespace a fact set resolves to.

use std::path::Path;

use anyhow::{Context, Result};
use keel::resolve::{CanonicalType, IntegerSource, Resolution};

use super::{load_facts, FactSource, OutputFormat};
use crate::manifest::KeelManifest;

pub fn run(
    project_dir: &Path,
    manifest: Option<&KeelManifest>,
    facts: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (facts, source) = load_facts(facts, project_dir, manifest)?;
    let resolution = keel::resolve(&facts)
        .with_context(|| format!("resolving facts from {source}"))?;
    print!("{}", render(&resolution, &source, format)?);
    Ok(())
}

/// Render a resolution in the requested format.
pub fn render(resolution: &Resolution, source: &FactSource, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(resolution)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_text(resolution, source)),
    }
}

fn range(ty: &CanonicalType) -> String {
    format!("[{}, {}]", ty.min, ty.max)
}

fn render_text(r: &Resolution, source: &FactSource) -> String {
    let facts = &r.facts;
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(format!("=== Namespace: {} ===", facts.name));
    line(format!("Source:     {source}"));
    line(format!("Target:     {}", facts.target));
    line(format!("Compiler:   {} ({})", r.compiler.display_name, facts.compiler));
    line(format!("Pointers:   {} bytes", facts.pointer_size));
    line(format!("Registers:  {} bits", facts.register_bits));
    line(format!(
        "Integers:   {}",
        match r.integer_source {
            IntegerSource::Native => "native (<stdint.h>)",
            IntegerSource::Manual => "declared manually",
        }
    ));
    line(String::new());

    line("--- Canonical types ---".into());
    for ty in r.all_types() {
        line(format!(
            "  {:<10} {:<8} = {:<20} {:>2} bits  {}",
            ty.c_name,
            ty.rust_name,
            ty.underlying,
            ty.bits,
            range(ty)
        ));
    }
    line(String::new());

    line(format!("--- Compiler ({}) ---", r.compiler.family));
    let c = &r.compiler;
    for (name, value) in [
        ("int64", c.int64_keyword),
        ("force-inline", c.force_inline),
        ("no-inline", c.no_inline),
        ("thread-local", c.thread_local),
        ("debug-break", c.debug_break),
        ("likely(x)", c.likely),
        ("unlikely(x)", c.unlikely),
    ] {
        line(format!("  {name:<14} {value}"));
    }
    line(String::new());

    line("--- Format specifiers ---".into());
    for (name, spec) in r.formats.entries() {
        line(format!("  {name:<6} \"{spec}\""));
    }
    out
}

#[cfg(test)]
mod tests {
    use keel_facts::PlatformFacts;

    use super::*;

    #[test]
    fn text_lists_every_type_and_specifier() {
        let r = keel::resolve(&PlatformFacts::windows_x86_msvc_legacy()).unwrap();
        let text = render(&r, &FactSource::Preset("windows-x86-msvc-legacy".into()), OutputFormat::Text).unwrap();
        assert!(text.contains("=== Namespace: windows-x86-msvc-legacy ==="));
        assert!(text.contains("declared manually"));
        for ty in r.all_types() {
            assert!(text.contains(&ty.c_name), "{}", ty.c_name);
        }
        assert!(text.contains("UREGX"));
        assert!(text.contains("__int64"));
    }

    #[test]
    fn json_is_parseable() {
        let r = keel::resolve(&PlatformFacts::linux_x86_64()).unwrap();
        let json = render(&r, &FactSource::Host, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["integer-source"], "native");
        assert_eq!(value["formats"]["uptrd"], "llu");
        assert_eq!(value["facts"]["pointer-size"], 8);
    }

    #[test]
    fn unresolvable_facts_fail_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), None, Some("linux-x32"), OutputFormat::Text).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("preset 'linux-x32'"));
        assert!(msg.contains("exceeds pointer width"));
    }
}
