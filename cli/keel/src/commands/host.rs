//! `keel host` — the facts and namespace this binary was built with.

use anyhow::Result;
use keel::resolve::Resolution;

use super::{resolve::render, FactSource, OutputFormat};

pub fn run(format: OutputFormat) -> Result<()> {
    let resolution = Resolution::host()?;
    print!("{}", render(&resolution, &FactSource::Host, format)?);
    if format == OutputFormat::Text {
        println!();
        println!("--- Build ---");
        println!("  compiler collaborator  {}", keel::compiler::active::MACROS.family);
        println!(
            "  integer path           {}",
            if keel::int::NATIVE { "native" } else { "manual (manual-int feature)" }
        );
        println!("  register bits          {}", keel::REGISTER_BITS);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_renders_in_both_formats() {
        assert!(run(OutputFormat::Text).is_ok());
        assert!(run(OutputFormat::Json).is_ok());
    }
}
