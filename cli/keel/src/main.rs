//! keel CLI — inspect, audit, and emit the canonical platform namespace.

mod commands;
mod logging;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use commands::emit::EmitArgs;
use commands::OutputFormat;
use manifest::KeelManifest;

#[derive(Parser)]
#[command(name = "keel", version, about = "Portable integer, limit, and format vocabulary per platform")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the facts and namespace this binary was built with
    Host {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List built-in and project fact sets
    Presets,
    /// Show the namespace a fact set resolves to
    Resolve {
        /// Preset name, project fact set, or path to a .facts.toml file
        facts: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Validate fact sets and check that they resolve
    Audit {
        /// Fact sets to audit (default: the project's facts/ directory)
        facts: Vec<String>,
        /// Also audit every built-in fact set
        #[arg(long)]
        presets: bool,
    },
    /// Write the C header for a fact set
    Emit {
        /// Preset name, project fact set, or path to a .facts.toml file
        facts: Option<String>,
        /// Prefix of the emitted compiler and utility macros
        #[arg(long)]
        prefix: Option<String>,
        /// Include guard (default: <PREFIX>_CORE_H)
        #[arg(long)]
        guard: Option<String>,
        /// Output file (default: [emit] output in keel.toml, else stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print to stdout even when keel.toml names an output file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Create a new keel project
    Init {
        /// Project name
        name: String,
        /// Fact set to seed the project's facts from (default: host)
        #[arg(long)]
        from: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {e:#}");
    }

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Host { format } => commands::host::run(format),

        Commands::Presets => {
            let (_, project_dir) = load_manifest_optional(&cwd)?;
            commands::presets::run(&project_dir.unwrap_or(cwd))
        }

        Commands::Resolve { facts, format } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::resolve::run(&project_dir, manifest.as_ref(), facts.as_deref(), format)
        }

        Commands::Audit { facts, presets } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::audit::run(&project_dir, manifest.as_ref(), &facts, presets)
        }

        Commands::Emit {
            facts,
            prefix,
            guard,
            output,
            stdout,
        } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            let args = EmitArgs {
                facts: facts.as_deref(),
                prefix: prefix.as_deref(),
                guard: guard.as_deref(),
                output: output.as_deref(),
                stdout,
            };
            commands::emit::run(&project_dir, manifest.as_ref(), &args)
        }

        Commands::Init { name, from } => commands::init::run(&name, from.as_deref()),
    }
}

fn load_manifest_optional(cwd: &Path) -> anyhow::Result<(Option<KeelManifest>, Option<PathBuf>)> {
    match KeelManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
