//! Subscriber setup for the CLI's `tracing` output.
//!
//! Directives come from `KEEL_LOG`, then `RUST_LOG`, then a default level
//! raised by each `-v`. Output goes to stderr so command output stays
//! pipeable.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding keel's own filter directives.
pub const LOG_ENV_VAR: &str = "KEEL_LOG";

/// Default directive for a verbosity count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn resolve_filter(verbose: u8) -> Result<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_ENV_VAR) {
        return EnvFilter::try_new(&directives)
            .map_err(|e| anyhow!("invalid {LOG_ENV_VAR} directive '{directives}': {e}"));
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) if verbose == 0 => Ok(filter),
        _ => Ok(EnvFilter::new(default_directive(verbose))),
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8) -> Result<()> {
    let filter = resolve_filter(verbose)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
