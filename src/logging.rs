//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to command
//! results. `RUST_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::EnvFilter;

fn default_level(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let level = default_level(verbose);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(level))
                .unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_ansi(console::Term::stderr().is_term())
        .with_writer(std::io::stderr)
        .try_init();
}
