//! Command helper utilities

use console::Style;

use crate::cli::ConfigArgs;
use crate::config::PublishConfig;
use crate::error::Result;
use crate::publisher::BundlePublisher;

/// Resolve the effective configuration: file (if any), then flag overrides
pub fn resolve_config(args: &ConfigArgs) -> Result<PublishConfig> {
    let config = PublishConfig::load(args.config.as_deref())?.with_overrides(args.overrides());
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Publisher backed by real processes for the resolved configuration
pub fn publisher(args: &ConfigArgs) -> Result<BundlePublisher> {
    resolve_config(args).map(BundlePublisher::with_system_runner)
}

/// Print a labelled value, label in bold green
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", Style::new().bold().green().apply_to(label), value);
}
