//! Version command implementation
//!
//! Reports this binary's version next to the configured cnab-to-oci's, since
//! a publish run depends on both.

use crate::cli::ConfigArgs;
use crate::commands::helpers;
use crate::error::Result;

/// Print cnab-publish and tool versions; an unusable tool is reported, not fatal
pub fn run(config: &ConfigArgs) -> Result<()> {
    let publisher = helpers::publisher(config)?;
    let tool = &publisher.config().tool;

    helpers::print_field("cnab-publish", env!("CARGO_PKG_VERSION"));
    match publisher.tool_version() {
        Ok(version) => {
            helpers::print_field("Tool:", tool);
            for line in version.lines() {
                println!("  {line}");
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "tool version unavailable");
            helpers::print_field("Tool:", format!("{tool} (unavailable: {e})"));
        }
    }

    Ok(())
}
