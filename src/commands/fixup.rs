//! Fixup command implementation

use crate::cli::{ConfigArgs, FixupArgs};
use crate::commands::helpers;
use crate::error::Result;

/// Run `cnab-to-oci fixup` and print the fixed bundle path
pub fn run(config: &ConfigArgs, args: &FixupArgs) -> Result<()> {
    let publisher = helpers::publisher(config)?;
    let fixed = publisher.fixup_bundle(&args.bundle, &args.target, !args.no_auto_update)?;
    println!("{}", fixed.display());
    Ok(())
}
