//! Push command implementation

use crate::cli::{ConfigArgs, PushArgs};
use crate::commands::helpers;
use crate::error::Result;

pub fn run(config: &ConfigArgs, args: &PushArgs, quiet: bool) -> Result<()> {
    let publisher = helpers::publisher(config)?;
    publisher.push_bundle(&args.bundle, &args.target)?;
    if !quiet {
        helpers::print_field("Pushed", &args.target);
    }
    Ok(())
}
