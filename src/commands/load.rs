//! Load command implementation

use crate::cli::{ConfigArgs, LoadArgs};
use crate::commands::helpers;
use crate::error::Result;

/// Write the working bundle and print its path
pub fn run(config: &ConfigArgs, args: &LoadArgs) -> Result<()> {
    let publisher = helpers::publisher(config)?;
    let working =
        publisher.load_bundle(&args.images.service_image, &args.images.invocation_image)?;
    println!("{}", working.display());
    Ok(())
}
