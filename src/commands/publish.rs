//! Publish command implementation
//!
//! Runs load, fixup and push against the resolved configuration and shows
//! progress across the three steps.

use crate::cli::{ConfigArgs, PublishArgs};
use crate::commands::helpers;
use crate::error::Result;
use crate::publisher::{PUBLISH_STEPS, PublishRequest};
use crate::ui;

pub fn run(config: &ConfigArgs, args: PublishArgs, quiet: bool) -> Result<()> {
    let publisher = helpers::publisher(config)?;
    let request = PublishRequest {
        service_image: args.images.service_image,
        invocation_image: args.images.invocation_image,
        target: args.target,
        auto_update: !args.no_auto_update,
    };

    let mut progress = ui::reporter(quiet, PUBLISH_STEPS);
    publisher.publish_with_progress(&request, &mut *progress)?;

    if !quiet {
        helpers::print_field("Published", &request.target);
        helpers::print_field("Bundle:", publisher.config().fixed_path.display());
    }
    Ok(())
}
