use clap::Parser;
use std::path::PathBuf;

use super::publish::ImageArgs;

/// Arguments for the load command
#[derive(Parser, Debug)]
pub struct LoadArgs {
    #[command(flatten)]
    pub images: ImageArgs,
}

/// Arguments for the fixup command
#[derive(Parser, Debug)]
pub struct FixupArgs {
    /// Bundle to fix up, usually the working bundle
    pub bundle: PathBuf,

    /// Registry repository to resolve images against
    #[arg(long, short = 't')]
    pub target: String,

    /// Do not pass --auto-update-bundle to cnab-to-oci
    #[arg(long)]
    pub no_auto_update: bool,
}

/// Arguments for the push command
#[derive(Parser, Debug)]
pub struct PushArgs {
    /// Fixed bundle to push
    pub bundle: PathBuf,

    /// Registry repository to push to
    #[arg(long, short = 't')]
    pub target: String,
}
