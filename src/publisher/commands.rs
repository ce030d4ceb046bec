//! `cnab-to-oci` command lines

use std::path::Path;

use crate::config::PublishConfig;
use crate::process::ExternalCommand;

const AUTO_UPDATE_BUNDLE: &str = "--auto-update-bundle";

/// `<tool> --log-level <level> fixup <bundle> --target <target> --bundle <fixed> [--auto-update-bundle]`
pub fn fixup(
    config: &PublishConfig,
    bundle_path: &Path,
    target: &str,
    auto_update: bool,
) -> ExternalCommand {
    let command = ExternalCommand::new(&config.tool)
        .args(["--log-level", config.log_level.as_str(), "fixup"])
        .arg(bundle_path)
        .args(["--target", target, "--bundle"])
        .arg(&config.fixed_path);

    if auto_update {
        command.arg(AUTO_UPDATE_BUNDLE)
    } else {
        command
    }
}

/// `<tool> push <fixed> --target <target> --auto-update-bundle`
pub fn push(config: &PublishConfig, fixed_bundle_path: &Path, target: &str) -> ExternalCommand {
    ExternalCommand::new(&config.tool)
        .arg("push")
        .arg(fixed_bundle_path)
        .args(["--target", target, AUTO_UPDATE_BUNDLE])
}

/// `<tool> version`
pub fn version(config: &PublishConfig) -> ExternalCommand {
    ExternalCommand::new(&config.tool).arg("version")
}
