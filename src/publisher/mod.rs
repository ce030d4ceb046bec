//! Bundle publishing pipeline
//!
//! Publishing is three file-chained steps:
//! 1. load: template -> working bundle
//! 2. fixup: working bundle -> fixed bundle (`cnab-to-oci fixup`)
//! 3. push: fixed bundle -> registry (`cnab-to-oci push`)
//!
//! Digest resolution and the registry push itself belong to `cnab-to-oci`.
//! This module only builds its command lines and checks how it exited.

use std::path::{Path, PathBuf};

use crate::bundle::BundleDocument;
use crate::config::PublishConfig;
use crate::error::{self, Result};
use crate::process::{CommandRunner, ExternalCommand, SystemRunner};
use crate::ui::ProgressReporter;

pub mod commands;


/// Number of steps in a full publish
pub const PUBLISH_STEPS: u64 = 3;

/// Images and destination for one publish cycle
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub service_image: String,
    pub invocation_image: String,
    pub target: String,
    pub auto_update: bool,
}

/// Drives `cnab-to-oci` against the files named in a [`PublishConfig`]
pub struct BundlePublisher<R = SystemRunner> {
    config: PublishConfig,
    runner: R,
}

impl BundlePublisher<SystemRunner> {
    /// Publisher that spawns real processes
    pub fn with_system_runner(config: PublishConfig) -> Self {
        Self::new(config, SystemRunner)
    }
}

impl<R: CommandRunner> BundlePublisher<R> {
    pub fn new(config: PublishConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Copy the template to the working path and return the working path.
    ///
    /// The images are only written into the bundle when image substitution
    /// is enabled; otherwise the template is passed through unchanged.
    pub fn load_bundle(&self, service_image: &str, invocation_image: &str) -> Result<PathBuf> {
        let template_path = &self.config.template_path;
        let mut document = BundleDocument::read(template_path)?;

        tracing::debug!(
            template = %template_path.display(),
            keys = document.as_map().len(),
            "loaded bundle template"
        );
        match document.invocation_image_digest() {
            Some(digest) => tracing::info!(digest, "invocation image content digest"),
            None => tracing::debug!("template has no invocation image digest"),
        }

        if self.config.substitute_images {
            document.substitute_images(
                &self.config.service_name,
                service_image,
                invocation_image,
            )?;
            tracing::info!(
                service = %self.config.service_name,
                service_image,
                invocation_image,
                "substituted bundle images"
            );
        }

        let working_path = self.config.working_path.clone();
        document.write(&working_path)?;
        tracing::debug!(working = %working_path.display(), "wrote working bundle");

        Ok(working_path)
    }

    /// Resolve image digests for `target`, returning the fixed bundle path
    pub fn fixup_bundle(
        &self,
        bundle_path: &Path,
        target: &str,
        auto_update: bool,
    ) -> Result<PathBuf> {
        let command = commands::fixup(&self.config, bundle_path, target, auto_update);
        self.execute(&command)?;
        Ok(self.config.fixed_path.clone())
    }

    /// Push the fixed bundle to `target`
    pub fn push_bundle(&self, fixed_bundle_path: &Path, target: &str) -> Result<()> {
        let command = commands::push(&self.config, fixed_bundle_path, target);
        self.execute(&command)
    }

    /// Output of `<tool> version`, trimmed
    pub fn tool_version(&self) -> Result<String> {
        let command = commands::version(&self.config);
        tracing::info!(command = %command, "running");
        let outcome = self.runner.run(&command)?;
        if !outcome.success() {
            return Err(error::command::failed(
                command.to_string(),
                outcome.status_label(),
                outcome.stderr.trim(),
            ));
        }
        Ok(outcome.stdout.trim().to_string())
    }

    /// Load, fix up and push in sequence
    pub fn publish(&self, request: &PublishRequest) -> Result<()> {
        self.publish_with_progress(request, &mut crate::ui::SilentProgressReporter)
    }

    /// [`publish`](Self::publish), reporting each step to `progress`
    pub fn publish_with_progress(
        &self,
        request: &PublishRequest,
        progress: &mut dyn ProgressReporter,
    ) -> Result<()> {
        let result = self.run_steps(request, progress);
        if result.is_ok() {
            progress.finish();
        } else {
            progress.abandon();
        }
        result
    }

    fn run_steps(
        &self,
        request: &PublishRequest,
        progress: &mut dyn ProgressReporter,
    ) -> Result<()> {
        progress.start_step("Loading bundle");
        let bundle_path = self.load_bundle(&request.service_image, &request.invocation_image)?;
        progress.finish_step();

        progress.start_step("Fixing up bundle");
        let fixed_bundle_path =
            self.fixup_bundle(&bundle_path, &request.target, request.auto_update)?;
        progress.finish_step();

        progress.start_step("Pushing bundle");
        self.push_bundle(&fixed_bundle_path, &request.target)?;
        progress.finish_step();

        Ok(())
    }

    /// Run `command`, log its outcome and turn a failed exit into an error
    /// unless failures are configured to be ignored
    fn execute(&self, command: &ExternalCommand) -> Result<()> {
        tracing::info!(command = %command, "running");
        let outcome = self.runner.run(command)?;
        tracing::info!(
            status = %outcome.status_label(),
            stdout = %outcome.stdout.trim(),
            stderr = %outcome.stderr.trim(),
            "command returned"
        );

        if outcome.success() {
            return Ok(());
        }

        if self.config.ignore_command_failures {
            tracing::warn!(
                command = %command,
                status = %outcome.status_label(),
                stderr = %outcome.stderr.trim(),
                "ignoring failed command"
            );
            return Ok(());
        }

        Err(error::command::failed(
            command.to_string(),
            outcome.status_label(),
            outcome.stderr.trim(),
        ))
    }
}
