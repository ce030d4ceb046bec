//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - publish: Full pipeline arguments
//! - steps: Single-step (load, fixup, push) arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

pub mod completions;
pub mod publish;
pub mod steps;

pub use completions::CompletionsArgs;
pub use publish::PublishArgs;
pub use steps::{FixupArgs, LoadArgs, PushArgs};

/// cnab-publish - push CNAB bundles through cnab-to-oci
#[derive(Parser, Debug)]
#[command(
    name = "cnab-publish",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Load, fix up and push CNAB bundles with cnab-to-oci",
    long_about = "cnab-publish copies a CNAB bundle template to a working file, runs \
                  `cnab-to-oci fixup` to pin image digests for a target registry and \
                  `cnab-to-oci push` to upload the fixed bundle.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  cnab-publish publish --target reg.example.com/app         \x1b[90m# Full pipeline\x1b[0m\n   \
                  cnab-publish load                                         \x1b[90m# Write the working bundle\x1b[0m\n   \
                  cnab-publish fixup bundle.json --target reg.example.com/app\n   \
                  cnab-publish push fixed-bundle.json --target reg.example.com/app\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Configuration file and per-run overrides
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML configuration file
    #[arg(long, short = 'c', global = true, env = "CNAB_PUBLISH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bundle template to load
    #[arg(long, global = true, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Working bundle written by load
    #[arg(long, global = true, value_name = "PATH")]
    pub working: Option<PathBuf>,

    /// Fixed bundle written by fixup
    #[arg(long, global = true, value_name = "PATH")]
    pub fixed: Option<PathBuf>,

    /// cnab-to-oci executable
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Continue when cnab-to-oci exits with an error
    #[arg(long, global = true)]
    pub ignore_failures: bool,

    /// Write the service and invocation images into the working bundle
    #[arg(long, global = true)]
    pub substitute_images: bool,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            template_path: self.template.clone(),
            working_path: self.working.clone(),
            fixed_path: self.fixed.clone(),
            tool: self.tool.clone(),
            ignore_command_failures: self.ignore_failures,
            substitute_images: self.substitute_images,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, fix up and push a bundle
    Publish(PublishArgs),

    /// Copy the bundle template to the working bundle
    Load(LoadArgs),

    /// Run cnab-to-oci fixup on a bundle
    Fixup(FixupArgs),

    /// Run cnab-to-oci push on a fixed bundle
    Push(PushArgs),

    /// Show cnab-publish and cnab-to-oci versions
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
