//! Error types and handling for cnab-publish
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle document errors
//! - [`command`]: External command errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod command;
pub mod config;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for publish operations
#[derive(Error, Diagnostic, Debug)]
pub enum PublishError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(cnab_publish::fs::not_found),
        help("Check that the bundle template exists or pass --template")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(cnab_publish::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(cnab_publish::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Bundle errors
    #[error("Malformed bundle document: {path}: {reason}")]
    #[diagnostic(
        code(cnab_publish::bundle::malformed),
        help("The bundle template must contain a single JSON object")
    )]
    MalformedDocument { path: String, reason: String },

    #[error("Cannot substitute image at '{location}': {reason}")]
    #[diagnostic(
        code(cnab_publish::bundle::substitution_failed),
        help(
            "Check service_name against the keys under \"images\" and pass --service-image and --invocation-image"
        )
    )]
    ImageSubstitutionFailed { location: String, reason: String },

    // External command errors
    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(
        code(cnab_publish::command::launch_failed),
        help("Make sure the program is installed and on PATH, or pass --tool")
    )]
    ExternalCommandError { program: String, reason: String },

    #[error("Command '{command}' failed with {status}: {stderr}")]
    #[diagnostic(
        code(cnab_publish::command::failed),
        help("Pass --ignore-failures to continue past failing cnab-to-oci steps")
    )]
    ExternalCommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(cnab_publish::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(cnab_publish::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(cnab_publish::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PublishError>;

/// Terminal rendering of an error: the message, then its help hint if any
pub fn render(err: &PublishError) -> String {
    match err.help() {
        Some(help) => format!("Error: {err}\n  help: {help}"),
        None => format!("Error: {err}"),
    }
}
