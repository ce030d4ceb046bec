//! External command errors

use super::PublishError;

/// Creates an error for a process that could not be spawned
pub fn launch_failed(program: impl Into<String>, err: &std::io::Error) -> PublishError {
    PublishError::ExternalCommandError {
        program: program.into(),
        reason: err.to_string(),
    }
}

/// Creates an error for a process that ran and exited unsuccessfully
pub fn failed(
    command: impl Into<String>,
    status: impl Into<String>,
    stderr: impl Into<String>,
) -> PublishError {
    PublishError::ExternalCommandFailed {
        command: command.into(),
        status: status.into(),
        stderr: stderr.into(),
    }
}
