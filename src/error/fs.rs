//! File system errors

use std::path::Path;

use super::PublishError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> PublishError {
    PublishError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Maps an IO error from reading `path`, keeping `NotFound` distinct
pub fn read_failed(path: &Path, err: &std::io::Error) -> PublishError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return not_found(path);
    }
    PublishError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> PublishError {
    PublishError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
