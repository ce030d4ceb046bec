//! Configuration errors

use std::path::Path;

use super::PublishError;

/// Creates a configuration not found error
pub fn not_found(path: &Path) -> PublishError {
    PublishError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a configuration read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> PublishError {
    PublishError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a configuration parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> PublishError {
    PublishError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
