//! Bundle document errors

use std::path::Path;

use super::PublishError;

/// Creates a malformed document error
pub fn malformed(path: &Path, reason: impl ToString) -> PublishError {
    PublishError::MalformedDocument {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an image substitution error
pub fn substitution_failed(location: impl Into<String>, reason: impl Into<String>) -> PublishError {
    PublishError::ImageSubstitutionFailed {
        location: location.into(),
        reason: reason.into(),
    }
}
