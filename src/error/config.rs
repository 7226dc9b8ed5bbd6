//! Configuration errors

use super::ShellError;

/// Creates a configuration read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ShellError {
    ShellError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ShellError {
    ShellError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> ShellError {
    ShellError::ConfigInvalid {
        message: message.into(),
    }
}
