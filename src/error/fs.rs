//! File system errors

use std::path::Path;

use super::ShellError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ShellError {
    ShellError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ShellError {
    ShellError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an IO error on `path` into a write failure
pub fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> ShellError + '_ {
    move |e| write_failed(path.display().to_string(), e.to_string())
}

/// Maps an IO error on `path` into a read failure
pub fn read_error(path: &Path) -> impl FnOnce(std::io::Error) -> ShellError + '_ {
    move |e| read_failed(path.display().to_string(), e.to_string())
}
