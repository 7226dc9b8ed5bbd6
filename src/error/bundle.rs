//! Content bundler errors

use super::ShellError;

/// Creates a missing script reference error
pub fn script_missing(path: impl Into<String>) -> ShellError {
    ShellError::ScriptReferenceMissing { path: path.into() }
}

/// Creates an error for a document referencing more than one script
pub fn multiple_scripts(path: impl Into<String>, count: usize) -> ShellError {
    ShellError::MultipleScriptReferences {
        path: path.into(),
        count,
    }
}

/// Creates an error for a script reference outside the build
pub fn non_local_script(src: impl Into<String>) -> ShellError {
    ShellError::NonLocalScript { src: src.into() }
}

/// Creates an unreadable asset error
pub fn asset_unreadable(path: impl Into<String>, reason: impl Into<String>) -> ShellError {
    ShellError::AssetUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed artifact error
pub fn artifact_malformed(reason: impl Into<String>) -> ShellError {
    ShellError::ArtifactMalformed {
        reason: reason.into(),
    }
}
