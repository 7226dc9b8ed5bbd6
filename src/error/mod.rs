//! Error types and handling for gameshell
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Content bundler precondition errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gameshell operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShellError {
    // Bundle errors
    #[error("No script reference found in {path}")]
    #[diagnostic(
        code(gameshell::bundle::script_missing),
        help("Run the application build first; its index.html must load exactly one script")
    )]
    ScriptReferenceMissing { path: String },

    #[error("Expected exactly one script reference in {path}, found {count}")]
    #[diagnostic(
        code(gameshell::bundle::multiple_scripts),
        help("Only a single-entry build can be inlined into the embedded artifact")
    )]
    MultipleScriptReferences { path: String, count: usize },

    #[error("Script reference '{src}' does not point to a local asset")]
    #[diagnostic(
        code(gameshell::bundle::non_local_script),
        help("The embedded artifact must run offline; reference the script by a path inside the build")
    )]
    NonLocalScript { src: String },

    #[error("Failed to read script asset: {path}: {reason}")]
    #[diagnostic(code(gameshell::bundle::asset_unreadable))]
    AssetUnreadable { path: String, reason: String },

    #[error("Embedded artifact is malformed: {reason}")]
    #[diagnostic(
        code(gameshell::bundle::artifact_malformed),
        help("Regenerate the artifact with 'gameshell bundle'")
    )]
    ArtifactMalformed { reason: String },

    // Publish errors
    #[error("Build output not found: {path}")]
    #[diagnostic(
        code(gameshell::publish::source_missing),
        help("Run the application build so that its dist directory contains index.html")
    )]
    SourceDocumentMissing { path: String },

    #[error("Asset directory not found: {path}")]
    #[diagnostic(code(gameshell::publish::assets_missing))]
    AssetDirMissing { path: String },

    #[error("Invalid asset directory name '{name}'")]
    #[diagnostic(
        code(gameshell::publish::invalid_assets_dir),
        help("Use a single plain directory name such as 'assets'; '.', '..' and nested paths are not allowed")
    )]
    InvalidAssetDir { name: String },

    #[error("Published assets {publish_assets} overlap the build assets {build_assets}")]
    #[diagnostic(
        code(gameshell::publish::overlaps_build),
        help("Publish into a directory outside the build output, e.g. 'docs'")
    )]
    PublishOverlapsBuild {
        build_assets: String,
        publish_assets: String,
    },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(gameshell::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(gameshell::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(gameshell::config::invalid))]
    ConfigInvalid { message: String },

    // Replay errors
    #[error("Failed to replay events from {path}: {reason}")]
    #[diagnostic(
        code(gameshell::replay::failed),
        help("Events are a YAML list such as '- start_load' or '- load_failed: timeout'")
    )]
    ReplayFailed { path: String, reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(gameshell::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(gameshell::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(gameshell::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gameshell::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShellError {
    fn from(err: serde_yaml::Error) -> Self {
        ShellError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShellError>;
