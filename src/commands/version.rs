//! Version command implementation

use std::path::PathBuf;

use console::style;

use crate::commands::helpers::{display_path, load_workspace};
use crate::error::Result;
use crate::hash;
use crate::shell::SourcePolicy;

/// Run version command
///
/// Besides the build, reports what the workspace configuration delivers. A
/// broken configuration is shown as a warning instead of failing the command.
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    println!("gameshell {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Delivery:");

    let (root, config) = match load_workspace(workspace) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("  {} {e}", style("!").yellow().bold());
            return Ok(());
        }
    };
    let paths = config.resolve(&root);

    println!("  Source policy: {}", describe_policy(&config.source_policy()));
    let artifact = match hash::hash_file(&paths.artifact_path) {
        Ok(digest) => format!("{} ({digest})", display_path(&paths.artifact_path)),
        Err(_) => format!("{} (not generated)", display_path(&paths.artifact_path)),
    };
    println!("  Embedded artifact: {artifact}");
    println!("  Static mirror: {}", display_path(&paths.publish_dir));

    Ok(())
}

fn describe_policy(policy: &SourcePolicy) -> String {
    match policy {
        SourcePolicy::FullFallback { remote_url, .. } => {
            format!("remote {remote_url} with embedded fallback")
        }
        SourcePolicy::EmbeddedOnly => "embedded only".to_string(),
    }
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_policy() {
        assert_eq!(
            describe_policy(&SourcePolicy::FullFallback {
                remote_url: "https://example.github.io/game/".to_string(),
                client_tag: "shell".to_string(),
            }),
            "remote https://example.github.io/game/ with embedded fallback"
        );
        assert_eq!(describe_policy(&SourcePolicy::EmbeddedOnly), "embedded only");
    }

    #[test]
    fn test_version_tolerates_missing_workspace() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(run(Some(temp.path().join("does-not-exist"))).is_ok());
    }
}
