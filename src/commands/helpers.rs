//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ShellError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Workspace root and its loaded configuration
pub fn load_workspace(workspace: Option<PathBuf>) -> Result<(PathBuf, ShellConfig)> {
    let root = resolve_workspace_path(workspace)?;
    let config = ShellConfig::load(&root)?;
    Ok((root, config))
}

/// Command-line override resolved against the workspace, or the configured path
pub fn override_or(workspace: &Path, arg: Option<PathBuf>, configured: PathBuf) -> PathBuf {
    arg.map_or(configured, |path| workspace.join(path))
}

/// Path for output lines, canonical when it exists
pub fn display_path(path: &Path) -> String {
    dunce::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_workspace() {
        let path = PathBuf::from("/some/workspace");
        assert_eq!(resolve_workspace_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_workspace_path(None).unwrap(), cwd);
    }

    #[test]
    fn test_override_or() {
        let ws = Path::new("/ws");
        assert_eq!(
            override_or(ws, Some(PathBuf::from("out")), PathBuf::from("/ws/docs")),
            PathBuf::from("/ws/out")
        );
        assert_eq!(
            override_or(ws, None, PathBuf::from("/ws/docs")),
            PathBuf::from("/ws/docs")
        );
    }

    #[test]
    fn test_display_path_missing_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.html");
        assert_eq!(display_path(&missing), missing.display().to_string());
    }
}
