//! Common test utilities for gameshell integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Compiled application document as produced by the game's build
pub const APP_INDEX: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/assets/favicon.svg" />
    <title>Neon Hoopz</title>
    <script type="module" crossorigin src="/assets/index-4f2a.js"></script>
    <link rel="stylesheet" crossorigin href="/assets/index-9c1d.css">
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// Compiled script with constructs that need escaping in the artifact
pub const APP_SCRIPT: &str = r#"const score = (n) => `Score: ${n}`;
const path = "C:\\hoopz";
document.getElementById("root").innerHTML = "<p>" + score(3) + "</p>";
"#;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace whose configuration points at `app/dist`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };
        workspace.write_file("gameshell.yaml", "dist_dir: app/dist\n");
        workspace
    }

    /// Create a workspace with the stock compiled application build
    #[allow(dead_code)]
    pub fn with_app_build() -> Self {
        let workspace = Self::new();
        workspace.write_file("app/dist/index.html", APP_INDEX);
        workspace.write_file("app/dist/assets/index-4f2a.js", APP_SCRIPT);
        workspace.write_file("app/dist/assets/index-9c1d.css", "body { margin: 0; }");
        workspace.write_file("app/dist/assets/favicon.svg", "<svg></svg>");
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read raw bytes from workspace
    #[allow(dead_code)]
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// gameshell command bound to a workspace
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn gameshell_cmd_for_workspace(workspace: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("gameshell").expect("gameshell binary is built");
    cmd.current_dir(workspace)
        .env_remove("GAMESHELL_WORKSPACE")
        .env_remove("GAMESHELL_LOG");
    cmd
}
