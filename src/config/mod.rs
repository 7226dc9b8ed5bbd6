//! Configuration file handling for gameshell
//!
//! `gameshell.yaml` lives at the workspace root and is optional: every key
//! has a default, so an absent file yields the stock layout of the Neon
//! Hoopz build (application build output in `../neon-hoops-app/dist`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::publish;
use crate::shell::SourcePolicy;

/// Name of the configuration file at the workspace root
pub const CONFIG_FILE: &str = "gameshell.yaml";

/// Workspace configuration (gameshell.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Remote location the game is served from
    pub remote_url: String,

    /// Whether the remote source is offered at all (embedded-only shell when false)
    pub remote_enabled: bool,

    /// Value of the `from` query parameter appended to remote loads
    pub client_tag: String,

    /// Base URL the embedded document is rendered under
    pub embedded_base_url: String,

    /// Compiled application build (contains index.html and the asset directory)
    pub dist_dir: PathBuf,

    /// Where the embedded artifact module is written
    pub artifact_path: PathBuf,

    /// Name of the string constant exported by the artifact module
    pub artifact_export: String,

    /// Static-hosting publish root
    pub publish_dir: PathBuf,

    /// Name of the asset directory, both in the build and in the publish root
    pub assets_dir: String,

    /// Delay before the bridge sends its liveness ping
    pub boot_ping_delay_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            remote_url: "https://andre22155b-del.github.io/Neon-Hoopz/".to_string(),
            remote_enabled: true,
            client_tag: "shell".to_string(),
            embedded_base_url: "https://neonhoopz.local/".to_string(),
            dist_dir: PathBuf::from("../neon-hoops-app/dist"),
            artifact_path: PathBuf::from("src/generatedGameHtml.js"),
            artifact_export: "GAME_HTML".to_string(),
            publish_dir: PathBuf::from("docs"),
            assets_dir: "assets".to_string(),
            boot_ping_delay_ms: 1200,
        }
    }
}

impl ShellConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load `gameshell.yaml` from a workspace, falling back to defaults when absent
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            error::config::parse_failed(path.display().to_string(), e.to_string())
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !is_js_identifier(&self.artifact_export) {
            return Err(error::config::invalid(format!(
                "artifact_export '{}' is not a valid JavaScript identifier",
                self.artifact_export
            )));
        }

        if publish::validate_assets_dir(&self.assets_dir).is_err() {
            return Err(error::config::invalid(format!(
                "assets_dir '{}' must be a single plain directory name",
                self.assets_dir
            )));
        }

        if self.remote_enabled && self.remote_url.trim().is_empty() {
            return Err(error::config::invalid(
                "remote_url must be set when remote_enabled is true",
            ));
        }

        Ok(())
    }

    /// Source policy for the fallback state machine
    pub fn source_policy(&self) -> SourcePolicy {
        if self.remote_enabled {
            SourcePolicy::FullFallback {
                remote_url: self.remote_url.clone(),
                client_tag: self.client_tag.clone(),
            }
        } else {
            SourcePolicy::EmbeddedOnly
        }
    }

    /// Paths of this configuration resolved against a workspace root
    pub fn resolve(&self, workspace: &Path) -> ResolvedPaths {
        ResolvedPaths {
            dist_dir: workspace.join(&self.dist_dir),
            artifact_path: workspace.join(&self.artifact_path),
            publish_dir: workspace.join(&self.publish_dir),
        }
    }
}

/// Workspace-absolute build paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub dist_dir: PathBuf,
    pub artifact_path: PathBuf,
    pub publish_dir: PathBuf,
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.boot_ping_delay_ms, 1200);
        assert_eq!(config.artifact_export, "GAME_HTML");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ShellConfig::from_yaml("publish_dir: site\nremote_enabled: false\n").unwrap();
        assert_eq!(config.publish_dir, PathBuf::from("site"));
        assert!(!config.remote_enabled);
        assert_eq!(config.assets_dir, "assets");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ShellConfig::from_yaml("remote_uri: https://example.com/\n").is_err());
    }

    #[test]
    fn test_invalid_export_name() {
        let config = ShellConfig {
            artifact_export: "1html".to_string(),
            ..ShellConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nested_assets_dir_rejected() {
        let config = ShellConfig {
            assets_dir: "static/assets".to_string(),
            ..ShellConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relative_assets_dir_rejected() {
        for name in [".", "..", "", "../assets"] {
            let config = ShellConfig::from_yaml(&format!("assets_dir: '{name}'\n")).unwrap();
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("assets_dir"), "accepted {name:?}");
        }
    }

    #[test]
    fn test_empty_remote_url_only_matters_when_enabled() {
        let mut config = ShellConfig {
            remote_url: String::new(),
            ..ShellConfig::default()
        };
        assert!(config.validate().is_err());
        config.remote_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ShellConfig::load(temp.path()).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "dist_dir: [unclosed").unwrap();
        let err = ShellConfig::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_source_policy_follows_remote_flag() {
        let mut config = ShellConfig::default();
        assert!(matches!(
            config.source_policy(),
            SourcePolicy::FullFallback { .. }
        ));
        config.remote_enabled = false;
        assert_eq!(config.source_policy(), SourcePolicy::EmbeddedOnly);
    }

    #[test]
    fn test_resolve_joins_workspace() {
        let paths = ShellConfig::default().resolve(Path::new("/work"));
        assert_eq!(paths.publish_dir, PathBuf::from("/work/docs"));
        assert_eq!(
            paths.artifact_path,
            PathBuf::from("/work/src/generatedGameHtml.js")
        );
    }
}
