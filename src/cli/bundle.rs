use clap::Parser;
use std::path::PathBuf;

/// Arguments for the bundle command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle using gameshell.yaml (or defaults):\n    gameshell bundle\n\n\
                  Bundle a different build:\n    gameshell bundle --dist ../game/dist\n\n\
                  Write the artifact elsewhere:\n    gameshell bundle --out src/embedded.js")]
pub struct BundleArgs {
    /// Compiled build directory (overrides dist_dir)
    #[arg(long)]
    pub dist: Option<PathBuf>,

    /// Artifact module path (overrides artifact_path)
    #[arg(long)]
    pub out: Option<PathBuf>,
}
