use clap::Parser;
use std::path::PathBuf;

/// Arguments for the publish command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Publish using gameshell.yaml (or defaults):\n    gameshell publish\n\n\
                  Publish into a different root:\n    gameshell publish --out site")]
pub struct PublishArgs {
    /// Compiled build directory (overrides dist_dir)
    #[arg(long)]
    pub dist: Option<PathBuf>,

    /// Publish root (overrides publish_dir)
    #[arg(long)]
    pub out: Option<PathBuf>,
}
