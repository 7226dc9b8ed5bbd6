//! Bundle command implementation

use std::path::PathBuf;

use console::style;

use crate::bundler;
use crate::cli::BundleArgs;
use crate::commands::helpers::{display_path, load_workspace, override_or};
use crate::error::Result;

/// Run bundle command
pub fn run(workspace: Option<PathBuf>, args: BundleArgs) -> Result<()> {
    let (root, config) = load_workspace(workspace)?;
    let paths = config.resolve(&root);
    let dist = override_or(&root, args.dist, paths.dist_dir);
    let out = override_or(&root, args.out, paths.artifact_path);

    let artifact = bundler::bundle(&dist, &config.artifact_export)?;
    bundler::write_artifact(&artifact, &out)?;

    println!("{} {}", style("Generated").green().bold(), display_path(&out));
    println!("  {}", style(artifact.hash()).dim());

    Ok(())
}
