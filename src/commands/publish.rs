//! Publish command implementation

use std::path::PathBuf;

use console::style;

use crate::cli::PublishArgs;
use crate::commands::helpers::{display_path, load_workspace, override_or};
use crate::error::Result;
use crate::hash;
use crate::publish;

/// Run publish command
pub fn run(workspace: Option<PathBuf>, args: PublishArgs) -> Result<()> {
    let (root, config) = load_workspace(workspace)?;
    let paths = config.resolve(&root);
    let dist = override_or(&root, args.dist, paths.dist_dir);
    let out = override_or(&root, args.out, paths.publish_dir);

    let report = publish::publish(&dist, &out, &config.assets_dir)?;
    let index_hash = hash::hash_file(&report.index)?;

    println!("{}", style("Synced static site files:").green().bold());
    println!("- {}", display_path(&report.index));
    println!("- {}", display_path(&report.fallback));
    println!(
        "- {} ({} file{})",
        display_path(&report.assets),
        report.assets_copied,
        if report.assets_copied == 1 { "" } else { "s" }
    );
    println!("  {}", style(index_hash).dim());

    Ok(())
}
