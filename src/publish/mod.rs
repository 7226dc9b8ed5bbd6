//! Static mirror publisher
//!
//! Publishes the compiled build as a plain static site: asset references
//! are made relative so the site works under any path prefix, the asset
//! tree is mirrored, and the document is written both as `index.html` and
//! as `404.html` so deep links on hosts without server-side routing still
//! serve the application.

use std::path::{Component, Path, PathBuf};

use regex::{Captures, Regex};

use crate::common::fs::{canonicalize_lenient, copy_dir_recursive, write_atomic};
use crate::error::{self, Result, ShellError};
use crate::progress::CopyProgress;

/// Entry document of the published site
pub const INDEX_FILE: &str = "index.html";

/// Catch-all document served for unknown paths
pub const FALLBACK_FILE: &str = "404.html";

/// Paths written by a publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub index: PathBuf,
    pub fallback: PathBuf,
    pub assets: PathBuf,
    pub assets_copied: usize,
}

/// Check that `assets_dir` names exactly one plain directory
pub fn validate_assets_dir(assets_dir: &str) -> Result<()> {
    let mut components = Path::new(assets_dir).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if plain && !assets_dir.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(ShellError::InvalidAssetDir {
            name: assets_dir.to_string(),
        })
    }
}

/// Refuse a publish whose asset tree would replace or nest with the build's
fn ensure_disjoint(source_assets: &Path, published_assets: &Path) -> Result<()> {
    let build_assets = canonicalize_lenient(source_assets);
    let publish_assets = canonicalize_lenient(published_assets);

    if publish_assets.starts_with(&build_assets) || build_assets.starts_with(&publish_assets) {
        return Err(ShellError::PublishOverlapsBuild {
            build_assets: build_assets.display().to_string(),
            publish_assets: publish_assets.display().to_string(),
        });
    }
    Ok(())
}

/// Rewrite root-relative references into `assets_dir` to relative ones
pub fn relativize_asset_refs(document: &str, assets_dir: &str) -> Result<String> {
    let pattern = format!(
        r#"(?i)\b(src|href)(\s*=\s*)(["'])/{}/"#,
        regex::escape(assets_dir)
    );
    let re = Regex::new(&pattern).map_err(|e| error::config::invalid(e.to_string()))?;

    let rewritten = re.replace_all(document, |caps: &Captures<'_>| {
        format!("{}{}{}./{}/", &caps[1], &caps[2], &caps[3], assets_dir)
    });
    Ok(rewritten.into_owned())
}

/// Publish the build in `dist_dir` into `publish_dir`
pub fn publish(dist_dir: &Path, publish_dir: &Path, assets_dir: &str) -> Result<PublishReport> {
    validate_assets_dir(assets_dir)?;

    let index_path = dist_dir.join(INDEX_FILE);
    let source_assets = dist_dir.join(assets_dir);

    if !index_path.is_file() {
        return Err(ShellError::SourceDocumentMissing {
            path: index_path.display().to_string(),
        });
    }
    if !source_assets.is_dir() {
        return Err(ShellError::AssetDirMissing {
            path: source_assets.display().to_string(),
        });
    }

    let published_assets = publish_dir.join(assets_dir);
    ensure_disjoint(&source_assets, &published_assets)?;

    let raw = std::fs::read_to_string(&index_path).map_err(error::fs::read_error(&index_path))?;
    let document = relativize_asset_refs(&raw, assets_dir)?;

    std::fs::create_dir_all(publish_dir).map_err(error::fs::write_error(publish_dir))?;

    if published_assets.exists() {
        tracing::debug!(path = %published_assets.display(), "removing stale assets");
        std::fs::remove_dir_all(&published_assets)
            .map_err(error::fs::write_error(&published_assets))?;
    }

    let progress = CopyProgress::new();
    let assets_copied = copy_dir_recursive(&source_assets, &published_assets, |path| {
        progress.copied(path);
    })?;
    progress.finish(assets_copied);

    let index = publish_dir.join(INDEX_FILE);
    let fallback = publish_dir.join(FALLBACK_FILE);
    write_atomic(&index, document.as_bytes())?;
    write_atomic(&fallback, document.as_bytes())?;

    tracing::info!(
        publish_dir = %publish_dir.display(),
        assets_copied,
        "published static mirror"
    );

    Ok(PublishReport {
        index,
        fallback,
        assets: published_assets,
        assets_copied,
    })
}
