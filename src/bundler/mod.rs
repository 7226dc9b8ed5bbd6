//! Content bundler
//!
//! Turns the compiled application build (an `index.html` that loads one
//! script asset) into a single self-contained document, and wraps that
//! document in the artifact module the shell's embedded source is read
//! from.

pub mod escape;

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::common::fs::write_atomic;
use crate::error::{self, Result, ShellError};
use crate::hash;

/// Script elements that load an external file
static SCRIPT_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*?\bsrc\s*=\s*["']([^"']+)["'][^>]*>\s*</script\s*>"#)
        .expect("script reference pattern is valid")
});

static TYPE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\btype\s*=\s*["']([^"']+)["']"#).expect("type attribute pattern is valid")
});

static CLOSING_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(script)").expect("closing tag pattern is valid"));

/// The script element found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReference {
    /// Byte range of the whole element
    pub start: usize,
    pub end: usize,
    /// Value of the `src` attribute
    pub src: String,
    /// Value of the `type` attribute, if any
    pub script_type: Option<String>,
}

/// Bundler output: the inlined document and the module wrapping it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    pub document: String,
    pub module: String,
}

impl BundleArtifact {
    /// Content hash of the module text
    pub fn hash(&self) -> String {
        hash::hash_str(&self.module)
    }
}

/// Locate the single external script reference in `document`.
///
/// `label` names the document in errors.
pub fn find_script_reference(document: &str, label: &str) -> Result<ScriptReference> {
    let mut matches = SCRIPT_REFERENCE.captures_iter(document);

    let Some(captures) = matches.next() else {
        return Err(error::bundle::script_missing(label));
    };

    let extra = matches.count();
    if extra > 0 {
        return Err(error::bundle::multiple_scripts(label, extra + 1));
    }

    let (Some(element), Some(src)) = (captures.get(0), captures.get(1)) else {
        return Err(error::bundle::script_missing(label));
    };

    let open_tag = &element.as_str()[..element.as_str().find('>').unwrap_or(0)];
    let script_type = TYPE_ATTRIBUTE
        .captures(open_tag)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Ok(ScriptReference {
        start: element.start(),
        end: element.end(),
        src: src.as_str().to_string(),
        script_type,
    })
}

/// Resolve a script `src` against the build directory.
///
/// Only paths inside the build are accepted: no scheme, no
/// protocol-relative URL, no `..` segments.
pub fn resolve_local_asset(dist_dir: &Path, src: &str) -> Result<PathBuf> {
    let is_remote = src.contains("://") || src.starts_with("//") || src.starts_with("data:");
    if is_remote {
        return Err(error::bundle::non_local_script(src));
    }

    let path_part = src.split(['?', '#']).next().unwrap_or(src);
    let relative = Path::new(path_part.trim_start_matches('/'));

    if relative.as_os_str().is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(error::bundle::non_local_script(src));
    }

    Ok(dist_dir.join(relative))
}

/// Replace the referenced element with an inline script holding `script`
pub fn inline_script(document: &str, reference: &ScriptReference, script: &str) -> String {
    let body = CLOSING_SCRIPT.replace_all(script, "<\\/$1");
    let open = match &reference.script_type {
        Some(script_type) => format!("<script type=\"{script_type}\">"),
        None => "<script>".to_string(),
    };

    let mut out = String::with_capacity(document.len() + script.len() + 32);
    out.push_str(&document[..reference.start]);
    out.push_str(&open);
    out.push_str(&body);
    out.push_str("</script>");
    out.push_str(&document[reference.end..]);
    out
}

/// Whether `document` still loads any external script
pub fn has_external_script(document: &str) -> bool {
    SCRIPT_REFERENCE.is_match(document)
}

/// Bundle the build in `dist_dir` into an artifact exporting `export_name`
pub fn bundle(dist_dir: &Path, export_name: &str) -> Result<BundleArtifact> {
    let index_path = dist_dir.join("index.html");
    let label = index_path.display().to_string();

    if !index_path.is_file() {
        return Err(ShellError::SourceDocumentMissing { path: label });
    }
    let document = std::fs::read_to_string(&index_path)
        .map_err(error::fs::read_error(&index_path))?;

    let reference = find_script_reference(&document, &label)?;
    let asset_path = resolve_local_asset(dist_dir, &reference.src)?;
    tracing::debug!(src = %reference.src, asset = %asset_path.display(), "inlining script");

    let script = std::fs::read_to_string(&asset_path).map_err(|e| {
        error::bundle::asset_unreadable(asset_path.display().to_string(), e.to_string())
    })?;

    let inlined = inline_script(&document, &reference, &script);
    if has_external_script(&inlined) {
        return Err(error::bundle::artifact_malformed(
            "inlined document still references an external script",
        ));
    }

    let module = escape::render_module(export_name, &inlined);
    tracing::info!(
        document_bytes = inlined.len(),
        module_bytes = module.len(),
        "bundled embedded document"
    );

    Ok(BundleArtifact {
        document: inlined,
        module,
    })
}

/// Write the artifact module to `path`, replacing any previous one whole
pub fn write_artifact(artifact: &BundleArtifact, path: &Path) -> Result<()> {
    write_atomic(path, artifact.module.as_bytes())
}

/// Read the embedded document back out of an artifact module
pub fn load_embedded_document(path: &Path) -> Result<String> {
    let module = std::fs::read_to_string(path).map_err(error::fs::read_error(path))?;
    let (_, document) = escape::parse_module(&module)?;
    Ok(document)
}
