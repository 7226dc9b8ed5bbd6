//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::{self, Result};

/// Copy a directory tree verbatim, calling `on_copy` for every file.
///
/// Returns the number of files copied. Entries are visited in name order so
/// repeated runs copy in the same sequence.
pub fn copy_dir_recursive<F>(src: &Path, dst: &Path, mut on_copy: F) -> Result<usize>
where
    F: FnMut(&Path),
{
    fs::create_dir_all(dst).map_err(error::fs::write_error(dst))?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            error::fs::read_failed(src.display().to_string(), e.to_string())
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| error::fs::read_failed(entry.path().display().to_string(), e.to_string()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(error::fs::write_error(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(error::fs::write_error(&target))?;
            on_copy(relative);
            copied += 1;
        }
    }

    Ok(copied)
}

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// Readers see either the previous file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(error::fs::write_error(parent))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(error::fs::write_error(path))?;
    temp.write_all(contents)
        .map_err(error::fs::write_error(path))?;
    temp.persist(path)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.error.to_string()))?;

    Ok(())
}

/// Canonical form of `path`, which need not exist yet.
///
/// Components are resolved front to back: existing prefixes are
/// canonicalized so symlinks are followed, `..` pops the resolved prefix and
/// missing components are kept as written.
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other);
                if let Ok(canonical) = dunce::canonicalize(&resolved) {
                    resolved = canonical;
                }
            }
        }
    }
    resolved
}
