use crate::patch::{patch_source, PatchReport};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default location of the generated world renderer.
pub const DEFAULT_TARGET: &str = "/workspace/js/worlds.js";

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How [`patch_file`] treats the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Run every step but leave the file untouched
    pub dry_run: bool,
}

/// Read the whole target as UTF-8 text with `\n` line endings.
///
/// `\r\n` and lone `\r` are folded into `\n`, so a file checked out with
/// CRLF endings still matches the anchors. It is written back with `\n`.
pub fn read_source(path: &Path) -> Result<String, PatchError> {
    let raw = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_newlines(raw))
}

/// Fold `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Overwrite the target with `content`.
///
/// Symlinks are followed, so the file they point at is the one rewritten,
/// and the target keeps its permission bits.
pub fn write_source(path: &Path, content: &str) -> Result<(), PatchError> {
    let wrap = |source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).map_err(wrap)?;
    replace_contents(&target, content.as_bytes()).map_err(wrap)?;

    // Update mtime for file watchers
    filetime::set_file_mtime(&target, filetime::FileTime::now()).map_err(wrap)?;

    Ok(())
}

/// Read `path`, run all steps, and write the result back unless `dry_run` is set.
///
/// The file is written even when no step matched. Only I/O failures are
/// errors; a missing file fails before anything is written.
pub fn patch_file(path: &Path, options: PatchOptions) -> Result<PatchReport, PatchError> {
    let original = read_source(path)?;
    debug!(path = %path.display(), bytes = original.len(), "read target");

    let report = patch_source(&original);

    if options.dry_run {
        info!(path = %path.display(), "dry run, not writing");
    } else {
        write_source(path, &report.content)?;
        debug!(path = %path.display(), bytes = report.content.len(), "wrote target");
    }

    Ok(report)
}

/// Swap the contents of the existing regular file `target` for `content`.
///
/// The new text is staged next to `target`, given the same permissions, and
/// renamed over it. A failure before the rename leaves `target` untouched.
fn replace_contents(target: &Path, content: &[u8]) -> std::io::Result<()> {
    let permissions = fs::metadata(target)?.permissions();
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut staged = tempfile::Builder::new()
        .prefix(".worlds-patcher")
        .tempfile_in(dir)?;
    staged.write_all(content)?;
    staged.as_file().set_permissions(permissions)?;
    staged.as_file().sync_all()?;
    staged.persist(target).map_err(|err| err.error)?;

    Ok(())
}
