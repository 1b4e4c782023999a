//! Asset copying with side effects.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::log;

/// Result of trying to copy one referenced image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source copied to `dest` (overwriting any previous copy).
    Copied { dest: PathBuf, bytes: u64 },
    /// Source and destination are the same file; nothing was written.
    InPlace { dest: PathBuf },
    /// Source file does not exist; nothing was written.
    Missing,
}

/// Create the static image directory if it does not exist yet.
///
/// Existing directories and their contents are left alone.
pub fn ensure_static_dir(static_dir: &Path) -> Result<()> {
    fs::create_dir_all(static_dir)
        .with_context(|| format!("Failed to create `{}`", static_dir.display()))
}

/// Copy `source` into `static_dir` under `dest_name`.
///
/// A missing source is an expected condition and yields
/// [`CopyOutcome::Missing`]; every other I/O failure is an error.
/// Names that would leave `static_dir` (absolute, or with `..`) are
/// treated as missing.
///
/// ```text
/// attachments/My Photo.png  ->  static/images/My_Photo.png
/// ```
pub fn copy_image(source: &Path, static_dir: &Path, dest_name: &str) -> Result<CopyOutcome> {
    if !is_contained(dest_name) {
        log!("warning"; "`{}` points outside the static directory, skipping", dest_name);
        return Ok(CopyOutcome::Missing);
    }

    if !source.is_file() {
        return Ok(CopyOutcome::Missing);
    }

    let dest = static_dir.join(dest_name);

    // fs::copy onto itself truncates the source
    if is_same_file(source, &dest)? {
        return Ok(CopyOutcome::InPlace { dest });
    }

    // Embeds may reference vault subfolders (`![[sub/pic.png]]`)
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create `{}`", parent.display()))?;
    }

    let bytes = fs::copy(source, &dest).with_context(|| {
        format!(
            "Failed to copy `{}` to `{}`",
            source.display(),
            dest.display()
        )
    })?;

    Ok(CopyOutcome::Copied { dest, bytes })
}

/// Only plain relative components (`a.png`, `shots/a.png`).
fn is_contained(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

fn is_same_file(source: &Path, dest: &Path) -> Result<bool> {
    if !dest.exists() {
        return Ok(false);
    }
    let canonical = |p: &Path| {
        fs::canonicalize(p).with_context(|| format!("Failed to resolve `{}`", p.display()))
    };
    Ok(canonical(source)? == canonical(dest)?)
}
