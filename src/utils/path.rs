//! Path helpers.
//!
//! Pure functions, no filesystem access.

use std::path::{Path, PathBuf};

/// Anchor a path at `base` unless it is already absolute.
///
/// Unlike `canonicalize()`, this never touches the filesystem, so paths
/// that do not exist yet (e.g. the static image directory) resolve too and
/// symlinks in user-facing log lines stay as the user wrote them.
///
/// # Example
/// ```ignore
/// anchor_path(Path::new("static/images"), Path::new("/site"))  // -> /site/static/images
/// anchor_path(Path::new("/mnt/vault"), Path::new("/site"))     // -> /mnt/vault
/// ```
#[inline]
pub fn anchor_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Display `path` relative to `root` when it lives under it.
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_path_absolute() {
        let anchored = anchor_path(Path::new("/mnt/vault"), Path::new("/site"));
        assert_eq!(anchored, PathBuf::from("/mnt/vault"));
    }

    #[test]
    fn test_anchor_path_relative() {
        let anchored = anchor_path(Path::new("static/images"), Path::new("/site"));
        assert_eq!(anchored, PathBuf::from("/site/static/images"));
    }

    #[test]
    fn test_relative_display() {
        let root = Path::new("/site");
        assert_eq!(
            relative_display(Path::new("/site/content/posts/a.md"), root),
            "content/posts/a.md"
        );
        assert_eq!(relative_display(Path::new("/elsewhere/b.md"), root), "/elsewhere/b.md");
    }
}
