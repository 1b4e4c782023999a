//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! posts = "content/posts/Blogs"          # flat directory of .md files
//! attachments = "/mnt/vault/attachments" # where the vault keeps images
//! static_images = "static/images"        # copy destination (created if missing)
//! ```
//!
//! Relative paths are resolved against the directory holding `obsimg.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::path::anchor_path;

/// Input and output directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of Markdown posts (not descended into).
    pub posts: PathBuf,

    /// Directory holding the original images, addressed by exact name.
    pub attachments: PathBuf,

    /// Static image directory of the site.
    pub static_images: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            posts: "content/posts".into(),
            attachments: "attachments".into(),
            static_images: "static/images".into(),
        }
    }
}

impl PathsConfig {
    /// Anchor every relative path at `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.posts = anchor_path(&self.posts, root);
        self.attachments = anchor_path(&self.attachments, root);
        self.static_images = anchor_path(&self.static_images, root);
    }
}
