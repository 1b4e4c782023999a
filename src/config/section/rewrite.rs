//! `[rewrite]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [rewrite]
//! style = "extended"             # "extended" or "simple"
//! alt_text = "Image Description"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// How embeds are matched and how names are spelled in links and copies.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// png/jpg/jpeg/gif/webp; spaces become `_` in both link and copy;
    /// links are prefixed with `site.base_url` (default).
    #[default]
    Extended,
    /// png only; spaces become `%20` in the link, the copy keeps the
    /// original name; links are site-root relative.
    Simple,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Matching and naming style.
    pub style: LinkStyle,

    /// Alt text of every generated image link.
    pub alt_text: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            style: LinkStyle::Extended,
            alt_text: "Image Description".to_string(),
        }
    }
}

impl RewriteConfig {
    const ALT_TEXT: FieldPath = FieldPath::new("rewrite.alt_text");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.alt_text.contains(']') {
            diag.error_with_hint(
                Self::ALT_TEXT,
                "alt text cannot contain `]`",
                "it would end the link label early",
            );
        }
    }
}
