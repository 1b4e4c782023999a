//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base_url = "https://example.github.io/blog"  # prefix of generated links
//! images_path = "images"                       # URL segment before the name
//! ```
//!
//! `base_url` only applies to the `extended` rewrite style; `simple` links
//! are always site-root relative.

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// URL settings of the target site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Absolute URL the site is served from (may be empty).
    pub base_url: String,

    /// Path segment under which the static images are served.
    pub images_path: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            images_path: "images".to_string(),
        }
    }
}

impl SiteSectionConfig {
    const BASE_URL: FieldPath = FieldPath::new("site.base_url");
    const IMAGES_PATH: FieldPath = FieldPath::new("site.images_path");

    /// Drop trailing slashes so joined links never contain `//`.
    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.base_url.is_empty() && url::Url::parse(&self.base_url).is_err() {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("`{}` is not an absolute URL", self.base_url),
                "use e.g. `https://example.github.io/blog`, or leave it empty",
            );
        }

        if self.images_path.trim_matches('/').is_empty() {
            diag.error(Self::IMAGES_PATH, "must not be empty");
        }
    }
}
