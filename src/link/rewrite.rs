//! Markdown link generation and in-text replacement.

use crate::config::LinkStyle;

/// Builds the standard Markdown image link for a link name.
#[derive(Debug, Clone, Copy)]
pub struct LinkTarget<'a> {
    style: LinkStyle,
    base_url: &'a str,
    images_path: &'a str,
    alt_text: &'a str,
}

impl<'a> LinkTarget<'a> {
    /// `base_url` is only used by the extended style and must not end in `/`.
    pub const fn new(
        style: LinkStyle,
        base_url: &'a str,
        images_path: &'a str,
        alt_text: &'a str,
    ) -> Self {
        Self {
            style,
            base_url,
            images_path,
            alt_text,
        }
    }

    /// URL the generated link points at.
    ///
    /// - extended: `<base_url>/<images_path>/<link name>`
    /// - simple: `/<images_path>/<link name>` (site-root relative)
    pub fn url(&self, link_name: &str) -> String {
        let images = self.images_path.trim_matches('/');
        match self.style {
            LinkStyle::Extended => format!("{}/{}/{}", self.base_url, images, link_name),
            LinkStyle::Simple => format!("/{}/{}", images, link_name),
        }
    }

    /// `![<alt>](<url>)`
    pub fn markdown(&self, link_name: &str) -> String {
        format!("![{}]({})", self.alt_text, self.url(link_name))
    }
}

/// Replace every literal occurrence of `raw` in `text`.
///
/// The whole document is substituted, not just the occurrence being
/// processed. Returns the new text and the number of replacements.
pub fn replace_all(text: &str, raw: &str, replacement: &str) -> (String, usize) {
    let count = text.matches(raw).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace(raw, replacement), count)
}
