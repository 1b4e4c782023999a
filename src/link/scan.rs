//! Embed scanning (pure, no side effects).

use std::sync::LazyLock;

use regex::Regex;

use crate::config::LinkStyle;

/// `![[name.png|jpg|jpeg|gif|webp]]`
static RE_EMBED_EXTENDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[\[([^\]]+\.(?:png|jpg|jpeg|gif|webp))\]\]").unwrap()
});

/// `![[name.png]]`
static RE_EMBED_SIMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[([^\]]+\.png)\]\]").unwrap());

/// A single `![[...]]` occurrence in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embed<'a> {
    /// Full matched text, brackets included.
    pub raw: &'a str,
    /// Referenced filename, exactly as written.
    pub name: &'a str,
}

/// Lazily yield every image embed in `text`, in document order.
///
/// Extensions are matched literally and case-sensitively, so `![[a.PNG]]`
/// and `![[notes.pdf]]` are left alone. Duplicates are yielded once per
/// occurrence.
pub fn scan_embeds(text: &str, style: LinkStyle) -> impl Iterator<Item = Embed<'_>> {
    let re = match style {
        LinkStyle::Extended => &*RE_EMBED_EXTENDED,
        LinkStyle::Simple => &*RE_EMBED_SIMPLE,
    };

    re.captures_iter(text).filter_map(|caps| {
        let raw = caps.get(0)?.as_str();
        let name = caps.get(1)?.as_str();
        Some(Embed { raw, name })
    })
}
