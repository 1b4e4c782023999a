//! Single-document rewrite.

use std::path::Path;

use anyhow::Result;

use crate::asset::{CopyOutcome, copy_image};
use crate::config::{Config, LinkStyle};
use crate::debug;
use crate::link::{LinkTarget, NameForms, replace_all, scan_embeds};
use crate::logger::Event;

use super::EventSink;

/// Everything needed to rewrite one document, borrowed from [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'a> {
    pub style: LinkStyle,
    pub target: LinkTarget<'a>,
    pub attachments: &'a Path,
    pub static_dir: &'a Path,
}

impl<'a> Rewriter<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        let style = config.rewrite.style;
        Self {
            style,
            target: LinkTarget::new(
                style,
                &config.site.base_url,
                &config.site.images_path,
                &config.rewrite.alt_text,
            ),
            attachments: &config.paths.attachments,
            static_dir: &config.paths.static_images,
        }
    }
}

/// Outcome of rewriting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOutcome {
    /// Rewritten text.
    pub text: String,
    /// Embeds found (duplicates counted per occurrence).
    pub embeds: usize,
    /// Literal replacements performed.
    pub replaced: usize,
    pub copied: usize,
    pub missing: usize,
}

impl DocumentOutcome {
    pub const fn is_changed(&self) -> bool {
        self.replaced > 0
    }
}

/// Rewrite every embed in `text` and copy the referenced images.
///
/// Embeds are taken from the original text in document order. Each one
/// replaces *all* literal occurrences of its raw text in the working copy,
/// so a repeated embed is rewritten on its first visit while its image is
/// still looked up (and logged) once per occurrence.
pub fn rewrite_document(
    text: &str,
    rewriter: &Rewriter<'_>,
    sink: &mut dyn EventSink,
) -> Result<DocumentOutcome> {
    let mut outcome = DocumentOutcome {
        text: text.to_string(),
        ..Default::default()
    };

    for embed in scan_embeds(text, rewriter.style) {
        outcome.embeds += 1;

        let names = NameForms::new(embed.name, rewriter.style);
        let source = rewriter.attachments.join(names.original);
        sink.event(Event::Checking {
            source: source.clone(),
        });

        let markdown = rewriter.target.markdown(&names.link);
        let (rewritten, count) = replace_all(&outcome.text, embed.raw, &markdown);
        outcome.text = rewritten;
        outcome.replaced += count;

        match copy_image(&source, rewriter.static_dir, &names.dest)? {
            CopyOutcome::Copied { dest, bytes } => {
                debug!("copy"; "{} ({} bytes)", dest.display(), bytes);
                outcome.copied += 1;
                sink.event(Event::Copied {
                    source,
                    static_dir: rewriter.static_dir.to_path_buf(),
                    dest_name: names.dest,
                });
            }
            CopyOutcome::InPlace { dest } => {
                debug!("copy"; "{} already in place", dest.display());
                outcome.copied += 1;
                sink.event(Event::Copied {
                    source,
                    static_dir: rewriter.static_dir.to_path_buf(),
                    dest_name: names.dest,
                });
            }
            CopyOutcome::Missing => {
                outcome.missing += 1;
                sink.event(Event::NotFound { source });
            }
        }
    }

    Ok(outcome)
}
