//! Check command: preview embeds without touching any file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::Config;
use crate::link::{NameForms, scan_embeds};
use crate::log;
use crate::pipeline::{Rewriter, collect_posts};
use crate::utils::{path::relative_display, plural_count, plural_s};

/// One embed as it would be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedCheck {
    pub post: PathBuf,
    /// Name as written in the embed.
    pub original: String,
    /// URL of the generated link.
    pub url: String,
    /// Name of the copy in the static directory.
    pub dest: String,
    /// Whether the source image exists.
    pub found: bool,
}

/// Collected results of a check.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub posts: usize,
    pub embeds: Vec<EmbedCheck>,
}

impl CheckReport {
    pub fn missing(&self) -> impl Iterator<Item = &EmbedCheck> {
        self.embeds.iter().filter(|e| !e.found)
    }
}

/// Scan every post and resolve its embeds against the attachments directory.
pub fn check_posts(config: &Config) -> Result<CheckReport> {
    let rewriter = Rewriter::from_config(config);
    let posts = collect_posts(&config.paths.posts)?;

    let mut report = CheckReport {
        posts: posts.len(),
        embeds: Vec::new(),
    };

    for post in posts {
        let text = fs::read_to_string(&post)
            .with_context(|| format!("Failed to read `{}`", post.display()))?;

        for embed in scan_embeds(&text, rewriter.style) {
            let names = NameForms::new(embed.name, rewriter.style);
            report.embeds.push(EmbedCheck {
                post: post.clone(),
                original: names.original.to_string(),
                url: rewriter.target.url(&names.link),
                found: rewriter.attachments.join(names.original).is_file(),
                dest: names.dest,
            });
        }
    }

    Ok(report)
}

/// Print the check report. Fails on missing images unless `warn_only`.
pub fn run_check(config: &Config, warn_only: bool) -> Result<()> {
    let report = check_posts(config)?;
    let root = config.get_root();

    for embed in &report.embeds {
        let status = if embed.found { "ok" } else { "missing" };
        log!(
            "check";
            "{}: `{}` -> {} as `{}` ({})",
            relative_display(&embed.post, root),
            embed.original,
            embed.url,
            embed.dest,
            status
        );
    }

    let missing = report.missing().count();
    log!(
        "check";
        "{}, {}, {} missing",
        plural_count(report.posts, "post"),
        plural_count(report.embeds.len(), "embed"),
        missing
    );

    if missing > 0 && !warn_only {
        bail!(
            "{} referenced image{} not found in `{}`",
            missing,
            plural_s(missing),
            config.paths.attachments.display()
        );
    }

    Ok(())
}
