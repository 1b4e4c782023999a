//! Run command: rewrite posts and copy images.

use anyhow::Result;

use crate::config::Config;
use crate::log;
use crate::pipeline::{RunSummary, StdoutSink, process_posts};
use crate::utils::plural_count;

/// Rewrite every post and print a one-line summary.
pub fn run(config: &Config) -> Result<RunSummary> {
    let summary = process_posts(config, &mut StdoutSink)?;
    log!("run"; "{}", summary_line(&summary));
    Ok(summary)
}

fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{} ({} rewritten), {} rewritten, {} copied, {} missing",
        plural_count(summary.files_scanned, "file"),
        summary.files_rewritten,
        plural_count(summary.links_rewritten, "link"),
        plural_count(summary.images_copied, "image"),
        summary.images_missing
    )
}
