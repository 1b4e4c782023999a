//! Post rewriting pipeline.
//!
//! ```text
//! posts/*.md ──► read ──► scan embeds ──► per embed: replace + copy ──► write back
//!                                                    │
//!                                                    └─► static/images/<dest name>
//! ```
//!
//! Strictly sequential: one post is read, rewritten and written back before
//! the next one is opened. Nothing is rolled back when a later step fails.

mod document;
mod sink;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::asset::ensure_static_dir;
use crate::config::Config;
use crate::debug;
use crate::logger::Event;

pub use document::{DocumentOutcome, Rewriter, rewrite_document};
pub use sink::{EventSink, StdoutSink};

/// Totals of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub links_rewritten: usize,
    pub images_copied: usize,
    pub images_missing: usize,
}

impl RunSummary {
    fn add(&mut self, outcome: &DocumentOutcome) {
        self.files_scanned += 1;
        if outcome.is_changed() {
            self.files_rewritten += 1;
        }
        self.links_rewritten += outcome.replaced;
        self.images_copied += outcome.copied;
        self.images_missing += outcome.missing;
    }
}

/// List the Markdown posts of `posts_dir`, sorted by file name.
///
/// Not recursive. Entries named `*.md` that are not regular files are
/// skipped.
pub fn collect_posts(posts_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(posts_dir)
        .with_context(|| format!("Failed to read posts directory `{}`", posts_dir.display()))?;

    let mut posts = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read posts directory `{}`", posts_dir.display()))?;
        let path = entry.path();
        let is_md = entry.file_name().to_string_lossy().ends_with(".md");
        if is_md && path.is_file() {
            posts.push(path);
        }
    }

    posts.sort();
    Ok(posts)
}

/// Rewrite one post in place.
///
/// The file is only written when at least one embed was replaced, so posts
/// without embeds keep their bytes and modification time.
pub fn process_post(
    path: &Path,
    rewriter: &Rewriter<'_>,
    sink: &mut dyn EventSink,
) -> Result<DocumentOutcome> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read `{}`", path.display()))?;

    let outcome = rewrite_document(&text, rewriter, sink)?;

    if outcome.is_changed() {
        fs::write(path, &outcome.text)
            .with_context(|| format!("Failed to write `{}`", path.display()))?;
    }

    Ok(outcome)
}

/// Process every post of the configured posts directory.
///
/// Ends with [`Event::Finished`] once all posts are written back.
pub fn process_posts(config: &Config, sink: &mut dyn EventSink) -> Result<RunSummary> {
    ensure_static_dir(&config.paths.static_images)?;

    let rewriter = Rewriter::from_config(config);
    let posts = collect_posts(&config.paths.posts)?;
    debug!("run"; "{} posts in {}", posts.len(), config.paths.posts.display());

    let mut summary = RunSummary::default();
    for post in &posts {
        let outcome = process_post(post, &rewriter, sink)?;
        if outcome.embeds > 0 {
            debug!("run"; "{}: {} embeds", post.display(), outcome.embeds);
        }
        summary.add(&outcome);
    }

    sink.event(Event::Finished);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkStyle;
    use tempfile::TempDir;

    struct Site {
        tmp: TempDir,
        config: Config,
    }

    impl Site {
        fn new(style: LinkStyle, base_url: &str) -> Self {
            let tmp = TempDir::new().unwrap();
            let mut config = Config::default();
            config.paths.posts = tmp.path().join("content/posts");
            config.paths.attachments = tmp.path().join("vault/101 templates");
            config.paths.static_images = tmp.path().join("static/images");
            config.site.base_url = base_url.to_string();
            config.rewrite.style = style;
            fs::create_dir_all(&config.paths.posts).unwrap();
            fs::create_dir_all(&config.paths.attachments).unwrap();
            Self { tmp, config }
        }

        fn post(&self, name: &str, text: &str) -> PathBuf {
            let path = self.config.paths.posts.join(name);
            fs::write(&path, text).unwrap();
            path
        }

        fn attachment(&self, name: &str, bytes: &[u8]) {
            fs::write(self.config.paths.attachments.join(name), bytes).unwrap();
        }

        fn run(&self) -> (RunSummary, Vec<Event>) {
            let mut events: Vec<Event> = Vec::new();
            let summary = process_posts(&self.config, &mut events).unwrap();
            (summary, events)
        }
    }

    #[test]
    fn test_end_to_end_extended() {
        let site = Site::new(LinkStyle::Extended, "https://x/y");
        let post = site.post("a.md", "Text ![[My Photo.png]] more text");
        site.attachment("My Photo.png", b"\x89PNG\r\n");

        let (summary, events) = site.run();

        assert_eq!(
            fs::read_to_string(&post).unwrap(),
            "Text ![Image Description](https://x/y/images/My_Photo.png) more text"
        );
        let copied = site.config.paths.static_images.join("My_Photo.png");
        assert_eq!(fs::read(copied).unwrap(), b"\x89PNG\r\n");

        let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
        let source = site.config.paths.attachments.join("My Photo.png");
        assert_eq!(
            lines,
            vec![
                format!("Checking for image: {}", source.display()),
                format!(
                    "Copied: {} -> {}/My_Photo.png",
                    source.display(),
                    site.config.paths.static_images.display()
                ),
                "Markdown files processed and images copied successfully.".to_string(),
            ]
        );
        assert_eq!(
            summary,
            RunSummary {
                files_scanned: 1,
                files_rewritten: 1,
                links_rewritten: 1,
                images_copied: 1,
                images_missing: 0,
            }
        );
    }

    #[test]
    fn test_end_to_end_simple() {
        let site = Site::new(LinkStyle::Simple, "https://ignored");
        let post = site.post("a.md", "![[My Photo.png]] ![[b.jpg]]");
        site.attachment("My Photo.png", b"png");
        site.attachment("b.jpg", b"jpg");

        site.run();

        assert_eq!(
            fs::read_to_string(&post).unwrap(),
            "![Image Description](/images/My%20Photo.png) ![[b.jpg]]"
        );
        let static_dir = &site.config.paths.static_images;
        assert!(static_dir.join("My Photo.png").is_file());
        assert!(!static_dir.join("b.jpg").exists());
    }

    #[test]
    fn test_attachments_same_as_static_dir_keeps_images() {
        let mut site = Site::new(LinkStyle::Simple, "");
        let images = site.tmp.path().join("images");
        fs::create_dir_all(&images).unwrap();
        site.config.paths.attachments = images.clone();
        site.config.paths.static_images = images.clone();
        let post = site.post("a.md", "![[My Photo.png]]");
        site.attachment("My Photo.png", b"PIXELS");

        let (summary, _) = site.run();

        assert_eq!(fs::read(images.join("My Photo.png")).unwrap(), b"PIXELS");
        assert_eq!(
            fs::read_to_string(&post).unwrap(),
            "![Image Description](/images/My%20Photo.png)"
        );
        assert_eq!(summary.images_copied, 1);
        assert_eq!(summary.images_missing, 0);
    }

    #[test]
    fn test_post_without_embeds_untouched() {
        let site = Site::new(LinkStyle::Extended, "");
        let text = "# Hello\r\n\r\nno images here ![[a.PNG]]\n";
        let post = site.post("plain.md", text);

        let (summary, events) = site.run();

        assert_eq!(fs::read_to_string(&post).unwrap(), text);
        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.files_rewritten, 0);
        assert_eq!(events, vec![Event::Finished]);
    }

    #[test]
    fn test_missing_image_logged_once_per_match() {
        let site = Site::new(LinkStyle::Extended, "https://x/y");
        let post = site.post("a.md", "![[gone.png]] and ![[gone.png]]");

        let (summary, events) = site.run();

        let text = fs::read_to_string(&post).unwrap();
        assert!(!text.contains("![["));
        assert_eq!(summary.images_missing, 2);
        let misses = events
            .iter()
            .filter(|e| matches!(e, Event::NotFound { .. }))
            .count();
        assert_eq!(misses, 2);
    }

    #[test]
    fn test_static_dir_created_and_preserved() {
        let site = Site::new(LinkStyle::Extended, "");
        let static_dir = site.config.paths.static_images.clone();
        assert!(!static_dir.exists());

        site.run();
        assert!(static_dir.is_dir());

        fs::write(static_dir.join("unrelated.txt"), "keep").unwrap();
        site.run();
        assert_eq!(
            fs::read_to_string(static_dir.join("unrelated.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_rerun_is_noop() {
        let site = Site::new(LinkStyle::Extended, "https://x/y");
        let post = site.post("a.md", "![[pic one.webp]]");
        site.attachment("pic one.webp", b"webp");

        site.run();
        let first = fs::read_to_string(&post).unwrap();

        let (summary, events) = site.run();
        assert_eq!(fs::read_to_string(&post).unwrap(), first);
        assert_eq!(summary.links_rewritten, 0);
        assert_eq!(events, vec![Event::Finished]);
    }

    #[test]
    fn test_collect_posts_flat_sorted_md_only() {
        let site = Site::new(LinkStyle::Extended, "");
        site.post("b.md", "");
        site.post("a.md", "");
        site.post("notes.txt", "");
        site.post("draft.markdown", "");
        let nested = site.config.paths.posts.join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.md"), "![[x.png]]").unwrap();
        fs::create_dir_all(site.config.paths.posts.join("folder.md")).unwrap();

        let posts = collect_posts(&site.config.paths.posts).unwrap();
        let names: Vec<_> = posts
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_missing_posts_dir_is_error() {
        let site = Site::new(LinkStyle::Extended, "");
        let mut config = site.config.clone();
        config.paths.posts = site.tmp.path().join("nope");

        let mut events: Vec<Event> = Vec::new();
        let err = process_posts(&config, &mut events).unwrap_err();
        assert!(err.to_string().contains("posts directory"));
        assert!(events.is_empty());
    }

    #[test]
    fn test_invalid_utf8_post_is_error() {
        let site = Site::new(LinkStyle::Extended, "");
        fs::write(site.config.paths.posts.join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let mut events: Vec<Event> = Vec::new();
        assert!(process_posts(&site.config, &mut events).is_err());
    }

    #[test]
    fn test_multiple_posts_share_static_dir() {
        let site = Site::new(LinkStyle::Extended, "");
        site.post("one.md", "![[shared img.gif]]");
        site.post("two.md", "![[shared img.gif]] ![[other.jpeg]]");
        site.attachment("shared img.gif", b"gif");
        site.attachment("other.jpeg", b"jpeg");

        let (summary, _) = site.run();

        assert_eq!(summary.files_rewritten, 2);
        assert_eq!(summary.images_copied, 3);
        let static_dir = &site.config.paths.static_images;
        assert!(static_dir.join("shared_img.gif").is_file());
        assert!(static_dir.join("other.jpeg").is_file());
    }
}
