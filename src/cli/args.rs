//! Command-line interface definitions.

use clap::{Args, ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::LinkStyle;

/// Rewrite Obsidian image embeds into static-site Markdown links
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: obsimg.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "obsimg.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Directory of Markdown posts (overrides `paths.posts`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub posts: Option<PathBuf>,

    /// Directory holding the original images (overrides `paths.attachments`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub attachments: Option<PathBuf>,

    /// Static image directory to copy into (overrides `paths.static_images`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub static_images: Option<PathBuf>,

    /// Site base URL prefixed to links (overrides `site.base_url`).
    ///
    /// Example for a GitHub Pages project site:
    ///   obsimg --base-url "https://user.github.io/blog" run
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Rewrite style (overrides `rewrite.style`)
    #[arg(long, value_enum)]
    pub style: Option<LinkStyle>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite embeds in every post and copy the referenced images
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Report embeds and missing images without touching any file
    #[command(visible_alias = "c")]
    Check {
        /// Treat missing images as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn common(&self) -> &CommonArgs {
        match &self.command {
            Commands::Run { common } | Commands::Check { common, .. } => common,
        }
    }

    pub const fn verbose(&self) -> bool {
        self.common().verbose
    }
}

#[allow(unused)]
impl Cli {
    pub const fn is_run(&self) -> bool {
        matches!(self.command, Commands::Run { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::parse_from(["obsimg", "run"]);
        assert!(cli.is_run());
        assert_eq!(cli.config, PathBuf::from("obsimg.toml"));
        assert!(cli.posts.is_none());
        assert!(cli.style.is_none());
        assert!(!cli.verbose());
    }

    #[test]
    fn test_parse_check_alias_warn_only() {
        let cli = Cli::parse_from(["obsimg", "c", "-w"]);
        assert!(matches!(
            cli.command,
            Commands::Check {
                warn_only: true,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "obsimg",
            "-p",
            "content/posts/Blogs",
            "-a",
            "/mnt/c/vault/101 templates",
            "-U",
            "https://x/y",
            "--style",
            "simple",
            "r",
            "--verbose",
        ]);
        assert_eq!(cli.posts, Some(PathBuf::from("content/posts/Blogs")));
        assert_eq!(
            cli.attachments,
            Some(PathBuf::from("/mnt/c/vault/101 templates"))
        );
        assert_eq!(cli.base_url.as_deref(), Some("https://x/y"));
        assert_eq!(cli.style, Some(LinkStyle::Simple));
        assert!(cli.verbose());
    }

    #[test]
    fn test_parse_short_verbose() {
        let cli = Cli::parse_from(["obsimg", "run", "-V"]);
        assert!(cli.is_run());
        assert!(cli.verbose());

        let cli = Cli::parse_from(["obsimg", "c", "-w", "-V"]);
        assert!(cli.is_check());
        assert!(cli.verbose());
    }

    #[test]
    fn test_top_level_version_flag() {
        let err = Cli::try_parse_from(["obsimg", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
