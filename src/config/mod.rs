//! Configuration management for `obsimg.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [paths], [site], [rewrite]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # Config (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[paths]`   | Posts, attachments and static image directories  |
//! | `[site]`    | Base URL and image URL segment                   |
//! | `[rewrite]` | Link style (`extended` / `simple`), alt text     |
//!
//! The config file is optional: without one, defaults apply and relative
//! paths resolve against the working directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::LinkStyle;

use section::{PathsConfig, RewriteConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{cli::Cli, debug, log, utils::path::anchor_path};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing obsimg.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative config paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Input and output directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Target site URL settings
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Link rewriting settings
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Config {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The root is the config
    /// file's directory, or cwd when there is no config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.finalize(cli, &cwd);
        config.validate()?;

        if !config.paths.posts.is_dir() {
            bail!(ConfigError::Validation(format!(
                "posts directory `{}` does not exist",
                config.paths.posts.display()
            )));
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides and resolve every path to absolute form.
    ///
    /// Config-file paths resolve against the root, CLI paths against cwd.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        self.paths.normalize(&self.root);

        let from_cwd = |p: &PathBuf| anchor_path(p, cwd);
        Self::update_option(&mut self.paths.posts, cli.posts.as_ref().map(from_cwd).as_ref());
        Self::update_option(
            &mut self.paths.attachments,
            cli.attachments.as_ref().map(from_cwd).as_ref(),
        );
        Self::update_option(
            &mut self.paths.static_images,
            cli.static_images.as_ref().map(from_cwd).as_ref(),
        );
        Self::update_option(&mut self.site.base_url, cli.base_url.as_ref());
        Self::update_option(&mut self.rewrite.style, cli.style.as_ref());

        self.site.normalize();
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.rewrite.validate(&mut diag);

        if self.rewrite.style == LinkStyle::Simple && !self.site.base_url.is_empty() {
            debug!("config"; "site.base_url is ignored by the simple style");
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
