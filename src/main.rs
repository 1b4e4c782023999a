//! obsimg - rewrite Obsidian image embeds for static-site blogs.
//!
//! Turns `![[My Photo.png]]` in every post into a standard Markdown image
//! link and copies the referenced image into the site's static directory.

mod asset;
mod cli;
mod config;
mod link;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Run { .. } => cli::run::run(&config).map(|_| ()),
        Commands::Check { warn_only, .. } => cli::check::run_check(&config, *warn_only),
    }
}
