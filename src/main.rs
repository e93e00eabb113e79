//! tola-target - translate site source paths into published output paths.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tola_target::cli::{Cli, translate::run_translate};
use tola_target::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    run_translate(cli.command.kind(), cli.command.args(), &config)
}
