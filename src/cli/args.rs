//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::target::TargetKind;

/// Translate site source paths into their published output paths
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, must exist when given
    /// (default: optional tola.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Base directory for output paths (overrides `target.publish_dir`)
    #[arg(short = 'o', long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub publish_dir: Option<String>,

    /// Publish `foo` as `foo.html` instead of `foo/index.html`
    #[arg(short, long, global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub ugly_urls: Option<bool>,

    /// Extension for paths without one (overrides `target.default_extension`)
    #[arg(short = 'e', long, global = true)]
    pub default_extension: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Translate content paths to page output files
    #[command(visible_alias = "p")]
    Page {
        #[command(flatten)]
        args: TranslateArgs,
    },

    /// Translate redirect aliases to redirect page files
    #[command(visible_alias = "a")]
    Alias {
        #[command(flatten)]
        args: TranslateArgs,
    },

    /// Translate static file paths to their published location
    #[command(visible_alias = "f")]
    File {
        #[command(flatten)]
        args: TranslateArgs,
    },
}

/// Shared arguments for the translate subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct TranslateArgs {
    /// Source paths, relative to the site root.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

impl Commands {
    /// Translator selected by this subcommand.
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::Page { .. } => TargetKind::Page,
            Self::Alias { .. } => TargetKind::Alias,
            Self::File { .. } => TargetKind::File,
        }
    }

    pub const fn args(&self) -> &TranslateArgs {
        match self {
            Self::Page { args } | Self::Alias { args } | Self::File { args } => args,
        }
    }
}
