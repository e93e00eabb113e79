//! Site configuration management for `tola.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── target     # [target]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Only the sections this tool understands are read. When no `--config` is
//! given and no `tola.toml` is found, the defaults are used.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{TargetConfig, TargetConfigFields};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "tola.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to the loaded config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Output path conventions
    #[serde(default)]
    pub target: TargetConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file, then applies CLI
    /// overrides, validates the raw values and normalizes them.
    ///
    /// An explicit `--config` must exist; the implicit `tola.toml` is
    /// optional and falls back to the defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_name = cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG));

        let mut config = match find_config_file(config_name, &cwd) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None if cli.config.is_some() => {
                bail!("Config file '{}' not found", config_name.display());
            }
            None => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                Self::default()
            }
        };

        config.apply_cli_options(cli);
        // Validate raw values before normalization
        config.validate()?;
        config.target.normalize();

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
    ///
    /// `tola.toml` is shared with the site generator, so sections other than
    /// `[target]` show up here as unknown and are only reported.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown `[target]` fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        let (target, other): (Vec<_>, Vec<_>) =
            fields.iter().partition(|f| f.starts_with("target."));

        if !other.is_empty() {
            debug!("config"; "skipping {} foreign field(s) in {}", other.len(), display_path);
        }
        if target.is_empty() {
            return;
        }

        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in target {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides on top of file values.
    fn apply_cli_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.target.publish_dir, cli.publish_dir.as_ref());
        Self::update_option(&mut self.target.ugly_urls, cli.ugly_urls.as_ref());
        Self::update_option(
            &mut self.target.default_extension,
            cli.default_extension.as_ref(),
        );
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

        self.target.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
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
