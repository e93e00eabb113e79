//! `[target]` section configuration.
//!
//! Controls where translated pages, aliases and files are published.
//!
//! # Example
//!
//! ```toml
//! [target]
//! publish_dir = "public"          # Base directory for all output paths
//! ugly_urls = false               # true: foo.html, false: foo/index.html
//! default_extension = ".html"     # Extension for paths without one
//! content_extensions = [".md"]    # Source formats published with the default extension
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const FALLBACK_EXTENSION: &str = ".html";

/// Output path conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base directory prepended to every output path.
    /// Empty (default) leaves paths relative to the site root.
    pub publish_dir: String,

    /// Publish `foo` as `foo.html` instead of `foo/index.html`.
    pub ugly_urls: bool,

    /// Extension for paths that carry none (pretty urls only).
    pub default_extension: String,

    /// Source-format extensions that are never published as-is.
    /// Matching paths are treated as having no extension.
    pub content_extensions: Vec<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            publish_dir: String::new(),
            ugly_urls: false,
            default_extension: FALLBACK_EXTENSION.to_string(),
            content_extensions: Vec::new(),
        }
    }
}

/// Field paths of `[target]` for diagnostics.
pub struct TargetConfigFields {
    pub publish_dir: FieldPath,
    pub ugly_urls: FieldPath,
    pub default_extension: FieldPath,
    pub content_extensions: FieldPath,
}

impl TargetConfig {
    pub const FIELDS: TargetConfigFields = TargetConfigFields {
        publish_dir: FieldPath::new("target.publish_dir"),
        ugly_urls: FieldPath::new("target.ugly_urls"),
        default_extension: FieldPath::new("target.default_extension"),
        content_extensions: FieldPath::new("target.content_extensions"),
    };

    /// Default extension with leading dot (`.html` when unset).
    pub fn default_ext(&self) -> Cow<'_, str> {
        dotted(&self.default_extension).unwrap_or(Cow::Borrowed(FALLBACK_EXTENSION))
    }

    /// Check whether `ext` (with or without dot) is a source-format extension.
    pub fn is_content_ext(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.content_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    /// Normalize user input: `~` expansion, dotted lowercase extensions.
    pub fn normalize(&mut self) {
        if !self.publish_dir.is_empty() {
            self.publish_dir = shellexpand::tilde(&self.publish_dir).into_owned();
        }

        self.default_extension = self.default_ext().into_owned();

        self.content_extensions = self
            .content_extensions
            .iter()
            .filter_map(|e| dotted(e))
            .map(|e| e.to_ascii_lowercase())
            .collect();
    }

    /// Validate section values, collecting every problem.
    ///
    /// Runs on raw values, before [`normalize`](Self::normalize) drops empty
    /// extensions.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.publish_dir.contains('\0') {
            diag.error(Self::FIELDS.publish_dir, "must not contain a NUL byte");
        }

        let ext = self.default_extension.trim();
        if ext.contains(['/', '\\']) {
            diag.error_with_hint(
                Self::FIELDS.default_extension,
                format!("`{ext}` contains a path separator"),
                "use a bare extension such as \".html\" or \".xhtml\"",
            );
        } else if ext.chars().any(char::is_whitespace) {
            diag.error(
                Self::FIELDS.default_extension,
                format!("`{ext}` contains whitespace"),
            );
        } else if ext.strip_prefix('.').unwrap_or(ext).contains('.') {
            diag.error_with_hint(
                Self::FIELDS.default_extension,
                format!("`{ext}` contains more than one extension"),
                "use a single extension such as \".html\" (\".tar.gz\" is not allowed)",
            );
        }

        for ext in &self.content_extensions {
            if ext.trim().trim_start_matches('.').is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.content_extensions,
                    "contains an empty extension",
                    "list extensions like [\".md\", \".rst\"]",
                );
            }
        }

        if self.ugly_urls && self.default_ext() != FALLBACK_EXTENSION {
            diag.warn(
                Self::FIELDS.ugly_urls,
                "`default_extension` is ignored when enabled, pages always get \".html\"",
            );
        }
    }
}

/// Prefix a dot if missing. `None` for empty input.
fn dotted(ext: &str) -> Option<Cow<'_, str>> {
    let ext = ext.trim();
    if ext.trim_start_matches('.').is_empty() {
        None
    } else if ext.starts_with('.') {
        Some(Cow::Borrowed(ext))
    } else {
        Some(Cow::Owned(format!(".{ext}")))
    }
}
