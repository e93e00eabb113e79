//! Output path translation.
//!
//! Maps a logical source path to the file it is published to.
//!
//! | Translator    | Input              | Example (pretty, `publish_dir = "public"`)  |
//! |---------------|--------------------|---------------------------------------------|
//! | `PageTarget`  | content path       | `posts/hello` → `public/posts/hello/index.html` |
//! | `AliasTarget` | redirect alias     | `old/hello` → `public/old/hello/index.html` |
//! | `FileTarget`  | static file path   | `img/logo.png` → `public/img/logo.png`      |
//!
//! All translators are pure: no I/O, no shared state, deterministic.
//! An `Err` only concerns the one item being translated.

mod alias;
mod file;
mod page;
pub mod path;

pub use alias::AliasTarget;
pub use file::FileTarget;
pub use page::{PageTarget, translate};

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TargetConfig;

// ============================================================================
// Translator
// ============================================================================

/// Translate a source-relative path into an output-relative file path.
pub trait Translator {
    fn translate(&self, src: &str) -> Result<PathBuf, TargetError>;
}

/// Which translator to apply to an input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Page,
    Alias,
    File,
}

impl TargetKind {
    /// Translate `src` with the translator for this kind.
    pub fn translate(self, src: &str, config: &TargetConfig) -> Result<PathBuf, TargetError> {
        match self {
            Self::Page => PageTarget::new(config).translate(src),
            Self::Alias => AliasTarget::new(config).translate(src),
            Self::File => FileTarget::new(config).translate(src),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Alias => "alias",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TargetError
// ============================================================================

/// Why a path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathIssue {
    /// Nothing to translate (aliases only; an empty page path is the root).
    Empty,
    /// Path contains a NUL byte.
    NulByte,
    /// `..` segments climb above the site root.
    OutsideRoot,
}

impl fmt::Display for PathIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "path is empty",
            Self::NulByte => "path contains a NUL byte",
            Self::OutsideRoot => "path traverses outside the site root",
        })
    }
}

/// Translation error, scoped to a single content item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("invalid path `{path}`: {issue}")]
    InvalidPath { path: String, issue: PathIssue },
}

impl TargetError {
    pub(crate) fn invalid(path: &str, issue: PathIssue) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            issue,
        }
    }

    /// The offending input path.
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidPath { path, .. } => path,
        }
    }

    pub fn issue(&self) -> PathIssue {
        match self {
            Self::InvalidPath { issue, .. } => *issue,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
