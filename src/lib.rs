//! Output path translation for static sites.
//!
//! Maps logical content paths to the files a static site generator writes:
//!
//! ```
//! use tola_target::{TargetConfig, translate};
//!
//! let config = TargetConfig::default();
//! let out = translate("section/foo.rss", &config).unwrap();
//! assert!(out.ends_with("foo/index.rss"));
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod target;
mod utils;

pub use config::{SiteConfig, TargetConfig};
pub use target::{
    AliasTarget, FileTarget, PageTarget, PathIssue, TargetError, TargetKind, Translator, translate,
};
