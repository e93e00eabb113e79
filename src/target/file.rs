//! Static file translation: files are published verbatim under `publish_dir`.

use std::path::PathBuf;

use super::path::{clean, to_native, to_portable, under_publish_dir};
use super::{TargetError, Translator};
use crate::config::TargetConfig;

/// [`Translator`] for static files (images, stylesheets, downloads).
///
/// The root (`""` or `/`) maps to the publish directory itself.
#[derive(Debug, Clone, Copy)]
pub struct FileTarget<'a> {
    config: &'a TargetConfig,
}

impl<'a> FileTarget<'a> {
    pub const fn new(config: &'a TargetConfig) -> Self {
        Self { config }
    }
}

impl Translator for FileTarget<'_> {
    fn translate(&self, src: &str) -> Result<PathBuf, TargetError> {
        let portable = to_portable(src);
        let segments = clean(src, &portable)?;
        Ok(under_publish_dir(&self.config.publish_dir, to_native(segments)))
    }
}
