//! Alias translation: redirect alias → published redirect page.
//!
//! An alias is an old URL that should keep working after a page moved.
//! The redirect page is written where a browser would look for that URL.

use std::path::PathBuf;

use super::path::{clean, is_dir_ref, to_native, to_portable, under_publish_dir};
use super::{PathIssue, TargetError, Translator};
use crate::config::TargetConfig;

const INDEX_FILE: &str = "index.html";
const HTML_EXT: &str = ".html";

/// [`Translator`] for redirect aliases.
///
/// ```text
///              pretty                 ugly
/// old/         old/index.html         old/index.html
/// old          old/index.html         old.html
/// old.html     old.html               old.html
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AliasTarget<'a> {
    config: &'a TargetConfig,
}

impl<'a> AliasTarget<'a> {
    pub const fn new(config: &'a TargetConfig) -> Self {
        Self { config }
    }
}

impl Translator for AliasTarget<'_> {
    fn translate(&self, alias: &str) -> Result<PathBuf, TargetError> {
        if alias.trim().is_empty() {
            return Err(TargetError::invalid(alias, PathIssue::Empty));
        }

        let portable = to_portable(alias);
        let dir_ref = is_dir_ref(&portable);
        let mut segments = clean(alias, &portable)?;

        let file = match segments.pop() {
            None => INDEX_FILE.to_string(),
            Some(last) if dir_ref => {
                segments.push(last);
                INDEX_FILE.to_string()
            }
            Some(last) if last.ends_with(HTML_EXT) => last.to_string(),
            Some(last) if self.config.ugly_urls => format!("{last}{HTML_EXT}"),
            Some(last) => {
                segments.push(last);
                INDEX_FILE.to_string()
            }
        };

        let rel = to_native(segments.into_iter().chain([file.as_str()]));
        Ok(under_publish_dir(&self.config.publish_dir, rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(portable: &str) -> PathBuf {
        to_native(portable.split('/'))
    }

    #[test]
    fn test_alias_pretty() {
        let config = TargetConfig::default();
        let target = AliasTarget::new(&config);
        let cases = [
            ("old/", "old/index.html"),
            ("old", "old/index.html"),
            ("/old/post", "old/post/index.html"),
            ("old.html", "old.html"),
            ("a/b/old.html", "a/b/old.html"),
            ("/", "index.html"),
        ];
        for (alias, expected) in cases {
            assert_eq!(target.translate(alias).unwrap(), native(expected), "alias: {alias:?}");
        }
    }

    #[test]
    fn test_alias_ugly() {
        let config = TargetConfig {
            ugly_urls: true,
            ..Default::default()
        };
        let target = AliasTarget::new(&config);
        assert_eq!(target.translate("old").unwrap(), native("old.html"));
        assert_eq!(target.translate("old/").unwrap(), native("old/index.html"));
        assert_eq!(target.translate("old.html").unwrap(), native("old.html"));
    }

    #[test]
    fn test_alias_publish_dir() {
        let config = TargetConfig {
            publish_dir: "public/".into(),
            ..Default::default()
        };
        let target = AliasTarget::new(&config);
        assert_eq!(target.translate("old").unwrap(), native("public/old/index.html"));
    }

    #[test]
    fn test_alias_empty() {
        let config = TargetConfig::default();
        let target = AliasTarget::new(&config);
        assert_eq!(target.translate("").unwrap_err().issue(), PathIssue::Empty);
        assert_eq!(target.translate("  ").unwrap_err().issue(), PathIssue::Empty);
    }

    #[test]
    fn test_alias_outside_root() {
        let config = TargetConfig::default();
        let target = AliasTarget::new(&config);
        let err = target.translate("../../etc/passwd").unwrap_err();
        assert_eq!(err.issue(), PathIssue::OutsideRoot);
        assert_eq!(err.path(), "../../etc/passwd");
    }
}
