//! Page translation: content path → published HTML file.
//!
//! ```text
//!                 pretty (default)            ugly
//! /               index.html                  index.html
//! foo             foo/index.html              foo.html
//! foo.rss         foo/index.rss               foo.rss
//! bar/index.html  bar/index.html              bar/index.html
//! section/        section/index.html          section/index.html
//! .htaccess       .htaccess/index.html        .htaccess
//! ```

use std::path::PathBuf;

use super::path::{
    clean, is_dir_ref, is_dotfile, split_ext, to_native, to_portable, under_publish_dir,
};
use super::{TargetError, Translator};
use crate::config::TargetConfig;

/// Stem of the file that represents a directory.
const INDEX: &str = "index";

/// Extension appended in ugly mode, independent of `default_extension`.
const UGLY_EXT: &str = ".html";

/// Translate a content path to its output file path.
///
/// See the module docs for the mapping table.
pub fn translate(src: &str, config: &TargetConfig) -> Result<PathBuf, TargetError> {
    let portable = to_portable(src);
    let dir_ref = is_dir_ref(&portable);
    let mut segments = clean(src, &portable)?;

    let file = match segments.pop() {
        // Root index
        None if config.ugly_urls => format!("{INDEX}{UGLY_EXT}"),
        None => format!("{INDEX}{}", config.default_ext()),
        Some(last) if dir_ref => {
            segments.push(last);
            if config.ugly_urls {
                format!("{INDEX}{UGLY_EXT}")
            } else {
                format!("{INDEX}{}", config.default_ext())
            }
        }
        Some(last) => {
            let (stem, ext) = split_ext(last);
            let ext = ext.filter(|e| !config.is_content_ext(e));

            if config.ugly_urls {
                match ext {
                    Some(_) => last.to_string(),
                    None if is_dotfile(last) => last.to_string(),
                    None => format!("{stem}{UGLY_EXT}"),
                }
            } else {
                if stem != INDEX {
                    segments.push(stem);
                }
                match ext {
                    Some(ext) => format!("{INDEX}{ext}"),
                    None => format!("{INDEX}{}", config.default_ext()),
                }
            }
        }
    };

    let rel = to_native(segments.into_iter().chain([file.as_str()]));
    Ok(under_publish_dir(&config.publish_dir, rel))
}

/// [`Translator`] for content pages.
#[derive(Debug, Clone, Copy)]
pub struct PageTarget<'a> {
    config: &'a TargetConfig,
}

impl<'a> PageTarget<'a> {
    pub const fn new(config: &'a TargetConfig) -> Self {
        Self { config }
    }
}

impl Translator for PageTarget<'_> {
    #[inline]
    fn translate(&self, src: &str) -> Result<PathBuf, TargetError> {
        translate(src, self.config)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::PathIssue;

    /// Expected native path from a portable string.
    fn native(portable: &str) -> PathBuf {
        to_native(portable.split('/'))
    }

    fn ugly() -> TargetConfig {
        TargetConfig {
            ugly_urls: true,
            ..Default::default()
        }
    }

    // ------------------------------------------------------------------------
    // pretty urls
    // ------------------------------------------------------------------------

    #[test]
    fn test_translate_pretty() {
        let config = TargetConfig::default();
        let cases = [
            ("/", "index.html"),
            ("", "index.html"),
            ("index.html", "index.html"),
            ("bar/index.html", "bar/index.html"),
            ("foo", "foo/index.html"),
            ("foo.html", "foo/index.html"),
            ("foo.xhtml", "foo/index.xhtml"),
            ("section", "section/index.html"),
            ("section/", "section/index.html"),
            ("section/foo", "section/foo/index.html"),
            ("section/foo.html", "section/foo/index.html"),
            ("section/foo.rss", "section/foo/index.rss"),
        ];

        for (src, expected) in cases {
            assert_eq!(translate(src, &config).unwrap(), native(expected), "src: {src:?}");
        }
    }

    #[test]
    fn test_translate_pretty_index_without_extension() {
        let config = TargetConfig::default();
        assert_eq!(translate("index", &config).unwrap(), native("index.html"));
        assert_eq!(translate("docs/index", &config).unwrap(), native("docs/index.html"));
        assert_eq!(translate("feed/index.xml", &config).unwrap(), native("feed/index.xml"));
    }

    #[test]
    fn test_translate_pretty_idempotent() {
        let config = TargetConfig::default();
        for src in ["foo", "section/foo.rss", "a/b/c.xhtml", "/"] {
            let once = translate(src, &config).unwrap();
            let portable = once.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
            let twice = translate(&portable, &config).unwrap();
            assert_eq!(once, twice, "src: {src:?}");
        }
    }

    #[test]
    fn test_translate_multi_dot() {
        let config = TargetConfig::default();
        assert_eq!(
            translate("dl/archive.tar.gz", &config).unwrap(),
            native("dl/archive.tar/index.gz")
        );
    }

    #[test]
    fn test_translate_dotfile_has_no_extension() {
        let config = TargetConfig::default();
        assert_eq!(translate(".well-known", &config).unwrap(), native(".well-known/index.html"));
    }

    // ------------------------------------------------------------------------
    // ugly urls
    // ------------------------------------------------------------------------

    #[test]
    fn test_translate_ugly() {
        let config = ugly();
        let cases = [
            ("foo.html", "foo.html"),
            ("/", "index.html"),
            ("section", "section.html"),
            ("index.html", "index.html"),
            ("section/foo", "section/foo.html"),
            ("section/foo.rss", "section/foo.rss"),
            ("section/", "section/index.html"),
        ];

        for (src, expected) in cases {
            assert_eq!(translate(src, &config).unwrap(), native(expected), "src: {src:?}");
        }
    }

    #[test]
    fn test_translate_ugly_keeps_dotfiles() {
        let config = ugly();
        for src in [".htaccess", "conf/.htaccess", ".well-known/.nojekyll"] {
            assert_eq!(translate(src, &config).unwrap(), native(src), "src: {src:?}");
        }
    }

    #[test]
    fn test_translate_ugly_ignores_default_extension() {
        let config = TargetConfig {
            ugly_urls: true,
            default_extension: ".foobar".into(),
            ..Default::default()
        };
        assert_eq!(translate("/", &config).unwrap(), native("index.html"));
        assert_eq!(translate("baz", &config).unwrap(), native("baz.html"));
    }

    // ------------------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------------------

    #[test]
    fn test_translate_default_extension() {
        let config = TargetConfig {
            default_extension: ".foobar".into(),
            ..Default::default()
        };
        assert_eq!(translate("baz", &config).unwrap(), native("baz/index.foobar"));
        assert_eq!(translate("/", &config).unwrap(), native("index.foobar"));
        // Explicit extension wins over the default
        assert_eq!(translate("baz.rss", &config).unwrap(), native("baz/index.rss"));
    }

    #[test]
    fn test_translate_default_extension_without_dot() {
        let config = TargetConfig {
            default_extension: "xhtml".into(),
            ..Default::default()
        };
        assert_eq!(translate("baz", &config).unwrap(), native("baz/index.xhtml"));
    }

    #[test]
    fn test_translate_publish_dir() {
        for publish_dir in ["a/base", "a/base/"] {
            let config = TargetConfig {
                publish_dir: publish_dir.into(),
                ..Default::default()
            };
            assert_eq!(translate("/", &config).unwrap(), native("a/base/index.html"));
            assert_eq!(
                translate("section/foo.rss", &config).unwrap(),
                native("a/base/section/foo/index.rss")
            );
        }
    }

    #[test]
    fn test_translate_content_extensions() {
        let config = TargetConfig {
            content_extensions: vec![".md".into(), "rst".into()],
            ..Default::default()
        };
        assert_eq!(translate("post.md", &config).unwrap(), native("post/index.html"));
        assert_eq!(translate("doc.RST", &config).unwrap(), native("doc/index.html"));
        assert_eq!(translate("index.md", &config).unwrap(), native("index.html"));

        let config = TargetConfig {
            ugly_urls: true,
            ..config
        };
        assert_eq!(translate("post.md", &config).unwrap(), native("post.html"));
        assert_eq!(translate("feed.rss", &config).unwrap(), native("feed.rss"));
    }

    // ------------------------------------------------------------------------
    // normalization and errors
    // ------------------------------------------------------------------------

    #[test]
    fn test_translate_normalizes_segments() {
        let config = TargetConfig::default();
        assert_eq!(translate("/section//foo", &config).unwrap(), native("section/foo/index.html"));
        assert_eq!(translate("./section/./foo", &config).unwrap(), native("section/foo/index.html"));
        assert_eq!(translate("a/../b", &config).unwrap(), native("b/index.html"));
    }

    #[test]
    fn test_translate_rejects_escape() {
        let config = TargetConfig::default();
        let err = translate("../outside", &config).unwrap_err();
        assert_eq!(err.issue(), PathIssue::OutsideRoot);
        assert_eq!(err.path(), "../outside");
    }

    #[test]
    fn test_translate_rejects_nul() {
        let config = TargetConfig::default();
        let err = translate("foo\0bar", &config).unwrap_err();
        assert_eq!(err.issue(), PathIssue::NulByte);
    }

    #[test]
    fn test_page_target_matches_free_function() {
        let config = TargetConfig::default();
        let target = PageTarget::new(&config);
        for src in ["/", "foo", "section/foo.rss"] {
            assert_eq!(target.translate(src).unwrap(), translate(src, &config).unwrap());
        }
    }
}
