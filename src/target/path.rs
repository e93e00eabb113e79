//! Portable path helpers.
//!
//! Translators work on the portable (`/`-separated) form of a path and only
//! convert to the native separator at the very end:
//!
//! ```text
//! "section\foo.rss"  ── to_portable ──▶  "section/foo.rss"
//!                    ── clean ────────▶  ["section", "foo.rss"]
//!                    ── split_ext ────▶  ("foo", Some(".rss"))
//!                    ── to_native ────▶  section/foo/index.rss (PathBuf)
//! ```

use std::borrow::Cow;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use super::{PathIssue, TargetError};

/// Convert native separators to `/`.
///
/// On unix this is a no-op: `\` is a legal filename character there.
#[inline]
pub fn to_portable(path: &str) -> Cow<'_, str> {
    if MAIN_SEPARATOR != '/' && path.contains(MAIN_SEPARATOR) {
        Cow::Owned(path.replace(MAIN_SEPARATOR, "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Check whether a portable path is a directory reference (`section/`).
///
/// The root (`/`) is not considered a directory reference.
#[inline]
pub fn is_dir_ref(portable: &str) -> bool {
    portable.len() > 1 && portable.ends_with('/')
}

/// Lexically clean a portable path into its segments.
///
/// - empty and `.` segments are dropped
/// - `..` pops the previous segment
/// - a `..` with nothing left to pop escapes the site root and is rejected
///
/// Leading `/` is insignificant: every path is relative to the site root.
pub fn clean<'a>(original: &str, portable: &'a str) -> Result<Vec<&'a str>, TargetError> {
    if portable.contains('\0') {
        return Err(TargetError::invalid(original, PathIssue::NulByte));
    }

    let mut segments = Vec::new();
    for segment in portable.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(TargetError::invalid(original, PathIssue::OutsideRoot));
                }
            }
            _ => segments.push(segment),
        }
    }
    Ok(segments)
}

/// Split a single segment into stem and extension (with leading dot).
///
/// Only the final dot-delimited suffix counts, so `archive.tar.gz` yields
/// `("archive.tar", Some(".gz"))`. A leading-dot name (`.htaccess`) and a
/// trailing dot (`foo.`) carry no extension.
///
/// # Examples
/// ```
/// use tola_target::target::path::split_ext;
/// assert_eq!(split_ext("foo.rss"), ("foo", Some(".rss")));
/// assert_eq!(split_ext("foo"), ("foo", None));
/// assert_eq!(split_ext(".htaccess"), (".htaccess", None));
/// ```
pub fn split_ext(segment: &str) -> (&str, Option<&str>) {
    match segment.rfind('.') {
        Some(0) | None => (segment, None),
        Some(idx) if idx + 1 == segment.len() => (segment, None),
        Some(idx) => (&segment[..idx], Some(&segment[idx..])),
    }
}

/// Check whether a segment is a dotfile name such as `.htaccess`.
///
/// [`split_ext`] gives these no extension, yet the name is already complete.
#[inline]
pub fn is_dotfile(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with('.')
}

/// Build a native path from portable segments.
#[inline]
pub fn to_native<'a>(segments: impl IntoIterator<Item = &'a str>) -> PathBuf {
    segments.into_iter().collect()
}

/// Root an output path under the publish directory.
///
/// Trailing separators of `publish_dir` are insignificant, and its own `/`
/// separators are rewritten to the native one so the result never mixes them.
pub fn under_publish_dir(publish_dir: &str, rel: PathBuf) -> PathBuf {
    if publish_dir.is_empty() {
        return rel;
    }
    let portable = to_portable(publish_dir);
    let mut out: PathBuf = Path::new(&*portable).components().collect();
    if !rel.as_os_str().is_empty() {
        out.push(rel);
    }
    out
}

// ============================================================================
// tests
// ============================================================================
