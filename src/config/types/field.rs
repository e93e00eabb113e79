//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section exposes its paths as a `FIELDS` constant:
///
/// ```ignore
/// diag.error(TargetConfig::FIELDS.default_extension, "contains a path separator");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_as_str() {
        const PATH: FieldPath = FieldPath::new("target.ugly_urls");
        assert_eq!(PATH.as_str(), "target.ugly_urls");
        assert_eq!(PATH.as_ref(), "target.ugly_urls");
    }

    #[test]
    fn test_field_path_display() {
        // Escape codes wrap the whole span, the backticked path stays intact
        let display = FieldPath::new("target.publish_dir").to_string();
        assert!(display.contains("`target.publish_dir`"));
    }
}
