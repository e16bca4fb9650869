//! Config field path used to point diagnostics at a TOML key.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dot-separated path to a config key (e.g. `urls.article_url`).
///
/// Static paths are declared as constants next to each section; dynamic ones
/// (map entries, list items) are built with [`FieldPath::key`] and
/// [`FieldPath::index`].
///
/// # Example
///
/// ```ignore
/// diag.error(SiteInfo::NAME, "required");
/// diag.error(FieldPath::new("authors").key("diego").key("bio"), "empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to a named child key.
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }

    /// Path to a list item.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, index)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
