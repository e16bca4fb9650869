//! `[theme]` section configuration.
//!
//! Cover images consumed by the theme. Values are either paths inside the
//! output tree or absolute URLs.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! home_cover = "assets/images/fiber.jpg"
//!
//! [theme.header_covers_by_tag]
//! cupcake = "assets/images/rainbow_cupcake_cover.png"
//! general = "https://casper.ghost.org/v1.0.0/images/writing.jpg"
//! ```

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::{is_contained, is_external_link};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Background image for the home page.
    pub home_cover: Option<String>,
    /// Tag name → header image.
    pub header_covers_by_tag: BTreeMap<String, String>,
    /// Category name → header image.
    pub header_covers_by_category: BTreeMap<String, String>,
}

impl ThemeConfig {
    pub const HOME_COVER: FieldPath = FieldPath::new("theme.home_cover");
    pub const BY_TAG: FieldPath = FieldPath::new("theme.header_covers_by_tag");
    pub const BY_CATEGORY: FieldPath = FieldPath::new("theme.header_covers_by_category");

    pub fn cover_for_tag(&self, tag: &str) -> Option<&str> {
        self.header_covers_by_tag.get(tag).map(String::as_str)
    }

    pub fn cover_for_category(&self, category: &str) -> Option<&str> {
        self.header_covers_by_category
            .get(category)
            .map(String::as_str)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(cover) = &self.home_cover {
            check_image(cover, Self::HOME_COVER, diag);
        }
        for (field, covers) in [
            (Self::BY_TAG, &self.header_covers_by_tag),
            (Self::BY_CATEGORY, &self.header_covers_by_category),
        ] {
            for (name, cover) in covers {
                check_image(cover, field.key(name), diag);
            }
        }
    }
}

/// Report an error unless `value` is a contained relative path or an http(s) URL.
pub(crate) fn check_image(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error(field, "image must not be empty");
    } else if is_external_link(value) {
        if value.starts_with("http") {
            check_http_url(value, field, diag);
        }
    } else if !is_contained(Path::new(value)) {
        diag.error_with_hint(
            field,
            format!("'{value}' must be a relative path or an http(s) URL"),
            "use format like \"assets/images/cover.jpg\"",
        );
    }
}
