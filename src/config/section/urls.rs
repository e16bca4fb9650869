//! `[urls]` section configuration.
//!
//! Output locations for every kind of generated page. `*_url` is the link
//! emitted in pages, `*_save_as` the file written to the output directory.
//!
//! # Example
//!
//! ```toml
//! [urls]
//! article_url = "{slug}.html"
//! article_save_as = "{slug}.html"
//! page_url = "pages/{slug}/"
//! page_save_as = "pages/{slug}/index.html"
//! year_archive_save_as = "{date:%Y}/index.html"
//! month_archive_save_as = "{date:%Y}/{date:%m}/index.html"
//! category_url = "category/{slug}"
//! category_save_as = "category/{slug}/index.html"
//!
//! [urls.slug]
//! mode = "full"             # full | safe | ascii | no
//! separator = "dash"        # dash | underscore
//! case = "lower"            # lower | upper | capitalize | preserve
//! ```

use crate::config::TemplateEntry;
use crate::template::{PathTemplate, TemplateScope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    pub article_url: PathTemplate,
    pub article_save_as: PathTemplate,
    pub page_url: PathTemplate,
    pub page_save_as: PathTemplate,
    /// Year archive output, disabled when absent.
    pub year_archive_save_as: Option<PathTemplate>,
    /// Month archive output, disabled when absent.
    pub month_archive_save_as: Option<PathTemplate>,
    pub category_url: PathTemplate,
    pub category_save_as: PathTemplate,
    pub categories_save_as: PathTemplate,
    pub tag_url: PathTemplate,
    pub tag_save_as: PathTemplate,
    pub tags_save_as: PathTemplate,
    pub author_url: PathTemplate,
    pub author_save_as: PathTemplate,
    pub authors_save_as: PathTemplate,
    pub archives_save_as: PathTemplate,

    /// Slug derivation for `{slug}`.
    pub slug: SlugConfig,
}

fn template(source: &str) -> PathTemplate {
    PathTemplate::from(source.to_string())
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            article_url: template("{slug}.html"),
            article_save_as: template("{slug}.html"),
            page_url: template("pages/{slug}.html"),
            page_save_as: template("pages/{slug}.html"),
            year_archive_save_as: None,
            month_archive_save_as: None,
            category_url: template("category/{slug}.html"),
            category_save_as: template("category/{slug}.html"),
            categories_save_as: template("categories.html"),
            tag_url: template("tag/{slug}.html"),
            tag_save_as: template("tag/{slug}.html"),
            tags_save_as: template("tags.html"),
            author_url: template("author/{slug}.html"),
            author_save_as: template("author/{slug}.html"),
            authors_save_as: template("authors.html"),
            archives_save_as: template("archives.html"),
            slug: SlugConfig::default(),
        }
    }
}

impl UrlsConfig {
    /// Every template in this section with the scope it is checked against.
    pub fn templates(&self) -> Vec<TemplateEntry<'_>> {
        use TemplateScope::*;
        let mut entries = vec![
            TemplateEntry::new("urls.article_url", &self.article_url, Article),
            TemplateEntry::new("urls.article_save_as", &self.article_save_as, Article),
            TemplateEntry::new("urls.page_url", &self.page_url, Page),
            TemplateEntry::new("urls.page_save_as", &self.page_save_as, Page),
        ];
        if let Some(t) = &self.year_archive_save_as {
            entries.push(TemplateEntry::new("urls.year_archive_save_as", t, Archive));
        }
        if let Some(t) = &self.month_archive_save_as {
            entries.push(TemplateEntry::new("urls.month_archive_save_as", t, Archive));
        }
        entries.extend([
            TemplateEntry::new("urls.category_url", &self.category_url, Taxonomy),
            TemplateEntry::new("urls.category_save_as", &self.category_save_as, Taxonomy),
            TemplateEntry::new("urls.categories_save_as", &self.categories_save_as, Listing),
            TemplateEntry::new("urls.tag_url", &self.tag_url, Taxonomy),
            TemplateEntry::new("urls.tag_save_as", &self.tag_save_as, Taxonomy),
            TemplateEntry::new("urls.tags_save_as", &self.tags_save_as, Listing),
            TemplateEntry::new("urls.author_url", &self.author_url, Taxonomy),
            TemplateEntry::new("urls.author_save_as", &self.author_save_as, Taxonomy),
            TemplateEntry::new("urls.authors_save_as", &self.authors_save_as, Listing),
            TemplateEntry::new("urls.archives_save_as", &self.archives_save_as, Listing),
        ]);
        entries
    }
}

// ============================================================================
// Slug
// ============================================================================

/// URL slug generation mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Full slugify: Unicode → ASCII, only alphanumerics, use separator.
    Full,
    /// Safe mode: remove dangerous chars, preserve Unicode, use separator (default).
    #[default]
    Safe,
    /// ASCII mode: transliterate Unicode → ASCII, keep `-`, `_` and `.`.
    Ascii,
    /// No modification; preserve original text.
    No,
}

/// Case transformation mode for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugCase {
    /// Convert to lowercase (default).
    #[default]
    Lower,
    /// Convert to UPPERCASE.
    Upper,
    /// Capitalize each word (Title Case).
    Capitalize,
    /// Preserve original case.
    Preserve,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub mode: SlugMode,
    pub separator: SlugSeparator,
    pub case: SlugCase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.urls.article_url.as_str(), "{slug}.html");
        assert_eq!(config.urls.page_save_as.as_str(), "pages/{slug}.html");
        assert!(config.urls.year_archive_save_as.is_none());
        assert_eq!(config.urls.slug, SlugConfig::default());
        assert!(
            config
                .urls
                .templates()
                .iter()
                .all(|entry| entry.template.check(entry.scope).is_ok())
        );
    }

    #[test]
    fn test_custom_templates() {
        let config = test_parse_config(
            r#"[urls]
page_url = "pages/{slug}/"
page_save_as = "pages/{slug}/index.html"
year_archive_save_as = "{date:%Y}/index.html"
month_archive_save_as = "{date:%Y}/{date:%m}/index.html"
categories_save_as = "catgegories.html""#,
        );
        assert_eq!(config.urls.page_url.as_str(), "pages/{slug}/");
        assert_eq!(config.urls.categories_save_as.as_str(), "catgegories.html");

        let fields: Vec<_> = config
            .urls
            .templates()
            .iter()
            .map(|entry| entry.field.as_str().to_string())
            .collect();
        assert!(fields.contains(&"urls.year_archive_save_as".to_string()));
        assert!(fields.contains(&"urls.month_archive_save_as".to_string()));
    }

    #[test]
    fn test_slug_parsing() {
        for (input, expected) in [
            ("full", SlugMode::Full),
            ("safe", SlugMode::Safe),
            ("ascii", SlugMode::Ascii),
            ("no", SlugMode::No),
        ] {
            let config = test_parse_config(&format!("[urls.slug]\nmode = \"{input}\""));
            assert_eq!(config.urls.slug.mode, expected, "mode failed for {input}");
        }

        let config = test_parse_config("[urls.slug]\nseparator = \"underscore\"\ncase = \"preserve\"");
        assert_eq!(config.urls.slug.separator.as_char(), '_');
        assert_eq!(config.urls.slug.case, SlugCase::Preserve);
    }
}
