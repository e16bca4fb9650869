//! `[sitemap]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! format = "xml"          # xml | txt
//! exclude = ["^tag/", "^author/"]
//!
//! [sitemap.priorities]
//! articles = 0.5
//! indexes = 0.5
//! pages = 0.5
//!
//! [sitemap.changefreqs]
//! articles = "monthly"
//! indexes = "daily"
//! pages = "monthly"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub format: SitemapFormat,
    pub priorities: PerContent<f32>,
    pub changefreqs: PerContent<ChangeFreq>,
    /// URL patterns (regex) left out of the sitemap.
    pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            format: SitemapFormat::Xml,
            priorities: PerContent {
                articles: 0.5,
                indexes: 0.5,
                pages: 0.5,
            },
            changefreqs: PerContent {
                articles: ChangeFreq::Monthly,
                indexes: ChangeFreq::Daily,
                pages: ChangeFreq::Monthly,
            },
            exclude: Vec::new(),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapFormat {
    #[default]
    Xml,
    /// One URL per line.
    Txt,
}

/// A value per content type.
/// All three keys are required when the table is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerContent<T> {
    pub articles: T,
    pub indexes: T,
    pub pages: T,
}

impl<T> PerContent<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        [
            ("articles", &self.articles),
            ("indexes", &self.indexes),
            ("pages", &self.pages),
        ]
        .into_iter()
    }
}

/// `<changefreq>` values accepted by the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SitemapConfig {
    pub const PRIORITIES: FieldPath = FieldPath::new("sitemap.priorities");
    pub const EXCLUDE: FieldPath = FieldPath::new("sitemap.exclude");

    /// True if `url` matches an exclude pattern. Invalid patterns never match.
    pub fn is_excluded(&self, url: &str) -> bool {
        self.exclude
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .any(|re| re.is_match(url))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (kind, &priority) in self.priorities.iter() {
            if !(0.0..=1.0).contains(&priority) {
                diag.error_with_hint(
                    Self::PRIORITIES.key(kind),
                    format!("priority {priority} is out of range"),
                    "use a value between 0.0 and 1.0",
                );
            }
        }

        for (i, pattern) in self.exclude.iter().enumerate() {
            if let Err(e) = Regex::new(pattern) {
                diag.error(
                    Self::EXCLUDE.index(i),
                    format!("invalid pattern '{pattern}': {e}"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let sitemap = &config.sitemap;
        assert_eq!(sitemap.format, SitemapFormat::Xml);
        assert_eq!(sitemap.priorities.indexes, 0.5);
        assert_eq!(sitemap.changefreqs.indexes, ChangeFreq::Daily);
        assert_eq!(sitemap.changefreqs.articles, ChangeFreq::Monthly);
    }

    #[test]
    fn test_parse() {
        let config = test_parse_config(
            r#"[sitemap]
format = "txt"
exclude = ["^tag/"]

[sitemap.priorities]
articles = 0.8
indexes = 0.4
pages = 0.2

[sitemap.changefreqs]
articles = "weekly"
indexes = "hourly"
pages = "never""#,
        );
        let sitemap = &config.sitemap;
        assert_eq!(sitemap.format, SitemapFormat::Txt);
        assert_eq!(sitemap.priorities.articles, 0.8);
        assert_eq!(sitemap.changefreqs.pages, ChangeFreq::Never);
        assert_eq!(sitemap.changefreqs.indexes.to_string(), "hourly");
        assert!(sitemap.is_excluded("tag/rust.html"));
        assert!(!sitemap.is_excluded("hello-world.html"));

        let mut diag = ConfigDiagnostics::new();
        sitemap.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_changefreq_rejected() {
        let content = "[site]\nname = \"T\"\npath = \"c\"\n[sitemap.changefreqs]\narticles = \"sometimes\"\nindexes = \"daily\"\npages = \"daily\"";
        assert!(crate::config::SiteConfig::parse_with_ignored(content).is_err());
    }

    #[test]
    fn test_validate() {
        let config = test_parse_config(
            r#"[sitemap]
exclude = ["(unclosed"]

[sitemap.priorities]
articles = 1.5
indexes = -0.1
pages = 1.0"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.sitemap.validate(&mut diag);
        assert!(diag.has_error_at("sitemap.priorities.articles"));
        assert!(diag.has_error_at("sitemap.priorities.indexes"));
        assert!(!diag.has_error_at("sitemap.priorities.pages"));
        assert!(diag.has_error_at("sitemap.exclude[0]"));
    }
}
