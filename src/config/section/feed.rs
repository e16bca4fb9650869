//! `[feed]` section configuration.
//!
//! Every feed is disabled unless its path template is set.
//!
//! ```toml
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! category_atom = "feeds/{slug}.atom.xml"
//! translation_atom = "feeds/all-{lang}.atom.xml"
//! max_items = 20
//! ```

use crate::config::section::SiteInfoConfig;
use crate::config::{ConfigDiagnostics, FieldPath, TemplateEntry};
use crate::template::{PathTemplate, TemplateScope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub all_atom: Option<PathTemplate>,
    pub all_rss: Option<PathTemplate>,
    pub category_atom: Option<PathTemplate>,
    pub translation_atom: Option<PathTemplate>,
    pub author_atom: Option<PathTemplate>,
    pub author_rss: Option<PathTemplate>,
    /// Maximum entries per feed, unlimited when absent.
    pub max_items: Option<u32>,
}

impl FeedConfig {
    pub const MAX_ITEMS: FieldPath = FieldPath::new("feed.max_items");

    /// True if at least one feed is generated.
    pub fn enabled(&self) -> bool {
        !self.templates().is_empty()
    }

    pub fn templates(&self) -> Vec<TemplateEntry<'_>> {
        use TemplateScope::*;
        [
            ("feed.all_atom", &self.all_atom, Feed),
            ("feed.all_rss", &self.all_rss, Feed),
            ("feed.category_atom", &self.category_atom, TaxonomyFeed),
            ("feed.translation_atom", &self.translation_atom, TranslationFeed),
            ("feed.author_atom", &self.author_atom, TaxonomyFeed),
            ("feed.author_rss", &self.author_rss, TaxonomyFeed),
        ]
        .into_iter()
        .filter_map(|(field, template, scope)| {
            template
                .as_ref()
                .map(|t| TemplateEntry::new(field, t, scope))
        })
        .collect()
    }

    /// Feeds need absolute links, so they require `site.url`.
    pub fn validate(&self, site_url: Option<&str>, diag: &mut ConfigDiagnostics) {
        if self.enabled() && site_url.is_none() {
            diag.error_with_hint(
                SiteInfoConfig::URL,
                "feeds are enabled but site url is not configured",
                "set [site] url, e.g.: \"https://example.com\"",
            );
        }
        if self.max_items == Some(0) {
            diag.error_with_hint(
                Self::MAX_ITEMS,
                "max_items must be at least 1",
                "remove the key for unlimited entries",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_disabled_by_default() {
        let config = test_parse_config("");
        assert!(!config.feed.enabled());

        let mut diag = ConfigDiagnostics::new();
        config.feed.validate(None, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_feed_requires_url() {
        let config = test_parse_config("[feed]\nall_atom = \"feeds/all.atom.xml\"");
        assert!(config.feed.enabled());
        assert_eq!(config.feed.templates().len(), 1);

        let mut diag = ConfigDiagnostics::new();
        config.feed.validate(None, &mut diag);
        assert!(diag.has_error_at("site.url"));

        let mut diag = ConfigDiagnostics::new();
        config.feed.validate(Some("https://example.com"), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_scopes() {
        let config = test_parse_config(
            "[feed]\ncategory_atom = \"feeds/{slug}.atom.xml\"\ntranslation_atom = \"feeds/all-{lang}.atom.xml\"",
        );
        for entry in config.feed.templates() {
            assert!(entry.template.check(entry.scope).is_ok(), "{}", entry.field.as_str());
        }

        let config = test_parse_config("[feed]\nall_atom = \"feeds/{slug}.xml\"");
        let entries = config.feed.templates();
        assert!(entries[0].template.check(entries[0].scope).is_err());
    }
}
