//! `[links]` section configuration.
//!
//! Ordered `(label, url)` pairs for the blogroll and social widgets.
//!
//! ```toml
//! [links]
//! blogroll = [
//!     ["Pelican", "http://getpelican.com/"],
//!     { label = "Python.org", url = "http://python.org/" },
//! ]
//! social = [["Twitter", "http://twitter.com/arulrajnet"]]
//! ```

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_external_link;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub blogroll: Vec<Link>,
    pub social: Vec<Link>,
}

impl LinksConfig {
    pub const BLOGROLL: FieldPath = FieldPath::new("links.blogroll");
    pub const SOCIAL: FieldPath = FieldPath::new("links.social");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, links) in [(Self::BLOGROLL, &self.blogroll), (Self::SOCIAL, &self.social)] {
            for (i, link) in links.iter().enumerate() {
                link.validate(field.index(i), diag);
            }
        }
    }
}

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LinkRepr")]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Labels must be non-empty; external URLs must parse. Anchors (`#`) and
    /// site-relative links are accepted as-is.
    fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error(field.clone(), "link label must not be empty");
        }
        if self.url.trim().is_empty() {
            diag.error_with_hint(field, "link url must not be empty", "use \"#\" for a placeholder link");
        } else if is_external_link(&self.url) && self.url.starts_with("http") {
            check_http_url(&self.url, field, diag);
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinkRepr {
    Pair(String, String),
    Table { label: String, url: String },
}

impl From<LinkRepr> for Link {
    fn from(repr: LinkRepr) -> Self {
        match repr {
            LinkRepr::Pair(label, url) | LinkRepr::Table { label, url } => Self { label, url },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_pairs_keep_order() {
        let config = test_parse_config(
            r##"[links]
blogroll = [
    ["Pelican", "http://getpelican.com/"],
    ["Python.org", "http://python.org/"],
    ["Jinja2", "http://jinja.pocoo.org/"],
    ["You can modify those links in your config file", "#"],
]
social = [
    { label = "Facebook", url = "http://facebook.com/arulraj.net" },
    ["Twitter", "http://twitter.com/arulrajnet"],
]"##,
        );
        let labels: Vec<_> = config.links.blogroll.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels[..3], ["Pelican", "Python.org", "Jinja2"]);
        assert_eq!(config.links.blogroll[3].url, "#");
        assert_eq!(
            config.links.social,
            vec![
                Link::new("Facebook", "http://facebook.com/arulraj.net"),
                Link::new("Twitter", "http://twitter.com/arulrajnet"),
            ]
        );

        let mut diag = ConfigDiagnostics::new();
        config.links.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_links() {
        let config = test_parse_config(
            r#"[links]
blogroll = [["", "https://example.com"]]
social = [["Mastodon", ""], ["Broken", "https://"]]"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.links.validate(&mut diag);
        assert!(diag.has_error_at("links.blogroll[0]"));
        assert!(diag.has_error_at("links.social[0]"));
        assert!(diag.has_error_at("links.social[1]"));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let content = "[site]\nname = \"T\"\npath = \"c\"\n[links]\nsocial = [[\"only-label\"]]";
        assert!(crate::config::SiteConfig::parse_with_ignored(content).is_err());
    }
}
