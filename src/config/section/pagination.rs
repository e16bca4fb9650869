//! `[pagination]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [pagination]
//! default = 3
//! patterns = [
//!     [1, "{base_name}/", "{base_name}/index.html"],
//!     [2, "{base_name}/page/{number}/", "{base_name}/page/{number}/index.html"],
//! ]
//! ```
//!
//! Patterns may also be written as tables:
//! `{ min_page = 2, url = "...", save_as = "..." }`.

use crate::config::{ConfigDiagnostics, FieldPath, TemplateEntry};
use crate::template::{PathTemplate, TemplateScope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Items per index page; pagination is off when absent.
    #[serde(alias = "default_pagination")]
    pub default: Option<u32>,

    /// Path patterns, selected by the highest `min_page` not above the page number.
    pub patterns: Vec<PaginationPattern>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default: None,
            patterns: vec![
                PaginationPattern::new(1, "{base_name}/", "{base_name}/index.html"),
                PaginationPattern::new(
                    2,
                    "{base_name}/page/{number}/",
                    "{base_name}/page/{number}/index.html",
                ),
            ],
        }
    }
}

impl PaginationConfig {
    pub const DEFAULT: FieldPath = FieldPath::new("pagination.default");
    pub const PATTERNS: FieldPath = FieldPath::new("pagination.patterns");

    /// Pattern used for page `number` (1-based).
    pub fn pattern_for(&self, number: u32) -> Option<&PaginationPattern> {
        self.patterns
            .iter()
            .filter(|p| p.min_page <= number)
            .max_by_key(|p| p.min_page)
    }

    pub fn templates(&self) -> Vec<TemplateEntry<'_>> {
        let mut entries = Vec::with_capacity(self.patterns.len() * 2);
        for (i, pattern) in self.patterns.iter().enumerate() {
            let field = Self::PATTERNS.index(i);
            entries.push(TemplateEntry::with_path(
                field.key("url"),
                &pattern.url,
                TemplateScope::Pagination,
            ));
            entries.push(TemplateEntry::with_path(
                field.key("save_as"),
                &pattern.save_as,
                TemplateScope::Pagination,
            ));
        }
        entries
    }

    /// Validate page size and pattern ordering.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default == Some(0) {
            diag.error_with_hint(
                Self::DEFAULT,
                "page size must be at least 1",
                "remove the key to disable pagination",
            );
        }

        match self.patterns.first() {
            None => diag.error(Self::PATTERNS, "at least one pattern is required"),
            Some(first) if first.min_page != 1 => diag.error_with_hint(
                Self::PATTERNS.index(0),
                format!("first pattern starts at page {}", first.min_page),
                "the first pattern must have min_page = 1",
            ),
            Some(_) => {}
        }

        for (i, pair) in self.patterns.windows(2).enumerate() {
            if pair[1].min_page <= pair[0].min_page {
                diag.error(
                    Self::PATTERNS.index(i + 1),
                    format!(
                        "min_page {} must be greater than the previous pattern's {}",
                        pair[1].min_page, pair[0].min_page
                    ),
                );
            }
        }
    }
}

/// One pagination path pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PatternRepr")]
pub struct PaginationPattern {
    pub min_page: u32,
    pub url: PathTemplate,
    pub save_as: PathTemplate,
}

impl PaginationPattern {
    fn new(min_page: u32, url: &str, save_as: &str) -> Self {
        Self {
            min_page,
            url: PathTemplate::from(url.to_string()),
            save_as: PathTemplate::from(save_as.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternRepr {
    Tuple(u32, PathTemplate, PathTemplate),
    Table {
        min_page: u32,
        url: PathTemplate,
        save_as: PathTemplate,
    },
}

impl From<PatternRepr> for PaginationPattern {
    fn from(repr: PatternRepr) -> Self {
        match repr {
            PatternRepr::Tuple(min_page, url, save_as)
            | PatternRepr::Table {
                min_page,
                url,
                save_as,
            } => Self {
                min_page,
                url,
                save_as,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::template::PlaceholderValues;

    #[test]
    fn test_default_pagination_is_integer() {
        let config = test_parse_config("[pagination]\ndefault = 3");
        assert_eq!(config.pagination.default, Some(3));

        let config = test_parse_config("[pagination]\ndefault_pagination = 3");
        assert_eq!(config.pagination.default, Some(3));
    }

    #[test]
    fn test_disabled_by_default() {
        let config = test_parse_config("");
        assert_eq!(config.pagination.default, None);
        assert_eq!(config.pagination.patterns.len(), 2);
    }

    #[test]
    fn test_tuple_and_table_patterns() {
        let config = test_parse_config(
            r#"[pagination]
patterns = [
    [1, "{base_name}/", "{base_name}/index.html"],
    { min_page = 2, url = "{base_name}/page/{number}/", save_as = "{base_name}/page/{number}/index.html" },
]"#,
        );
        let patterns = &config.pagination.patterns;
        assert_eq!(patterns[0].min_page, 1);
        assert_eq!(patterns[1].min_page, 2);
        assert_eq!(patterns[1].url.as_str(), "{base_name}/page/{number}/");
    }

    #[test]
    fn test_pattern_for() {
        let pagination = PaginationConfig::default();
        assert_eq!(pagination.pattern_for(1).map(|p| p.min_page), Some(1));
        assert_eq!(pagination.pattern_for(7).map(|p| p.min_page), Some(2));
        assert!(pagination.pattern_for(0).is_none());

        let values = PlaceholderValues::new()
            .with_base_name("tag/rust")
            .with_number(7);
        let pattern = pagination.pattern_for(7).unwrap();
        assert_eq!(
            pattern.save_as.render(&values).unwrap(),
            "tag/rust/page/7/index.html"
        );
    }

    #[test]
    fn test_validate() {
        let mut diag = ConfigDiagnostics::new();
        PaginationConfig::default().validate(&mut diag);
        assert!(diag.is_empty());

        let config = test_parse_config(
            r#"[pagination]
default = 0
patterns = [
    [2, "{base_name}/", "{base_name}/index.html"],
    [2, "{base_name}/{number}/", "{base_name}/{number}/index.html"],
]"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.pagination.validate(&mut diag);
        assert!(diag.has_error_at("pagination.default"));
        assert!(diag.has_error_at("pagination.patterns[0]"));
        assert!(diag.has_error_at("pagination.patterns[1]"));
    }

    #[test]
    fn test_empty_patterns() {
        let config = test_parse_config("[pagination]\npatterns = []");
        let mut diag = ConfigDiagnostics::new();
        config.pagination.validate(&mut diag);
        assert!(diag.has_error_at("pagination.patterns"));
    }
}
