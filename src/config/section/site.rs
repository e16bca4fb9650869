//! `[site]` section configuration.
//!
//! Identity of the site plus the content location and date defaults.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Diego Fernando"
//! subtitle = "I'm a technology enthusiast and programmer"
//! url = "https://diegofernando.dev"
//! author = "Diego Fernando"
//! path = "content"
//! timezone = "America/Fortaleza"
//! language = "pt-br"
//! default_date = "fs"
//! date_format = "%d %b %Y"
//! theme = "static"
//! ```

use crate::config::util::{check_http_url, extract_url_path};
use crate::config::{ConfigDiagnostics, FieldPath};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

/// tz database name: `Area/Location`, `Area/Sub/Location` or a single
/// segment such as `UTC`, `CET`, `EST5EDT` or `Singapore`.
static TIMEZONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_+\-]*(/[A-Za-z0-9_+\-]+){0,2}$").expect("valid regex")
});

/// Language tag (`en`, `pt-br`, `pt_BR`, `zh-Hans`).
static LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]{2,8})*$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name.
    pub name: String,

    /// Short tagline shown under the name.
    pub subtitle: Option<String>,

    /// Canonical site URL (e.g., "https://example.com/blog").
    pub url: Option<String>,

    /// Default author name.
    pub author: String,

    /// Content source directory.
    pub path: PathBuf,

    /// IANA time zone name.
    pub timezone: String,

    /// Default content language.
    pub language: String,

    /// Date used for content without one.
    pub default_date: Option<DefaultDate>,

    /// strftime format for displayed dates.
    pub date_format: String,

    /// Theme name or path.
    pub theme: Option<String>,

    /// Emit document-relative URLs.
    pub relative_urls: bool,

    /// Disqus site short name.
    pub disqus_sitename: Option<String>,

    /// Google Analytics tracking id.
    pub google_analytics: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            subtitle: None,
            url: None,
            author: String::new(),
            path: PathBuf::new(),
            timezone: "UTC".into(),
            language: "en".into(),
            default_date: None,
            date_format: "%a %d %B %Y".into(),
            theme: None,
            relative_urls: false,
            disqus_sitename: None,
            google_analytics: None,
        }
    }
}

impl SiteInfoConfig {
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const PATH: FieldPath = FieldPath::new("site.path");
    pub const TIMEZONE: FieldPath = FieldPath::new("site.timezone");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.language");
    pub const DATE_FORMAT: FieldPath = FieldPath::new("site.date_format");
    pub const THEME: FieldPath = FieldPath::new("site.theme");

    /// URL path prefix for subdirectory deployments (`""` at domain root).
    pub fn path_prefix(&self) -> String {
        self.url
            .as_deref()
            .and_then(extract_url_path)
            .unwrap_or_default()
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` and `path` are required
    /// - `url` must be a valid http(s) URL
    /// - `timezone`, `language` and `date_format` must be well-formed
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::NAME,
                "required field is missing",
                "set the site name, e.g.: name = \"My Blog\"",
            );
        }

        if self.path.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::PATH,
                "required field is missing",
                "set the content directory, e.g.: path = \"content\"",
            );
        }

        if let Some(url) = &self.url {
            check_http_url(url, Self::URL, diag);
        }

        if !TIMEZONE_RE.is_match(&self.timezone) {
            diag.error_with_hint(
                Self::TIMEZONE,
                format!("'{}' is not a time zone name", self.timezone),
                "use an IANA name such as \"Europe/Lisbon\" or \"UTC\"",
            );
        }

        if !LANGUAGE_RE.is_match(&self.language) {
            diag.error_with_hint(
                Self::LANGUAGE,
                format!("'{}' is not a language tag", self.language),
                "use a code such as \"en\" or \"pt-br\"",
            );
        }

        if self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            diag.error(
                Self::DATE_FORMAT,
                format!("invalid date format '{}'", self.date_format),
            );
        }

        if self.theme.as_deref().is_some_and(|t| t.trim().is_empty()) {
            diag.error(Self::THEME, "theme must not be empty, remove the key instead");
        }
    }
}

/// Fallback date for content that declares none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefaultDate {
    /// Use the file modification time.
    Fs,
    /// A fixed date (`YYYY-MM-DD`).
    Fixed(NaiveDate),
}

impl TryFrom<String> for DefaultDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "fs" {
            return Ok(Self::Fs);
        }
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map(Self::Fixed)
            .map_err(|_| format!("expected \"fs\" or a YYYY-MM-DD date, found \"{value}\""))
    }
}

impl From<DefaultDate> for String {
    fn from(date: DefaultDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for DefaultDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fs => f.write_str("fs"),
            Self::Fixed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn site(extra: &str) -> SiteInfoConfig {
        let content = format!("[site]\nname = \"Test\"\npath = \"content\"\n{extra}");
        crate::config::SiteConfig::parse_with_ignored(&content)
            .unwrap()
            .0
            .site
    }

    fn errors(site: &SiteInfoConfig) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag.errors()
            .iter()
            .map(|e| e.field.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.timezone, "UTC");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.site.date_format, "%a %d %B %Y");
        assert_eq!(config.site.default_date, None);
        assert!(!config.site.relative_urls);
    }

    #[test]
    fn test_required_fields() {
        let empty = SiteInfoConfig::default();
        let errors = errors(&empty);
        assert!(errors.contains(&"site.name".to_string()));
        assert!(errors.contains(&"site.path".to_string()));
    }

    #[test]
    fn test_valid_site_passes() {
        let site = site(
            r#"url = "https://diegofernando.dev"
timezone = "America/Fortaleza"
language = "pt-br"
default_date = "fs"
date_format = "%d %b %Y""#,
        );
        assert!(errors(&site).is_empty());
        assert_eq!(site.default_date, Some(DefaultDate::Fs));
    }

    #[test]
    fn test_invalid_values() {
        let site = site(
            r#"url = "diegofernando.dev"
timezone = "America Fortaleza"
language = "portuguese brazil"
date_format = "%d %"
theme = " ""#,
        );
        let errors = errors(&site);
        for field in ["site.url", "site.timezone", "site.language", "site.date_format", "site.theme"] {
            assert!(errors.contains(&field.to_string()), "{field} not reported");
        }
    }

    #[test]
    fn test_single_segment_timezones() {
        for tz in ["UTC", "GMT", "Singapore", "CET", "EST5EDT", "Japan", "Zulu", "Etc/GMT+3", "America/Argentina/Buenos_Aires"] {
            let site = site(&format!("timezone = \"{tz}\""));
            assert!(errors(&site).is_empty(), "{tz} rejected");
        }
        for tz in ["", "/Lisbon", "Europe/", "Europe Lisbon", "A/B/C/D"] {
            let site = site(&format!("timezone = \"{tz}\""));
            assert!(errors(&site).contains(&"site.timezone".to_string()), "{tz:?} accepted");
        }
    }

    #[test]
    fn test_language_separators() {
        for lang in ["en", "pt-br", "pt_BR", "zh-Hans"] {
            let site = site(&format!("language = \"{lang}\""));
            assert!(errors(&site).is_empty(), "{lang} rejected");
        }
        assert!(!errors(&site("language = \"pt br\"")).is_empty());
    }

    #[test]
    fn test_default_date_parsing() {
        assert_eq!(
            DefaultDate::try_from("2020-09-24".to_string()),
            Ok(DefaultDate::Fixed(NaiveDate::from_ymd_opt(2020, 9, 24).unwrap()))
        );
        assert!(DefaultDate::try_from("yesterday".to_string()).is_err());
        assert_eq!(DefaultDate::Fs.to_string(), "fs");
    }

    #[test]
    fn test_default_date_rejected_at_parse() {
        let content = "[site]\nname = \"Test\"\npath = \"content\"\ndefault_date = \"soon\"";
        assert!(crate::config::SiteConfig::parse_with_ignored(content).is_err());
    }

    #[test]
    fn test_path_prefix() {
        let site = site("url = \"https://example.github.io/blog/\"");
        assert_eq!(site.path_prefix(), "blog");
        assert_eq!(SiteInfoConfig::default().path_prefix(), "");
    }
}
