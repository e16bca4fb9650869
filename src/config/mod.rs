//! Site settings loaded from `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! │   ├── site       # [site]
//! │   ├── urls       # [urls], [urls.slug]
//! │   ├── pagination # [pagination]
//! │   ├── feed       # [feed]
//! │   ├── links      # [links]
//! │   ├── assets     # [static]
//! │   ├── plugins    # [plugins]
//! │   ├── sitemap    # [sitemap]
//! │   ├── theme      # [theme]
//! │   └── authors    # [authors.<id>]
//! ├── types/         # ConfigError, diagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded [`SiteConfig`] is a plain immutable value. Share it by
//! reference or wrap it in an `Arc`; there is no global handle.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    AuthorBio, Authors, FeedConfig, Link, LinksConfig, PaginationConfig, PluginsConfig,
    ResolvedPlugin, SiteInfoConfig, SitemapConfig, SlugConfig, StaticConfig, ThemeConfig,
    UrlsConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::template::{
    PathTemplate, PlaceholderValues, TemplateError, TemplateScope, is_valid_output_path,
};
use crate::utils::{hash, path::normalize_path};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// root configuration
// ============================================================================

/// The complete site settings record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the settings file (empty when parsed from a string).
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub urls: UrlsConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default, rename = "static")]
    pub static_files: StaticConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub authors: Authors,

    /// Engine-specific settings, passed through untouched.
    #[serde(default)]
    pub extra: BTreeMap<String, toml::Value>,
}

/// Options for [`SiteConfig::load`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject unknown keys instead of warning about them.
    pub strict: bool,
}

/// A path template together with where it was declared.
#[derive(Debug, Clone)]
pub struct TemplateEntry<'a> {
    pub field: FieldPath,
    pub template: &'a PathTemplate,
    pub scope: TemplateScope,
}

impl<'a> TemplateEntry<'a> {
    pub fn new(field: &'static str, template: &'a PathTemplate, scope: TemplateScope) -> Self {
        Self::with_path(FieldPath::new(field), template, scope)
    }

    pub fn with_path(field: FieldPath, template: &'a PathTemplate, scope: TemplateScope) -> Self {
        Self {
            field,
            template,
            scope,
        }
    }
}

impl SiteConfig {
    /// Read, parse and validate the settings file at `path`.
    ///
    /// Relative paths inside the file (plugin search paths) are resolved
    /// against the file's directory. Nothing is returned unless the whole
    /// file is valid.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let config_path = normalize_path(path);
        let root = config_path
            .parent()
            .map_or_else(|| normalize_path(Path::new(".")), Path::to_path_buf);

        debug!("config"; "loading {}", config_path.display());
        let mut config = Self::from_toml(&content, &root, options)?;
        config.config_path = config_path;
        Ok(config)
    }

    /// Parse and validate settings held in memory.
    pub fn from_toml(content: &str, root: &Path, options: &LoadOptions) -> Result<Self, ConfigError> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;
        config.root = root.to_path_buf();

        let mut diag = ConfigDiagnostics::new();
        for key in ignored {
            if options.strict {
                diag.error_with_hint(
                    FieldPath::from(key),
                    "unknown field",
                    "remove it or check the spelling",
                );
            } else {
                diag.warn(FieldPath::from(key), "unknown field, ignored");
            }
        }

        config.validate_into(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Malformed)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate the whole record, collecting every error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_into(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Malformed)
    }

    /// Run every section check, adding findings to `diag`.
    pub fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.pagination.validate(diag);
        self.feed.validate(self.site.url.as_deref(), diag);
        self.links.validate(diag);
        self.static_files.validate(diag);
        self.plugins.validate(&self.root, diag);
        self.sitemap.validate(diag);
        self.theme.validate(diag);
        self.authors.validate(diag);

        let sample = PlaceholderValues::sample();
        for entry in self.templates() {
            check_template(&entry, &sample, diag);
        }
    }

    /// Every declared path template with its scope.
    pub fn templates(&self) -> Vec<TemplateEntry<'_>> {
        let mut entries = self.urls.templates();
        entries.extend(self.pagination.templates());
        entries.extend(self.feed.templates());
        entries
    }

    /// Render every template with [`PlaceholderValues::sample`].
    pub fn sample_paths(&self) -> Vec<(TemplateEntry<'_>, Result<String, TemplateError>)> {
        let sample = PlaceholderValues::sample();
        self.templates()
            .into_iter()
            .map(|entry| {
                let rendered = entry.template.render(&sample);
                (entry, rendered)
            })
            .collect()
    }

    /// Plugins in load order with their resolved locations.
    pub fn resolved_plugins(&self) -> Vec<ResolvedPlugin> {
        self.plugins.resolve(&self.root)
    }

    /// Content directory, resolved against the root.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.site.path)
    }

    /// Stable hash of the serialized settings.
    ///
    /// Equal records give equal fingerprints. `config_path` and `root` are
    /// not part of it.
    ///
    /// Serialization only fails on non-string map keys or non UTF-8 paths,
    /// and every key and path here was read from TOML text. The `Debug`
    /// rendering is hashed instead should that ever change.
    pub fn fingerprint(&self) -> String {
        match serde_json::to_vec(self) {
            Ok(canonical) => hash::fingerprint(&canonical),
            Err(err) => {
                debug!("config"; "fingerprint falls back to debug form: {err}");
                hash::fingerprint(&format!("{self:?}"))
            }
        }
    }
}

fn check_template(entry: &TemplateEntry<'_>, sample: &PlaceholderValues, diag: &mut ConfigDiagnostics) {
    let field = entry.field.clone();
    let scope = entry.scope;

    if entry.template.as_str().trim().is_empty() {
        diag.error_with_hint(
            field,
            "path template must not be empty",
            "remove the key to keep the default",
        );
        return;
    }

    match entry.template.check(scope) {
        Err(err @ TemplateError::OutOfScope { .. }) => {
            diag.error_with_hint(field, err.to_string(), format!("{scope} paths accept {}", scope.allowed_list()));
        }
        Err(err) => diag.error(field, err.to_string()),
        Ok(()) => match entry.template.render(sample) {
            Ok(path) if is_valid_output_path(&path) => {}
            Ok(path) => diag.error(field, format!("renders to an invalid path '{path}'")),
            Err(err) => diag.error(field, err.to_string()),
        },
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the required `[site]` fields prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nname = \"Test\"\npath = \"content\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {ignored:?}"
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
