//! `[static]` section configuration.
//!
//! Static asset directories copied as-is, and per-file output overrides.
//!
//! # Example
//!
//! ```toml
//! [static]
//! paths = ["assets"]
//!
//! [static.extra_path_metadata]
//! "assets/robots.txt" = { path = "robots.txt" }
//! "assets/favicon.ico" = { path = "favicon.ico" }
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_contained;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Asset paths, relative to the content directory.
    pub paths: Vec<PathBuf>,

    /// Source file → output metadata.
    pub extra_path_metadata: BTreeMap<String, PathMetadata>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            paths: vec!["images".into()],
            extra_path_metadata: BTreeMap::new(),
        }
    }
}

/// Output override for a single static file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMetadata {
    /// Output path, relative to the output directory.
    pub path: PathBuf,
}

impl StaticConfig {
    pub const PATHS: FieldPath = FieldPath::new("static.paths");
    pub const EXTRA_PATH_METADATA: FieldPath = FieldPath::new("static.extra_path_metadata");

    /// Output path for a static source file, if overridden.
    pub fn output_override(&self, source: &str) -> Option<&Path> {
        self.extra_path_metadata
            .get(source)
            .map(|meta| meta.path.as_path())
    }

    /// True if `source` lives inside one of the static paths.
    pub fn is_static(&self, source: &Path) -> bool {
        let source = source.strip_prefix("./").unwrap_or(source);
        self.paths
            .iter()
            .any(|p| source.starts_with(p.strip_prefix("./").unwrap_or(p)))
    }

    /// Validate that every path stays inside its base directory.
    ///
    /// Metadata for a file outside the static paths is only a warning: the
    /// engine may still pick it up as content.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, path) in self.paths.iter().enumerate() {
            if !is_contained(path) {
                diag.error_with_hint(
                    Self::PATHS.index(i),
                    format!("'{}' must be a relative path inside the content directory", path.display()),
                    "use format like \"assets\" or \"images/icons\"",
                );
            }
        }

        let mut outputs: BTreeMap<&Path, &str> = BTreeMap::new();
        for (source, meta) in &self.extra_path_metadata {
            let field = Self::EXTRA_PATH_METADATA.key(source);
            let source_path = Path::new(source);

            if !is_contained(source_path) {
                diag.error(
                    field.clone(),
                    format!("source '{source}' must be a relative path"),
                );
            } else if !self.is_static(source_path) {
                diag.warn(
                    field.clone(),
                    format!("source '{source}' is not inside any static path"),
                );
            }

            if !is_contained(&meta.path) {
                diag.error(
                    field.key("path"),
                    format!(
                        "output '{}' must be a relative path inside the output directory",
                        meta.path.display()
                    ),
                );
            }

            if let Some(previous) = outputs.insert(meta.path.as_path(), source.as_str()) {
                diag.error(
                    field.key("path"),
                    format!(
                        "output '{}' is also used by '{previous}'",
                        meta.path.display()
                    ),
                );
            }
        }
    }
}
