//! `[plugins]` section configuration.
//!
//! Plugins are external extensions referenced by name. A name resolves
//! against the first search path that holds either an entry called `<name>`
//! (directory or file) or a file whose stem is `<name>`. Dotted names
//! (`pelican.plugins.sitemap`) are also tried as nested paths.
//!
//! # Example
//!
//! ```toml
//! [plugins]
//! paths = ["pelican-plugins", "~/.local/share/plugins"]
//! enabled = ["sitemap", "neighbors", "assets"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Search paths, in lookup order.
    pub paths: Vec<PathBuf>,

    /// Plugin names, in load order.
    pub enabled: Vec<String>,
}

/// A plugin name and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPlugin {
    pub name: String,
    /// `None` if no search path provides the plugin.
    pub location: Option<PathBuf>,
}

impl PluginsConfig {
    pub const PATHS: FieldPath = FieldPath::new("plugins.paths");
    pub const ENABLED: FieldPath = FieldPath::new("plugins.enabled");

    /// Search paths with `~` expanded and relative paths anchored at `root`.
    pub fn search_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.paths.iter().map(|p| resolve_in(p, root)).collect()
    }

    /// Resolve every enabled plugin, in declared order.
    pub fn resolve(&self, root: &Path) -> Vec<ResolvedPlugin> {
        let dirs = self.search_dirs(root);
        self.enabled
            .iter()
            .map(|name| ResolvedPlugin {
                name: name.clone(),
                location: dirs.iter().find_map(|dir| locate(dir, name)),
            })
            .collect()
    }

    /// Validate names and check each one resolves.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let dirs = self.search_dirs(root);

        for (i, dir) in dirs.iter().enumerate() {
            if !dir.is_dir() {
                diag.warn(
                    Self::PATHS.index(i),
                    format!("search path '{}' is not a directory", dir.display()),
                );
            }
        }

        if !self.enabled.is_empty() && dirs.is_empty() {
            diag.error_with_hint(
                Self::PATHS,
                "plugins are enabled but no search path is declared",
                "add the directory holding them, e.g.: paths = [\"plugins\"]",
            );
            return;
        }

        for (i, name) in self.enabled.iter().enumerate() {
            let field = Self::ENABLED.index(i);

            if !is_valid_name(name) {
                diag.error(field, format!("'{name}' is not a valid plugin name"));
                continue;
            }
            if self.enabled[..i].contains(name) {
                diag.error(field, format!("plugin '{name}' is enabled twice"));
                continue;
            }
            if !dirs.iter().any(|dir| locate(dir, name).is_some()) {
                let searched = dirs
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                diag.error_with_hint(
                    field,
                    format!("plugin '{name}' not found"),
                    format!("searched: {searched}"),
                );
            }
        }
    }
}

/// Names are identifiers, optionally dotted.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        })
}

/// Find `name` inside `dir`.
fn locate(dir: &Path, name: &str) -> Option<PathBuf> {
    let direct = dir.join(name);
    if direct.exists() {
        return Some(direct);
    }

    if name.contains('.') {
        let nested = dir.join(name.replace('.', "/"));
        if nested.exists() {
            return Some(nested);
        }
    }

    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .find(|path| path.is_file() && path.file_stem().is_some_and(|stem| stem == name))
}
