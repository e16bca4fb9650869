//! Path and URL helpers.
//!
//! Pure functions except [`normalize_path`], which touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand `~` and anchor relative paths at `root`.
pub fn resolve_in(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    }
}

/// True if `path` stays inside the directory it is relative to.
///
/// Rejects absolute paths, `..` components and empty paths.
pub fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_in() {
        let root = Path::new("/site");
        assert_eq!(
            resolve_in(Path::new("plugins"), root),
            PathBuf::from("/site/plugins")
        );
        assert_eq!(
            resolve_in(Path::new("/opt/plugins"), root),
            PathBuf::from("/opt/plugins")
        );
        assert!(!resolve_in(Path::new("~/plugins"), root).starts_with("~"));
    }

    #[test]
    fn test_is_contained() {
        assert!(is_contained(Path::new("assets")));
        assert!(is_contained(Path::new("./assets/images")));
        assert!(!is_contained(Path::new("")));
        assert!(!is_contained(Path::new("/assets")));
        assert!(!is_contained(Path::new("assets/../../etc")));
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("assets/images/cover.jpg"));
        assert!(!is_external_link("#section"));
    }
}
