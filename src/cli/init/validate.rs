//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `siteconf init` - write into the current directory
    CurrentDir,
    /// `siteconf init <name>` - create a new subdirectory (must not exist)
    NewDir,
}

/// Validate the target before anything is written.
///
/// # Rules
/// - `CurrentDir`: no settings file may exist yet
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let existing = root.join(config_name);
            if existing.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `siteconf init <name>` to create a site in a new subdirectory.",
                    existing.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_with_other_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "hi").unwrap();
        assert!(validate_target(temp.path(), Path::new("site.toml"), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_current_dir_with_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("site.toml"), "").unwrap();
        assert!(validate_target(temp.path(), Path::new("site.toml"), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_new_dir_modes() {
        let temp = TempDir::new().unwrap();
        let config = Path::new("site.toml");
        assert!(validate_target(temp.path(), config, InitMode::NewDir).is_err());
        assert!(validate_target(&temp.path().join("blog"), config, InitMode::NewDir).is_ok());
    }
}
