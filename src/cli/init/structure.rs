//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories referenced by the starter settings file.
const SITE_DIRS: &[&str] = &["content", "content/images", "content/pages", "plugins"];

/// Create the site directories under `root`, creating `root` if needed.
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }
    Ok(())
}
