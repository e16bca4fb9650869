//! Site initialization.
//!
//! Writes a commented starter settings file and the directories it refers to.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization checks
//! - [`structure`]: Directory structure creation
//! - [`config`]: Settings file generation

mod config;
mod structure;
mod validate;

use anyhow::{Context, Result};
use siteconf::log;
use std::path::Path;

use validate::InitMode;

/// Create a starter site.
///
/// With `name`, the site goes into a new directory under the current one.
/// With `dry_run`, the settings file is printed to stdout and nothing is written.
pub fn new_site(config_name: &Path, name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    validate::validate_target(&root, config_name, mode)?;
    structure::create_structure(&root)?;
    let path = config::write_config(&root, config_name)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
