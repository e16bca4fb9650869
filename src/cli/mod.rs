//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod paths;
pub mod show;

pub use args::{Cli, Commands, ShowFormat};

use anyhow::{Result, bail};
use siteconf::config::{LoadOptions, SiteConfig, find_config_file};
use siteconf::debug;

/// Locate and load the settings file named by `--config`.
pub fn load_config(cli: &Cli, strict: bool) -> Result<SiteConfig> {
    let Some(path) = find_config_file(&cli.config) else {
        bail!(
            "config file '{}' not found. Run 'siteconf init' to create one.",
            cli.config.display()
        );
    };
    debug!("config"; "using {}", path.display());

    let config = SiteConfig::load(&path, &LoadOptions { strict })?;
    Ok(config)
}
