//! `siteconf show`: print the loaded record.

use super::{Cli, ShowFormat, load_config};
use anyhow::{Context, Result};
use siteconf::config::SiteConfig;

pub fn run(cli: &Cli, format: ShowFormat) -> Result<()> {
    let config = load_config(cli, false)?;
    println!("{}", render(&config, format)?);
    Ok(())
}

fn render(config: &SiteConfig, format: ShowFormat) -> Result<String> {
    match format {
        ShowFormat::Toml => toml::to_string_pretty(config).context("failed to serialize settings as TOML"),
        ShowFormat::Json => serde_json::to_string_pretty(config).context("failed to serialize settings as JSON"),
    }
}
