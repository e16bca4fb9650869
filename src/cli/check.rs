//! `siteconf check`: load, validate and summarize.

use super::{Cli, load_config};
use anyhow::Result;
use owo_colors::OwoColorize;
use siteconf::config::SiteConfig;
use siteconf::{debug, log};

pub fn run(cli: &Cli, strict: bool) -> Result<()> {
    let config = load_config(cli, strict)?;

    debug!("check"; "root: {}", config.root.display());
    for plugin in config.resolved_plugins() {
        if let Some(location) = &plugin.location {
            debug!("check"; "plugin {} -> {}", plugin.name, location.display());
        }
    }

    print!("{}", summary(&config));
    log!("ok"; "{} is valid", config.config_path.display());
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    let pagination = config
        .pagination
        .default
        .map_or_else(|| "off".to_string(), |n| format!("{n} per page"));
    let feeds = config.feed.templates().len();

    let rows = [
        ("site", config.site.name.clone()),
        ("base path", format!("/{}", config.site.path_prefix())),
        ("content", config.content_dir().display().to_string()),
        ("templates", config.templates().len().to_string()),
        ("pagination", pagination),
        ("feeds", if feeds == 0 { "off".into() } else { feeds.to_string() }),
        ("plugins", config.plugins.enabled.join(", ")),
        ("authors", config.authors.iter().map(|(id, _)| id).collect::<Vec<_>>().join(", ")),
        ("fingerprint", config.fingerprint()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<12} {}\n", label.dimmed(), value));
    }
    out
}
