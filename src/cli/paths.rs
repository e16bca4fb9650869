//! `siteconf paths`: preview every output path.

use super::{Cli, load_config};
use anyhow::Result;
use owo_colors::OwoColorize;
use siteconf::config::SiteConfig;

pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli, false)?;
    print!("{}", table(&config));
    Ok(())
}

fn table(config: &SiteConfig) -> String {
    let rows = config.sample_paths();
    let width = rows
        .iter()
        .map(|(entry, _)| entry.field.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (entry, rendered) in rows {
        let rendered = match rendered {
            Ok(path) => path.green().to_string(),
            Err(err) => err.to_string().red().to_string(),
        };
        out.push_str(&format!(
            "{:<width$}  {}  {} {}\n",
            entry.field.as_str(),
            entry.template.as_str().dimmed(),
            "→".dimmed(),
            rendered,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteconf::config::LoadOptions;
    use std::path::Path;

    #[test]
    fn test_table_lists_every_template() {
        let content = "[site]\nname = \"Blog\"\npath = \"content\"\n[urls]\nyear_archive_save_as = \"{date:%Y}/index.html\"";
        let config = SiteConfig::from_toml(content, Path::new("."), &LoadOptions::default()).unwrap();
        let text = table(&config);
        assert_eq!(text.lines().count(), config.templates().len());
        assert!(text.contains("hello-world.html"));
        assert!(text.contains("2020/index.html"));
        assert!(text.contains("category/general/page/2/index.html"));
    }
}
