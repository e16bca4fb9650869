//! Starter settings file generation.
//!
//! Path templates, pagination patterns and sitemap values are written from
//! the section defaults, so the starter file always matches what an empty
//! section would load as.

use anyhow::{Context, Result};
use siteconf::config::section::{
    PaginationConfig, SiteInfoConfig, SitemapConfig, StaticConfig, UrlsConfig,
};
use std::fmt::Write;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Generate the commented settings file.
pub fn generate_config_template() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# siteconf settings (v{})\n# Commented keys show optional settings.\n",
        env!("CARGO_PKG_VERSION")
    );

    let site = SiteInfoConfig::default();
    out.push_str("[site]\n");
    out.push_str("name = \"My Site\"\n");
    out.push_str("# subtitle = \"\"\n");
    out.push_str("# url = \"https://example.com\"\n");
    out.push_str("# author = \"\"\n");
    out.push_str("path = \"content\"\n");
    let _ = writeln!(out, "timezone = \"{}\"", site.timezone);
    let _ = writeln!(out, "language = \"{}\"", site.language);
    out.push_str("# default_date = \"fs\"           # \"fs\" or YYYY-MM-DD\n");
    let _ = writeln!(out, "date_format = \"{}\"", site.date_format);
    out.push_str("# theme = \"themes/my-theme\"\n\n");

    out.push_str("[urls]\n");
    for entry in UrlsConfig::default().templates() {
        let key = entry.field.as_str().trim_start_matches("urls.");
        let _ = writeln!(out, "{key} = \"{}\"", entry.template);
    }
    out.push_str("# year_archive_save_as = \"{date:%Y}/index.html\"\n");
    out.push_str("# month_archive_save_as = \"{date:%Y}/{date:%m}/index.html\"\n\n");

    out.push_str("[urls.slug]\n");
    out.push_str("mode = \"safe\"                   # full | safe | ascii | no\n");
    out.push_str("separator = \"dash\"              # dash | underscore\n");
    out.push_str("case = \"lower\"                  # lower | upper | capitalize | preserve\n\n");

    out.push_str("[pagination]\n");
    out.push_str("# default = 10                   # items per index page\n");
    out.push_str("patterns = [\n");
    for pattern in PaginationConfig::default().patterns {
        let _ = writeln!(
            out,
            "    [{}, \"{}\", \"{}\"],",
            pattern.min_page, pattern.url, pattern.save_as
        );
    }
    out.push_str("]\n\n");

    out.push_str("[feed]                             # all feeds are off until a path is set\n");
    out.push_str("# all_atom = \"feeds/all.atom.xml\"\n");
    out.push_str("# category_atom = \"feeds/{slug}.atom.xml\"\n");
    out.push_str("# translation_atom = \"feeds/all-{lang}.atom.xml\"\n\n");

    out.push_str("[links]\n");
    out.push_str("blogroll = []                      # [[\"label\", \"https://...\"], ...]\n");
    out.push_str("social = []\n\n");

    out.push_str("[static]\n");
    let paths = StaticConfig::default()
        .paths
        .iter()
        .map(|p| format!("\"{}\"", p.display()))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "paths = [{paths}]");
    out.push('\n');

    out.push_str("[plugins]\n");
    out.push_str("paths = [\"plugins\"]\n");
    out.push_str("enabled = []\n\n");

    let sitemap = SitemapConfig::default();
    out.push_str("[sitemap]\n");
    out.push_str("format = \"xml\"                   # xml | txt\n\n");
    out.push_str("[sitemap.priorities]\n");
    for (kind, priority) in sitemap.priorities.iter() {
        let _ = writeln!(out, "{kind} = {priority:?}");
    }
    out.push_str("\n[sitemap.changefreqs]\n");
    for (kind, freq) in sitemap.changefreqs.iter() {
        let _ = writeln!(out, "{kind} = \"{freq}\"");
    }
    out.push('\n');

    out.push_str("[theme]\n");
    out.push_str("# home_cover = \"images/cover.jpg\"\n\n");

    out.push_str("# [authors.me]\n");
    out.push_str("# name = \"\"\n");
    out.push_str("# bio = \"\"\n");

    out
}

/// Write the starter settings file, returning its path.
pub fn write_config(root: &Path, config_name: &Path) -> Result<PathBuf> {
    let path = root.join(config_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteconf::config::{LoadOptions, SiteConfig};
    use tempfile::TempDir;

    #[test]
    fn test_template_loads_strictly() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("plugins")).unwrap();
        let path = write_config(temp.path(), Path::new("site.toml")).unwrap();

        let config = SiteConfig::load(&path, &LoadOptions { strict: true }).unwrap();
        assert_eq!(config.site.name, "My Site");
        assert_eq!(config.urls, UrlsConfig::default());
        assert_eq!(config.pagination, PaginationConfig::default());
        assert_eq!(config.sitemap, SitemapConfig::default());
        assert_eq!(config.static_files, StaticConfig::default());
    }

    #[test]
    fn test_write_config_in_subdirectory() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), Path::new("conf/site.toml")).unwrap();
        assert_eq!(path, temp.path().join("conf/site.toml"));
        assert!(path.is_file());
    }

    #[test]
    fn test_template_mentions_every_section() {
        let template = generate_config_template();
        for header in ["[site]", "[urls]", "[urls.slug]", "[pagination]", "[feed]", "[links]", "[static]", "[plugins]", "[sitemap]", "[theme]"] {
            assert!(template.contains(header), "{header} missing");
        }
    }
}
