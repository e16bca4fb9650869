//! Typed, immutable settings for a static site build.
//!
//! ```no_run
//! use siteconf::{LoadOptions, SiteConfig};
//! use std::path::Path;
//!
//! let config = SiteConfig::load(Path::new("site.toml"), &LoadOptions::default())?;
//! for plugin in config.resolved_plugins() {
//!     println!("{}", plugin.name);
//! }
//! # Ok::<(), siteconf::ConfigError>(())
//! ```

pub mod config;
pub mod logger;
pub mod template;
pub mod utils;

pub use config::{ConfigError, LoadOptions, SiteConfig};
pub use template::{PathTemplate, PlaceholderValues, TemplateError, TemplateScope};
pub use utils::slug::slugify;
