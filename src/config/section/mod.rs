//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module       | TOML Section      | Purpose                                  |
//! |--------------|-------------------|------------------------------------------|
//! | `site`       | `[site]`          | Identity, content path, date defaults    |
//! | `urls`       | `[urls]`          | Output path templates, slug settings     |
//! | `pagination` | `[pagination]`    | Page size and pagination patterns        |
//! | `feed`       | `[feed]`          | Feed output templates                    |
//! | `links`      | `[links]`         | Blogroll and social links                |
//! | `assets`     | `[static]`        | Static paths and per-file metadata       |
//! | `plugins`    | `[plugins]`       | Plugin names and search paths            |
//! | `sitemap`    | `[sitemap]`       | Sitemap priorities and change frequency  |
//! | `theme`      | `[theme]`         | Cover images                             |
//! | `authors`    | `[authors.<id>]`  | Author biographies                       |

mod assets;
mod authors;
mod feed;
mod links;
mod pagination;
mod plugins;
mod site;
mod sitemap;
mod theme;
mod urls;

pub use assets::{PathMetadata, StaticConfig};
pub use authors::{AuthorBio, Authors};
pub use feed::FeedConfig;
pub use links::{Link, LinksConfig};
pub use pagination::{PaginationConfig, PaginationPattern};
pub use plugins::{PluginsConfig, ResolvedPlugin};
pub use site::{DefaultDate, SiteInfoConfig};
pub use sitemap::{ChangeFreq, PerContent, SitemapConfig, SitemapFormat};
pub use theme::ThemeConfig;
pub use urls::{SlugCase, SlugConfig, SlugMode, SlugSeparator, UrlsConfig};
