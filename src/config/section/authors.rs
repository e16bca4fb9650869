//! `[authors.<id>]` biography records.
//!
//! Keys are author ids as they appear in content metadata. They are not
//! cross-checked against content.
//!
//! # Example
//!
//! ```toml
//! [authors.diego]
//! name = "Diego Fernando"
//! image = "assets/images/eu-df.jpeg"
//! website = "https://diegofernando.dev"
//! github = "diegofsousa"
//! location = "Brazil"
//! bio = "Software Engineer."
//! ```

use super::theme::check_image;
use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Author id → biography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authors(BTreeMap<String, AuthorBio>);

impl Authors {
    pub const FIELD: FieldPath = FieldPath::new("authors");

    pub fn get(&self, id: &str) -> Option<&AuthorBio> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuthorBio)> {
        self.0.iter().map(|(id, bio)| (id.as_str(), bio))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (id, bio) in &self.0 {
            bio.validate(Self::FIELD.key(id), diag);
        }
    }
}

impl FromIterator<(String, AuthorBio)> for Authors {
    fn from_iter<I: IntoIterator<Item = (String, AuthorBio)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorBio {
    pub name: String,
    /// Header image on the author page.
    pub cover: Option<String>,
    /// Avatar.
    pub image: Option<String>,
    pub website: Option<String>,
    /// Social handles, not URLs.
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub location: Option<String>,
    pub bio: String,
}

impl AuthorBio {
    fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(field.key("name"), "author name must not be empty");
        }
        if self.bio.trim().is_empty() {
            diag.error(field.key("bio"), "author bio must not be empty");
        }
        for (key, image) in [("cover", &self.cover), ("image", &self.image)] {
            if let Some(image) = image {
                check_image(image, field.key(key), diag);
            }
        }
        if let Some(website) = &self.website {
            check_http_url(website, field.key("website"), diag);
        }
        for (key, handle) in [
            ("linkedin", &self.linkedin),
            ("github", &self.github),
            ("twitter", &self.twitter),
        ] {
            if let Some(handle) = handle
                && (handle.is_empty() || handle.contains(['/', ' ']))
            {
                diag.error_with_hint(
                    field.key(key),
                    format!("'{handle}' is not a {key} handle"),
                    "use the account name only, e.g.: \"diegofsousa\"",
                );
            }
        }
    }
}
