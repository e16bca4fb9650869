//! Placeholder vocabulary, per-field scopes and substitution values.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A `{name}` token that a path template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Slug,
    Lang,
    Date,
    Category,
    Author,
    Tag,
    Name,
    BaseName,
    Number,
}

impl Placeholder {
    pub const ALL: [Self; 9] = [
        Self::Slug,
        Self::Lang,
        Self::Date,
        Self::Category,
        Self::Author,
        Self::Tag,
        Self::Name,
        Self::BaseName,
        Self::Number,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Lang => "lang",
            Self::Date => "date",
            Self::Category => "category",
            Self::Author => "author",
            Self::Tag => "tag",
            Self::Name => "name",
            Self::BaseName => "base_name",
            Self::Number => "number",
        }
    }

    /// Only `date` carries a strftime format (`{date:%Y}`).
    pub const fn takes_format(&self) -> bool {
        matches!(self, Self::Date)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Which kind of output a template describes, restricting its placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateScope {
    /// Accept every known placeholder (syntax check only).
    Any,
    Article,
    Page,
    /// Category, tag and author index pages.
    Taxonomy,
    /// Fixed listing pages (`tags.html`, `authors.html`).
    Listing,
    /// Year/month archives.
    Archive,
    Pagination,
    /// Site-wide feeds.
    Feed,
    /// Per-category or per-author feeds.
    TaxonomyFeed,
    /// Per-language feeds.
    TranslationFeed,
}

impl TemplateScope {
    pub const fn allowed(&self) -> &'static [Placeholder] {
        use Placeholder::*;
        match self {
            Self::Any => &Placeholder::ALL,
            Self::Article => &[Slug, Lang, Date, Category, Author],
            Self::Page => &[Slug, Lang],
            Self::Taxonomy => &[Slug, Name],
            Self::Listing | Self::Feed => &[],
            Self::Archive => &[Date],
            Self::Pagination => &[BaseName, Number],
            Self::TaxonomyFeed => &[Slug],
            Self::TranslationFeed => &[Lang],
        }
    }

    pub fn allows(&self, placeholder: Placeholder) -> bool {
        self.allowed().contains(&placeholder)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Article => "article",
            Self::Page => "page",
            Self::Taxonomy => "category/tag/author",
            Self::Listing => "listing",
            Self::Archive => "archive",
            Self::Pagination => "pagination",
            Self::Feed => "feed",
            Self::TaxonomyFeed => "category/author feed",
            Self::TranslationFeed => "translation feed",
        }
    }

    /// Human-readable list of allowed placeholders, for hints.
    pub fn allowed_list(&self) -> String {
        let allowed = self.allowed();
        if allowed.is_empty() {
            return "no placeholders".into();
        }
        allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TemplateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values substituted for placeholders when rendering a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderValues {
    pub slug: Option<String>,
    pub lang: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub name: Option<String>,
    pub base_name: Option<String>,
    pub number: Option<u32>,
}

impl PlaceholderValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// A value for every placeholder, used to exercise templates.
    pub fn sample() -> Self {
        let date = NaiveDate::from_ymd_opt(2020, 9, 24)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap_or_default();
        Self {
            slug: Some("hello-world".into()),
            lang: Some("en".into()),
            date: Some(date),
            category: Some("general".into()),
            author: Some("diego".into()),
            tag: Some("cupcake".into()),
            name: Some("General".into()),
            base_name: Some("category/general".into()),
            number: Some(2),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// Text value of a non-date placeholder.
    pub(super) fn text(&self, placeholder: Placeholder) -> Option<String> {
        match placeholder {
            Placeholder::Slug => self.slug.clone(),
            Placeholder::Lang => self.lang.clone(),
            Placeholder::Category => self.category.clone(),
            Placeholder::Author => self.author.clone(),
            Placeholder::Tag => self.tag.clone(),
            Placeholder::Name => self.name.clone(),
            Placeholder::BaseName => self.base_name.clone(),
            Placeholder::Number => self.number.map(|n| n.to_string()),
            Placeholder::Date => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrips_vocabulary() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_name(placeholder.name()), Some(placeholder));
        }
        assert_eq!(Placeholder::from_name("title"), None);
        assert_eq!(Placeholder::from_name("Slug"), None);
    }

    #[test]
    fn test_scopes() {
        assert!(TemplateScope::Article.allows(Placeholder::Date));
        assert!(!TemplateScope::Page.allows(Placeholder::Date));
        assert!(TemplateScope::Pagination.allows(Placeholder::Number));
        assert!(!TemplateScope::Pagination.allows(Placeholder::Slug));
        assert_eq!(TemplateScope::Listing.allowed_list(), "no placeholders");
        assert_eq!(TemplateScope::Archive.allowed_list(), "{date}");
    }

    #[test]
    fn test_sample_covers_every_placeholder() {
        let sample = PlaceholderValues::sample();
        assert!(sample.date.is_some());
        for placeholder in Placeholder::ALL {
            if placeholder != Placeholder::Date {
                assert!(sample.text(placeholder).is_some(), "{placeholder} missing");
            }
        }
    }
}
