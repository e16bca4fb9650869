//! Output path templates.
//!
//! A template is literal text mixed with `{placeholder}` tokens, e.g.
//! `pages/{slug}/index.html` or `{date:%Y}/{date:%m}/index.html`.
//! `{{` and `}}` stand for literal braces.
//!
//! Templates are parsed when the settings file is deserialized. Parse errors
//! are kept inside the template and surfaced by config validation, so every
//! broken template in a file is reported at once instead of stopping at the
//! first one.

mod placeholder;

pub use placeholder::{Placeholder, PlaceholderValues, TemplateScope};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use thiserror::Error;

/// Errors produced while parsing, checking or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed `{{` at byte {0}")]
    Unclosed(usize),

    #[error("unmatched `}}` at byte {0}")]
    UnmatchedClose(usize),

    #[error("empty placeholder at byte {0}")]
    Empty(usize),

    #[error("unknown placeholder `{{{0}}}`")]
    Unknown(String),

    #[error("placeholder {0} does not take a format")]
    UnexpectedFormat(Placeholder),

    #[error("placeholder {0} needs a format, e.g. `{{date:%Y}}`")]
    MissingFormat(Placeholder),

    #[error("invalid date format `{0}`")]
    InvalidDateFormat(String),

    #[error("placeholder {placeholder} is not available in {scope} paths")]
    OutOfScope {
        placeholder: Placeholder,
        scope: TemplateScope,
    },

    #[error("path must be relative, found leading `/`")]
    Absolute,

    #[error("path must not contain `..` segments")]
    ParentSegment,

    #[error("no value for placeholder {0}")]
    MissingValue(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token {
        placeholder: Placeholder,
        format: Option<String>,
    },
}

/// A parsed output path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PathTemplate {
    source: String,
    parsed: Result<Vec<Segment>, TemplateError>,
}

impl PathTemplate {
    /// Parse `source` and check it against `scope`.
    pub fn parse(source: &str, scope: TemplateScope) -> Result<Self, TemplateError> {
        let template = Self::from(source.to_string());
        template.check(scope)?;
        Ok(template)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Syntax error found at parse time, if any.
    pub fn error(&self) -> Option<&TemplateError> {
        self.parsed.as_ref().err()
    }

    /// Full check: syntax, placeholder scope, relative path shape.
    pub fn check(&self, scope: TemplateScope) -> Result<(), TemplateError> {
        let segments = self.parsed.as_ref().map_err(Clone::clone)?;
        for segment in segments {
            if let Segment::Token { placeholder, .. } = segment
                && !scope.allows(*placeholder)
            {
                return Err(TemplateError::OutOfScope {
                    placeholder: *placeholder,
                    scope,
                });
            }
        }
        check_relative(&self.source)
    }

    /// Placeholders referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let Ok(segments) = &self.parsed else {
            return Vec::new();
        };
        let mut out: Vec<Placeholder> = Vec::new();
        for segment in segments {
            if let Segment::Token { placeholder, .. } = segment
                && !out.contains(placeholder)
            {
                out.push(*placeholder);
            }
        }
        out
    }

    /// Substitute `values` into the template.
    pub fn render(&self, values: &PlaceholderValues) -> Result<String, TemplateError> {
        let segments = self.parsed.as_ref().map_err(Clone::clone)?;
        let mut out = String::with_capacity(self.source.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token {
                    placeholder: Placeholder::Date,
                    format,
                } => {
                    let date = values
                        .date
                        .ok_or(TemplateError::MissingValue(Placeholder::Date))?;
                    let format = format.as_deref().unwrap_or_default();
                    write!(out, "{}", date.format(format))
                        .map_err(|_| TemplateError::InvalidDateFormat(format.to_string()))?;
                }
                Segment::Token { placeholder, .. } => {
                    let value = values
                        .text(*placeholder)
                        .ok_or(TemplateError::MissingValue(*placeholder))?;
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}

impl From<String> for PathTemplate {
    fn from(source: String) -> Self {
        let parsed = parse_segments(&source);
        Self { source, parsed }
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.source
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segments(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(TemplateError::UnmatchedClose(pos)),
            '{' => {
                let start = pos + 1;
                let end = source[start..]
                    .find('}')
                    .map(|i| start + i)
                    .ok_or(TemplateError::Unclosed(pos))?;
                let body = &source[start..end];
                if body.contains('{') {
                    return Err(TemplateError::Unclosed(pos));
                }
                while chars.next_if(|&(i, _)| i <= end).is_some() {}

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(parse_token(body, pos)?);
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_token(body: &str, pos: usize) -> Result<Segment, TemplateError> {
    let (name, format) = match body.split_once(':') {
        Some((name, format)) => (name, Some(format)),
        None => (body, None),
    };
    if name.is_empty() {
        return Err(TemplateError::Empty(pos));
    }
    let placeholder =
        Placeholder::from_name(name).ok_or_else(|| TemplateError::Unknown(name.to_string()))?;

    match (placeholder.takes_format(), format) {
        (false, Some(_)) => Err(TemplateError::UnexpectedFormat(placeholder)),
        (true, None) | (true, Some("")) => Err(TemplateError::MissingFormat(placeholder)),
        (true, Some(format)) => {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(TemplateError::InvalidDateFormat(format.to_string()));
            }
            Ok(Segment::Token {
                placeholder,
                format: Some(format.to_string()),
            })
        }
        (false, None) => Ok(Segment::Token {
            placeholder,
            format: None,
        }),
    }
}

fn check_relative(source: &str) -> Result<(), TemplateError> {
    if source.starts_with('/') {
        return Err(TemplateError::Absolute);
    }
    if source.split('/').any(|segment| segment == "..") {
        return Err(TemplateError::ParentSegment);
    }
    Ok(())
}

/// True if `path` is a relative output path with no leftover braces.
pub fn is_valid_output_path(path: &str) -> bool {
    !path.is_empty()
        && !path.contains(['{', '}'])
        && check_relative(path).is_ok()
        && !path.split('/').any(|segment| segment == ".")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        PathTemplate::parse(source, TemplateScope::Any)
            .unwrap()
            .render(&PlaceholderValues::sample())
            .unwrap()
    }

    #[test]
    fn test_render_slug_templates() {
        assert_eq!(render("{slug}.html"), "hello-world.html");
        assert_eq!(render("pages/{slug}/index.html"), "pages/hello-world/index.html");
        assert_eq!(render("tags.html"), "tags.html");
    }

    #[test]
    fn test_render_date_formats() {
        assert_eq!(render("{date:%Y}/index.html"), "2020/index.html");
        assert_eq!(render("{date:%Y}/{date:%m}/index.html"), "2020/09/index.html");
        assert_eq!(render("{date:%Y-%m-%d}-{slug}"), "2020-09-24-hello-world");
    }

    #[test]
    fn test_render_pagination() {
        let template =
            PathTemplate::parse("{base_name}/page/{number}/", TemplateScope::Pagination).unwrap();
        let values = PlaceholderValues::new()
            .with_base_name("tag/rust")
            .with_number(3);
        assert_eq!(template.render(&values).unwrap(), "tag/rust/page/3/");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(render("{{raw}}/{slug}"), "{raw}/hello-world");
    }

    #[test]
    fn test_placeholders_in_order() {
        let template =
            PathTemplate::parse("{date:%Y}/{slug}/{date:%m}", TemplateScope::Article).unwrap();
        assert_eq!(
            template.placeholders(),
            vec![Placeholder::Date, Placeholder::Slug]
        );
    }

    #[test]
    fn test_syntax_errors() {
        let err = |s: &str| PathTemplate::parse(s, TemplateScope::Any).unwrap_err();
        assert_eq!(err("{slug"), TemplateError::Unclosed(0));
        assert_eq!(err("a}b"), TemplateError::UnmatchedClose(1));
        assert_eq!(err("x/{}"), TemplateError::Empty(2));
        assert_eq!(err("{sl{ug}"), TemplateError::Unclosed(0));
        assert_eq!(err("{title}.html"), TemplateError::Unknown("title".into()));
        assert_eq!(
            err("{slug:%Y}"),
            TemplateError::UnexpectedFormat(Placeholder::Slug)
        );
        assert_eq!(err("{date}"), TemplateError::MissingFormat(Placeholder::Date));
        assert_eq!(err("{date:}"), TemplateError::MissingFormat(Placeholder::Date));
        assert_eq!(
            err("{date:%Y%}"),
            TemplateError::InvalidDateFormat("%Y%".into())
        );
    }

    #[test]
    fn test_scope_and_shape_errors() {
        assert_eq!(
            PathTemplate::parse("{date:%Y}/{slug}", TemplateScope::Page).unwrap_err(),
            TemplateError::OutOfScope {
                placeholder: Placeholder::Date,
                scope: TemplateScope::Page
            }
        );
        assert_eq!(
            PathTemplate::parse("/{slug}.html", TemplateScope::Page).unwrap_err(),
            TemplateError::Absolute
        );
        assert_eq!(
            PathTemplate::parse("../{slug}.html", TemplateScope::Page).unwrap_err(),
            TemplateError::ParentSegment
        );
    }

    #[test]
    fn test_broken_template_still_deserializes() {
        let template = PathTemplate::from("{title}".to_string());
        assert_eq!(template.as_str(), "{title}");
        assert!(template.error().is_some());
        assert!(template.placeholders().is_empty());
        assert!(template.render(&PlaceholderValues::sample()).is_err());
    }

    #[test]
    fn test_missing_value() {
        let template = PathTemplate::parse("{slug}.html", TemplateScope::Page).unwrap();
        assert_eq!(
            template.render(&PlaceholderValues::new()).unwrap_err(),
            TemplateError::MissingValue(Placeholder::Slug)
        );
    }

    #[test]
    fn test_unicode_literals() {
        assert_eq!(render("artigos/ação/{slug}"), "artigos/ação/hello-world");
    }

    #[test]
    fn test_is_valid_output_path() {
        assert!(is_valid_output_path("pages/hello/index.html"));
        assert!(is_valid_output_path("category/general/"));
        assert!(!is_valid_output_path(""));
        assert!(!is_valid_output_path("/abs.html"));
        assert!(!is_valid_output_path("a/../b"));
        assert!(!is_valid_output_path("{slug}.html"));
    }
}
