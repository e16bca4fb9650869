//! Slug derivation for the `{slug}` placeholder.

use crate::config::section::{SlugCase, SlugConfig, SlugMode};
use deunicode::deunicode;

/// Characters unsafe in a path segment or URL.
const UNSAFE: &[char] = &[
    '/', '\\', '?', '#', '%', '<', '>', ':', '"', '|', '*', '&', '=', '\'', '`', '[', ']', '{',
    '}',
];

/// Turn free text (usually a title) into a slug according to `config`.
///
/// # Examples
/// ```ignore
/// slugify("Olá Mundo", &SlugConfig::default())  // "olá-mundo"
/// ```
pub fn slugify(text: &str, config: &SlugConfig) -> String {
    let sep = config.separator.as_char();

    let text = match config.mode {
        SlugMode::No => return text.trim().to_string(),
        SlugMode::Full | SlugMode::Ascii => deunicode(text),
        SlugMode::Safe => text.to_string(),
    };

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let keep = match config.mode {
            SlugMode::Full => c.is_ascii_alphanumeric(),
            SlugMode::Ascii => c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'),
            _ => !c.is_whitespace() && !c.is_control() && !UNSAFE.contains(&c) && c != ',',
        };
        if keep {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with(sep) {
            out.push(sep);
        }
    }
    let out = out.trim_end_matches(sep);

    apply_case(out, config.case, sep)
}

fn apply_case(slug: &str, case: SlugCase, sep: char) -> String {
    match case {
        SlugCase::Lower => slug.to_lowercase(),
        SlugCase::Upper => slug.to_uppercase(),
        SlugCase::Preserve => slug.to_string(),
        SlugCase::Capitalize => slug
            .split(sep)
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(&sep.to_string()),
    }
}
