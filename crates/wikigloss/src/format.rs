//! Text-decoration combinators consumed by the resolver.
//!
//! Each combinator is a pure function from text to text; identical input
//! always yields identical decorated output. The resolver composes its
//! results exclusively through these functions and never emits raw markup
//! syntax itself.

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;
use unicode_segmentation::UnicodeSegmentation;

/// Wrap text in italics.
///
/// ```
/// assert_eq!(wikigloss::format::italic("slang"), "<i>slang</i>");
/// ```
pub fn italic(text: &str) -> String {
    format!("<i>{text}</i>")
}

/// Wrap text in strong emphasis.
///
/// ```
/// assert_eq!(wikigloss::format::strong("theen"), "<b>theen</b>");
/// ```
pub fn strong(text: &str) -> String {
    format!("<b>{text}</b>")
}

/// Wrap text in small print.
pub fn small(text: &str) -> String {
    format!("<small>{text}</small>")
}

/// Wrap text in parentheses.
pub fn parenthesis(text: &str) -> String {
    format!("({text})")
}

/// Wrap a qualifier phrase in italicized parentheses.
///
/// ```
/// assert_eq!(wikigloss::format::term("Australia, slang"), "<i>(Australia, slang)</i>");
/// ```
pub fn term(text: &str) -> String {
    italic(&parenthesis(text))
}

/// Uppercase the first grapheme of `text`, leaving the remainder
/// untouched.
///
/// Case mapping is locale-sensitive: combining characters stay attached
/// to their base, and languages with special casing rules (e.g. the
/// Turkish dotted I) follow their own conventions.
///
/// ```
/// assert_eq!(wikigloss::format::capitalize("given name", "en"), "Given name");
/// assert_eq!(wikigloss::format::capitalize("istanbul", "tr"), "İstanbul");
/// assert_eq!(wikigloss::format::capitalize("", "en"), "");
/// ```
pub fn capitalize(text: &str, lang: &str) -> String {
    let mut graphemes = text.graphemes(true);
    let Some(first) = graphemes.next() else {
        return String::new();
    };
    let mapper = CaseMapper::new();
    let mut capitalized = match lang.parse::<LanguageIdentifier>() {
        Ok(langid) => mapper.uppercase_to_string(first, &langid).into_owned(),
        Err(_) => first.to_uppercase(),
    };
    capitalized.push_str(graphemes.as_str());
    capitalized
}
