//! Family dispatch and the smaller family rules.
//!
//! This module is the resolver's entry point: it selects the family for
//! an invocation name and executes its rendering rule. Missing optional
//! slots are pre-checked by each rule, so resolution degrades instead of
//! panicking, and unrecognized names always render through the generic
//! fallback so a surrounding extraction pipeline keeps making progress.

use crate::format::{capitalize, italic, strong};
use crate::resolver::etymology::render_etymology;
use crate::resolver::family::TemplateFamily;
use crate::resolver::label::render_label;
use crate::resolver::locale::Locale;
use crate::types::Invocation;

/// Resolve one invocation to its display prose.
///
/// Resolution is a pure, synchronous function of the invocation and the
/// read-only locale collaborators; it never fails.
///
/// # Example
///
/// ```
/// use wikigloss::{Locale, invocation, resolve};
///
/// let locale = Locale::default();
/// assert_eq!(
///     resolve(&invocation!["lb", "en", "Australia", "slang"], &locale),
///     "<i>(Australia, slang)</i>",
/// );
/// assert_eq!(
///     resolve(&invocation!["der", "en", "fro", "-"], &locale),
///     "Old French",
/// );
/// ```
pub fn resolve(invocation: &Invocation, locale: &Locale) -> String {
    let args = invocation.args();
    match TemplateFamily::of_name(invocation.name()) {
        TemplateFamily::AltForm => render_alt_form(args),
        TemplateFamily::Label => render_label(args, locale),
        TemplateFamily::Etymology => render_etymology(invocation.name(), args, locale),
        TemplateFamily::StandardSpelling => render_standard_spelling(args),
        TemplateFamily::Surname => render_surname(args),
        TemplateFamily::Generic => render_generic(invocation.name(), args, locale),
    }
}

/// `alt form` / `alternative form of`: italic heading, bold headword,
/// optional trailing qualifier taken from the last argument.
fn render_alt_form(args: &[String]) -> String {
    let mut rendered = italic("Alternative form of");
    let Some(headword) = args.get(1) else {
        return rendered;
    };
    rendered.push(' ');
    rendered.push_str(&strong(headword));
    if args.len() > 2 {
        let last = &args[args.len() - 1];
        match last.split_once('=') {
            // t= carries a gloss, quoted.
            Some(("t", detail)) => rendered.push_str(&format!(" (“{detail}”)")),
            // nodot= suppresses the trailing qualifier entirely.
            Some(("nodot", _)) => {}
            Some((_, detail)) => rendered.push_str(&format!(" ({detail})")),
            None => rendered.push_str(&format!(" ({last})")),
        }
    }
    rendered
}

/// `standard spelling of`: an optional `from=` dialect label moves the
/// target word one slot to the right.
fn render_standard_spelling(args: &[String]) -> String {
    let (heading, target) = match args.get(1) {
        Some(first) if first.starts_with("from=") => {
            let label = &first["from=".len()..];
            (
                italic(&format!("{label} standard spelling of")),
                args.get(2),
            )
        }
        other => (italic("Standard spelling of"), other),
    };
    match target {
        Some(word) => format!("{heading} {}.", strong(word)),
        None => format!("{heading}."),
    }
}

/// `surname`: article choice keyed off the descriptor's leading vowel.
fn render_surname(args: &[String]) -> String {
    let (Some(first), Some(second)) = (args.get(1), args.get(2)) else {
        return italic("A surname.");
    };
    let article = if first.contains('=') {
        let halves: Vec<&str> = first.split('=').collect();
        if leads_with_vowel(second) {
            halves.get(1).copied().unwrap_or_default()
        } else {
            halves[0]
        }
    } else {
        first.as_str()
    };
    italic(&format!("{article} {second} surname."))
}

/// Fixed vowel-grapheme set; multi-letter sounds ("European") are
/// deliberately not special-cased.
fn leads_with_vowel(word: &str) -> bool {
    word.chars().next().is_some_and(|c| {
        c.to_lowercase()
            .any(|lc| matches!(lc, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
    })
}

/// Last-resort rendering for unrecognized names: capitalized italic name,
/// bold first argument when present.
fn render_generic(name: &str, args: &[String], locale: &Locale) -> String {
    let heading = italic(&capitalize(name, locale.code()));
    match args.get(1) {
        Some(word) => format!("{heading} {}", strong(word)),
        None => heading,
    }
}
