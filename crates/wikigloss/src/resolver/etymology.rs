//! Etymology family: cross-language derivation, borrowing, cognate,
//! inheritance, and mention annotations.
//!
//! These templates share surface syntax but disagree about which leading
//! slots are displayed, which is why classification happens after the
//! variant-specific slots are dropped.

use crate::format::{italic, strong};
use crate::resolver::args::ClassifiedArgs;
use crate::resolver::locale::Locale;

/// Render a `bor`/`cog`/`der`/`etyl`/`inh`/`m` invocation.
pub(crate) fn render_etymology(name: &str, args: &[String], locale: &Locale) -> String {
    let classified = classify_etymology_args(name, args);
    let mut cursor = classified.cursor();

    let language = cursor
        .next()
        .and_then(|code| locale.language_name(code))
        .unwrap_or("");

    // A mention shows only the word, never the language name.
    let mut phrase = if name == "m" {
        String::new()
    } else {
        language.to_string()
    };

    let Some(headword) = cursor.next() else {
        return phrase;
    };
    if headword == "-" {
        // Explicit "no word given" sentinel, e.g. an untranslated etymon.
        return phrase;
    }

    let mut headword = classified.keyed("alt").unwrap_or(headword);
    let mut gloss = classified
        .keyed("t")
        .or_else(|| classified.keyed("gloss"))
        .unwrap_or("");

    // Legacy fourth slot overrides the headword when non-empty.
    if let Some(override_word) = cursor.next()
        && !override_word.is_empty()
    {
        headword = override_word;
    }

    if name == "m" {
        if classified.has_key("t") {
            phrase.push_str(&italic(headword));
        } else {
            phrase.push_str(&strong(headword));
        }
    } else {
        phrase.push(' ');
        phrase.push_str(&italic(headword));
    }

    // Legacy fifth slot replaces the gloss, even when empty.
    if let Some(override_gloss) = cursor.next() {
        gloss = override_gloss;
    }
    if !gloss.is_empty() {
        phrase.push_str(&format!(" (“{gloss}”)"));
    }

    phrase
}

/// Drop the slots this variant never displays, then classify the rest.
///
/// All names except `cog`, `etyl`, and `m` open with a destination
/// language code; `etyl` additionally carries a legacy redundant second
/// slot.
fn classify_etymology_args(name: &str, args: &[String]) -> ClassifiedArgs {
    let mut tokens: Vec<&str> = args.iter().map(String::as_str).collect();
    if !matches!(name, "cog" | "etyl" | "m") && !tokens.is_empty() {
        tokens.remove(0);
    }
    if name == "etyl" && tokens.len() > 1 {
        tokens.remove(1);
    }
    ClassifiedArgs::classify(tokens)
}

/// The source-language slot of an etymology invocation, if present.
///
/// Shared with the lint pass so it flags the same slot the renderer
/// resolves.
pub(crate) fn source_language_code(name: &str, args: &[String]) -> Option<String> {
    classify_etymology_args(name, args)
        .positional()
        .first()
        .cloned()
}
