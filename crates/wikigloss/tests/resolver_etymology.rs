//! Integration tests for the etymology family
//! (`bor`/`cog`/`der`/`etyl`/`inh`/`m`).

use wikigloss::{Locale, invocation, resolve};

// =============================================================================
// Language-Name-Only Forms
// =============================================================================

#[test]
fn sentinel_headword_yields_language_only() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["der", "en", "fro", "-"], &locale),
        "Old French"
    );
}

#[test]
fn sentinel_wins_over_keyed_arguments() {
    // A `-` headword always yields the language-name-only phrase,
    // whatever keys were supplied.
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["der", "en", "fro", "-", "t=word"], &locale),
        "Old French"
    );
}

#[test]
fn missing_headword_yields_language_only() {
    let locale = Locale::default();
    assert_eq!(resolve(&invocation!["cog", "fro"], &locale), "Old French");
}

#[test]
fn etyl_drops_redundant_second_slot() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["etyl", "enm", "en"], &locale),
        "Middle English"
    );
}

// =============================================================================
// Headword Rendering
// =============================================================================

#[test]
fn inherited_word() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["inh", "en", "enm", "water"], &locale),
        "Middle English <i>water</i>"
    );
}

#[test]
fn borrowed_word() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["bor", "en", "fr", "café"], &locale),
        "French <i>café</i>"
    );
}

#[test]
fn cognate_keeps_first_slot_as_source() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["cog", "de", "Wasser"], &locale),
        "German <i>Wasser</i>"
    );
}

#[test]
fn fourth_slot_overrides_headword() {
    let locale = Locale::default();
    assert_eq!(
        resolve(
            &invocation!["inh", "en", "ine-pro", "*werdʰh₁om", "*wr̥dʰh₁om"],
            &locale
        ),
        "Proto-Indo-European <i>*wr̥dʰh₁om</i>"
    );
}

#[test]
fn empty_fourth_slot_keeps_headword() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["inh", "en", "ang", "wæter", "", "water"], &locale),
        "Old English <i>wæter</i> (“water”)"
    );
}

#[test]
fn alt_key_overrides_headword() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["der", "en", "la", "aqua", "alt=aquam"], &locale),
        "Latin <i>aquam</i>"
    );
}

// =============================================================================
// Gloss Handling
// =============================================================================

#[test]
fn t_key_supplies_gloss() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["inh", "en", "ang", "etan", "t=to eat"], &locale),
        "Old English <i>etan</i> (“to eat”)"
    );
}

#[test]
fn gloss_key_supplies_gloss() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["der", "en", "la", "aqua", "gloss=water"], &locale),
        "Latin <i>aqua</i> (“water”)"
    );
}

#[test]
fn fifth_slot_overrides_keyed_gloss() {
    let locale = Locale::default();
    assert_eq!(
        resolve(
            &invocation!["inh", "en", "ang", "etan", "t=to eat", "x", "to gnaw"],
            &locale
        ),
        "Old English <i>x</i> (“to gnaw”)"
    );
}

#[test]
fn empty_fifth_slot_clears_keyed_gloss() {
    let locale = Locale::default();
    assert_eq!(
        resolve(
            &invocation!["inh", "en", "ang", "etan", "t=to eat", "x", ""],
            &locale
        ),
        "Old English <i>x</i>"
    );
}

// =============================================================================
// Mentions
// =============================================================================

#[test]
fn mention_shows_only_the_word() {
    let locale = Locale::default();
    assert_eq!(resolve(&invocation!["m", "en", "more"], &locale), "<b>more</b>");
}

#[test]
fn mention_with_gloss_italicizes() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["m", "ine-pro", "*h₁ed-", "t=to eat"], &locale),
        "<i>*h₁ed-</i> (“to eat”)"
    );
}

#[test]
fn mention_alt_key() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["m", "la", "aqua", "alt=aquam"], &locale),
        "<b>aquam</b>"
    );
}

// =============================================================================
// Unresolved Language Codes
// =============================================================================

#[test]
fn unresolved_code_renders_empty_language() {
    // The renderer degrades silently; the lint pass is where bad codes
    // get flagged.
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["der", "en", "qqq", "word"], &locale),
        " <i>word</i>"
    );
}
