//! Integration tests for the label family and the conjunction joiner.

use wikigloss::{Locale, invocation, resolve};

// =============================================================================
// Single Qualifier
// =============================================================================

#[test]
fn single_qualifier() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lb", "en", "Australia"], &locale),
        "<i>(Australia)</i>"
    );
}

#[test]
fn lbl_alias() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lbl", "en", "transitive"], &locale),
        "<i>(transitive)</i>"
    );
}

#[test]
fn single_qualifier_bypasses_alias_table() {
    // A bare qualifier renders verbatim; only joined runs go through the
    // alias table.
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lb", "en", "American"], &locale),
        "<i>(American)</i>"
    );
}

// =============================================================================
// Joined Runs
// =============================================================================

#[test]
fn comma_join() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["label", "en", "Australia", "slang"], &locale),
        "<i>(Australia, slang)</i>"
    );
}

#[test]
fn or_connector() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lb", "en", "Australia", "or", "foobar"], &locale),
        "<i>(Australia or foobar)</i>"
    );
}

#[test]
fn mixed_connectors() {
    let locale = Locale::default();
    assert_eq!(
        resolve(
            &invocation!["lb", "en", "foobar", "and", "Australia", "or", "foobar"],
            &locale
        ),
        "<i>(foobar and Australia or foobar)</i>"
    );
}

#[test]
fn tight_compound_connector() {
    let locale = Locale::default();
    assert_eq!(
        resolve(
            &invocation!["lb", "en", "foobar", "_", "Australia", "foobar"],
            &locale
        ),
        "<i>(foobar Australia, foobar)</i>"
    );
}

#[test]
fn plain_run_joins_with_commas() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lb", "en", "archaic", "poetic", "rare"], &locale),
        "<i>(archaic, poetic, rare)</i>"
    );
}

#[test]
fn joined_run_resolves_aliases() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lb", "en", "American", "slang"], &locale),
        "<i>(US, slang)</i>"
    );
}

// =============================================================================
// Skipped Tokens and Trailing Cleanup
// =============================================================================

#[test]
fn nocat_and_sort_markers_are_skipped() {
    let locale = Locale::default();
    assert_eq!(
        resolve(
            &invocation!["lb", "en", "Australia", "nocat=1", "slang"],
            &locale
        ),
        "<i>(Australia, slang)</i>"
    );
    assert_eq!(
        resolve(&invocation!["lb", "en", "slang", "sort=foo"], &locale),
        "<i>(slang)</i>"
    );
}

#[test]
fn trailing_connector_leaves_no_separator() {
    let locale = Locale::default();
    assert_eq!(
        resolve(&invocation!["lb", "en", "Australia", "or"], &locale),
        "<i>(Australia or)</i>"
    );
}

#[test]
fn no_trailing_comma_or_space() {
    let locale = Locale::default();
    for args in [
        invocation!["lb", "en", "a", "b"],
        invocation!["lb", "en", "a", "b", "c"],
        invocation!["lb", "en", "a", "_"],
        invocation!["lb", "en", "a", "and"],
    ] {
        let rendered = resolve(&args, &locale);
        assert!(
            !rendered.contains(", )") && !rendered.contains(" )"),
            "dangling separator in {rendered}"
        );
    }
}
