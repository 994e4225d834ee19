//! Integration tests for argument classification and cursor consumption.

use wikigloss::ClassifiedArgs;

// =============================================================================
// Classification
// =============================================================================

#[test]
fn splits_keyed_from_positional() {
    let args = ClassifiedArgs::classify(["en", "word", "t=gloss"]);
    assert_eq!(args.positional(), &["en", "word"]);
    assert_eq!(args.keyed("t"), Some("gloss"));
    assert!(args.has_key("t"));
    assert!(!args.has_key("gloss"));
}

#[test]
fn splits_at_first_equals_only() {
    let args = ClassifiedArgs::classify(["t=a=b"]);
    assert_eq!(args.keyed("t"), Some("a=b"));
}

#[test]
fn later_duplicate_key_overwrites() {
    let args = ClassifiedArgs::classify(["t=first", "t=second"]);
    assert_eq!(args.keyed("t"), Some("second"));
}

#[test]
fn positional_order_preserved() {
    let args = ClassifiedArgs::classify(["c", "sort=x", "a", "nocat=1", "b"]);
    assert_eq!(args.positional(), &["c", "a", "b"]);
}

#[test]
fn empty_tokens_stay_positional() {
    let args = ClassifiedArgs::classify(["a", "", "b"]);
    assert_eq!(args.positional(), &["a", "", "b"]);
}

#[test]
fn empty_value_is_kept() {
    let args = ClassifiedArgs::classify(["nodot="]);
    assert_eq!(args.keyed("nodot"), Some(""));
    assert!(args.positional().is_empty());
}

#[test]
fn classification_is_stateless() {
    let first = ClassifiedArgs::classify(["a", "t=x"]);
    let second = ClassifiedArgs::classify(["a", "t=x"]);
    assert_eq!(first, second);
}

// =============================================================================
// Cursor Consumption
// =============================================================================

#[test]
fn cursor_advances_monotonically() {
    let args = ClassifiedArgs::classify(["a", "b", "c"]);
    let mut cursor = args.cursor();

    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.remaining(), 3);

    let mut last_index = 0;
    while cursor.next().is_some() {
        assert!(cursor.index() > last_index);
        last_index = cursor.index();
    }
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn cursor_never_rereads() {
    let args = ClassifiedArgs::classify(["a", "b"]);
    let mut cursor = args.cursor();
    assert_eq!(cursor.next(), Some("a"));
    assert_eq!(cursor.next(), Some("b"));
    assert_eq!(cursor.next(), None);
    // Exhausted cursors stay exhausted.
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.index(), 2);
}
