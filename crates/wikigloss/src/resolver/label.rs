//! Label family: comma/and/or-joined qualifier phrases.

use crate::format::term;
use crate::resolver::locale::Locale;

/// Render a `lb`/`lbl`/`label` invocation.
///
/// The first argument is a locale code and is never displayed. A single
/// remaining qualifier renders bare; longer runs go through the
/// conjunction joiner.
pub(crate) fn render_label(args: &[String], locale: &Locale) -> String {
    if args.len() == 2 {
        return term(&args[1]);
    }
    let words = args.get(1..).unwrap_or_default();
    term(&join_qualifiers(words, locale))
}

/// Pairwise scan with a one-ahead lookahead.
///
/// Connector tokens (`_`, `and`, `or`) and `nocat=`/`sort=` markers
/// contribute nothing as the current word; everything else is resolved
/// through the qualifier alias table. The separator after each qualifier
/// is decided by the next raw token, matched explicitly so absence and
/// emptiness stay distinct cases.
fn join_qualifiers(words: &[String], locale: &Locale) -> String {
    let mut joined = String::new();
    for (i, word) in words.iter().enumerate() {
        if is_connector(word) || word.starts_with("nocat=") || word.starts_with("sort=") {
            continue;
        }
        joined.push_str(locale.qualifier_alias(word));
        match words.get(i + 1).map(String::as_str) {
            Some("_") => joined.push(' '),
            Some("and") => joined.push_str(" and "),
            Some("or") => joined.push_str(" or "),
            Some(next) if !next.is_empty() => joined.push_str(", "),
            Some(_) | None => {}
        }
    }
    joined.trim_end_matches([',', ' ']).to_string()
}

fn is_connector(word: &str) -> bool {
    matches!(word, "_" | "and" | "or")
}
