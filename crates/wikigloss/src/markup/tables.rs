//! Locale table file parser using winnow.
//!
//! Table files carry `key = "value";` entries, one per line by
//! convention, with `//` comments and blank lines in between:
//!
//! ```text
//! // Language names
//! fro = "Old French";
//! enm = "Middle English";
//! ```
//!
//! Keys are trimmed; values are double-quoted and carry no escape
//! sequences, so a value cannot contain `"`.

use winnow::combinator::{alt, delimited, repeat, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

use super::calculate_position;
use super::error::ParseError;

/// Parse a locale table file into ordered `(key, value)` pairs.
///
/// Later entries for the same key are kept in order; collapsing
/// duplicates is the loader's concern.
pub fn parse_table_file(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut remaining = input;
    match table_file(&mut remaining) {
        Ok(entries) => {
            if remaining.is_empty() {
                Ok(entries)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "expected `key = \"value\";` entry, found '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {e}"),
                })
            }
        }
    }
}

/// Parse the whole file: entries interleaved with whitespace and comments.
fn table_file(input: &mut &str) -> ModalResult<Vec<(String, String)>> {
    blanks(input)?;
    repeat(0.., terminated(entry, blanks)).parse_next(input)
}

/// Consume any run of whitespace and `//` comments.
fn blanks(input: &mut &str) -> ModalResult<()> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            take_while(1.., |c: char| c.is_whitespace()).void(),
            comment,
        )),
    )
    .parse_next(input)
}

/// A `//` comment running to end of line.
fn comment(input: &mut &str) -> ModalResult<()> {
    let _ = "//".parse_next(input)?;
    let _ = take_while(0.., |c| c != '\n').parse_next(input)?;
    Ok(())
}

/// One `key = "value";` entry.
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let key = take_while(1.., |c| !matches!(c, '=' | '"' | ';' | '\n' | '/')).parse_next(input)?;
    let _ = '='.parse_next(input)?;
    spaces(input)?;
    let value = quoted_string(input)?;
    spaces(input)?;
    let _ = ';'.parse_next(input)?;
    Ok((key.trim().to_string(), value))
}

/// Horizontal whitespace within an entry.
fn spaces(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

/// A double-quoted value without escape sequences.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited('"', take_while(0.., |c| c != '"'), '"')
        .map(ToString::to_string)
        .parse_next(input)
}
