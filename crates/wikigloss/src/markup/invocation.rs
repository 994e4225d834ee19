//! Invocation string parser using winnow.
//!
//! Parses one already-isolated template invocation, either brace-wrapped
//! (`{{name|arg|key=val}}`) or bare (`name|arg|key=val`). Tokens are
//! pipe-delimited and kept verbatim, so empty argument slots survive.
//! Nested or unbalanced braces are a syntax error — isolating invocations
//! from surrounding text is the caller's job.

use winnow::combinator::{opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::calculate_position;
use super::error::ParseError;
use crate::types::Invocation;

/// Parse one isolated invocation string.
///
/// The first pipe-delimited token (trimmed) is the template name and must
/// be non-empty; the remaining tokens are the raw arguments.
///
/// # Example
///
/// ```
/// use wikigloss::parse_invocation;
///
/// let inv = parse_invocation("{{alt form|enm|theen}}").unwrap();
/// assert_eq!(inv.name(), "alt form");
/// assert_eq!(inv.args(), &["enm", "theen"]);
///
/// // The bare form parses identically.
/// assert_eq!(parse_invocation("alt form|enm|theen").unwrap(), inv);
/// ```
pub fn parse_invocation(input: &str) -> Result<Invocation, ParseError> {
    let mut remaining = input;
    match invocation(&mut remaining) {
        Ok(inv) => {
            if !remaining.is_empty() {
                let (line, column) = calculate_position(input, remaining);
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                });
            }
            if inv.name().is_empty() {
                return Err(ParseError::Syntax {
                    line: 1,
                    column: 1,
                    message: "empty template name".to_string(),
                });
            }
            Ok(inv)
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

/// Parse an invocation: optional `{{ }}` wrapper around pipe-delimited tokens.
fn invocation(input: &mut &str) -> ModalResult<Invocation> {
    let braced = opt("{{").parse_next(input)?.is_some();
    let name = token.parse_next(input)?;
    let args: Vec<String> = repeat(0.., preceded('|', token)).parse_next(input)?;
    if braced {
        let _ = "}}".parse_next(input)?;
    }
    Ok(Invocation::new(name.trim(), args))
}

/// One pipe-delimited token; may be empty, never contains braces.
fn token(input: &mut &str) -> ModalResult<String> {
    take_while(0.., |c| !matches!(c, '|' | '{' | '}'))
        .map(ToString::to_string)
        .parse_next(input)
}
