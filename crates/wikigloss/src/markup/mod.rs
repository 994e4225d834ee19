//! Parsers for isolated template invocations and locale table files.
//!
//! This module turns one already-isolated invocation string into an
//! [`Invocation`](crate::types::Invocation) and parses the `key = "value";`
//! table files that extend locale data. It does not discover invocations
//! inside larger text and does not balance nested braces.

pub mod error;
mod invocation;
mod tables;

pub use error::ParseError;
pub use invocation::parse_invocation;
pub use tables::parse_table_file;

/// Calculate line and column from original input and remaining input.
pub(crate) fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}
