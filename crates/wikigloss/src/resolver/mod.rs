//! The template-family resolver.
//!
//! This is the last-resort interpreter invoked once simpler substitution
//! passes (static ignore-lists, 1:1 italic replacements, small expression
//! templates) have failed to handle an invocation. It maps the invocation
//! name to one of six family rules and renders the display prose through
//! the formatting combinators, consulting read-only locale collaborators
//! for language names and qualifier aliases.

mod args;
mod error;
mod etymology;
mod family;
mod label;
mod lint;
mod locale;
mod resolve;
mod tables;

pub use args::{ArgCursor, ClassifiedArgs};
pub use error::{LoadError, compute_suggestions};
pub use family::{KNOWN_NAMES, TemplateFamily};
pub use lint::{LintWarning, lint_invocation};
pub use locale::Locale;
pub use resolve::resolve;
pub use tables::{language_names, qualifier_aliases};
