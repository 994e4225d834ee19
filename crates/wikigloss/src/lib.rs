pub mod format;
pub mod markup;
pub mod resolver;
pub mod types;

pub use markup::{ParseError, parse_invocation, parse_table_file};
pub use resolver::{
    ArgCursor, ClassifiedArgs, KNOWN_NAMES, LintWarning, LoadError, Locale, TemplateFamily,
    compute_suggestions, lint_invocation, resolve,
};
pub use types::Invocation;

/// Creates an [`Invocation`] from a template name and argument tokens.
///
/// Arguments are converted via `to_string`, so string literals can be
/// passed directly.
///
/// # Example
///
/// ```
/// use wikigloss::invocation;
///
/// let inv = invocation!["lb", "en", "Australia", "slang"];
/// assert_eq!(inv.name(), "lb");
/// assert_eq!(inv.args(), &["en", "Australia", "slang"]);
/// ```
#[macro_export]
macro_rules! invocation {
    [$name:expr $(, $arg:expr)* $(,)?] => {
        $crate::Invocation::new($name, ::std::vec![$($arg.to_string()),*])
    };
}
