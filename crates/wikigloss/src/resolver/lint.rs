//! Non-fatal diagnostics for template invocations.
//!
//! Resolution itself never fails; this pass reports the places where it
//! silently degraded so corpus tooling can surface them: names that fell
//! through to the generic fallback, and etymology language codes missing
//! from the locale tables.

use thiserror::Error;

use crate::resolver::error::compute_suggestions;
use crate::resolver::etymology::source_language_code;
use crate::resolver::family::{KNOWN_NAMES, TemplateFamily};
use crate::resolver::locale::Locale;
use crate::types::Invocation;

/// A non-fatal finding about one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// The dispatcher found no dedicated family for this name.
    #[error("unknown template '{name}' renders through the generic fallback")]
    UnknownTemplate {
        name: String,
        suggestions: Vec<String>,
    },

    /// An etymology source-language code missing from the locale tables.
    #[error("unresolved language code '{code}'")]
    UnresolvedLanguage {
        code: String,
        suggestions: Vec<String>,
    },
}

impl LintWarning {
    /// Did-you-mean candidates attached to this warning, best first.
    pub fn suggestions(&self) -> &[String] {
        match self {
            LintWarning::UnknownTemplate { suggestions, .. }
            | LintWarning::UnresolvedLanguage { suggestions, .. } => suggestions,
        }
    }
}

/// Inspect one invocation against the locale collaborators.
///
/// # Example
///
/// ```
/// use wikigloss::{Locale, invocation, lint_invocation};
///
/// let locale = Locale::default();
/// assert!(lint_invocation(&invocation!["der", "en", "fro", "-"], &locale).is_empty());
/// assert_eq!(lint_invocation(&invocation!["surnane", "en"], &locale).len(), 1);
/// ```
pub fn lint_invocation(invocation: &Invocation, locale: &Locale) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    match TemplateFamily::of_name(invocation.name()) {
        TemplateFamily::Generic => {
            warnings.push(LintWarning::UnknownTemplate {
                name: invocation.name().to_string(),
                suggestions: compute_suggestions(invocation.name(), KNOWN_NAMES),
            });
        }
        TemplateFamily::Etymology => {
            if let Some(code) = source_language_code(invocation.name(), invocation.args())
                && locale.language_name(&code).is_none()
            {
                let codes = locale.language_codes();
                warnings.push(LintWarning::UnresolvedLanguage {
                    suggestions: compute_suggestions(&code, &codes),
                    code,
                });
            }
        }
        TemplateFamily::AltForm
        | TemplateFamily::Label
        | TemplateFamily::StandardSpelling
        | TemplateFamily::Surname => {}
    }
    warnings
}
