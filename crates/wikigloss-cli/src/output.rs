//! Colored status-line helpers shared by the commands.

use owo_colors::OwoColorize;

/// The colored `warning:` prefix.
pub fn warning_prefix() -> String {
    "warning:".yellow().bold().to_string()
}

/// The colored `error:` prefix.
pub fn error_prefix() -> String {
    "error:".red().bold().to_string()
}

/// Format did-you-mean candidates, or an empty string when there are none.
pub fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}
