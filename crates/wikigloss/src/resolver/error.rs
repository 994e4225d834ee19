//! Error types and suggestion helpers for the resolver.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading locale table files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// Rank `candidates` by similarity to `input` for did-you-mean hints.
///
/// Uses Jaro-Winkler similarity with a 0.8 threshold and returns at most
/// three candidates, best first.
///
/// # Example
///
/// ```
/// use wikigloss::compute_suggestions;
///
/// let suggestions = compute_suggestions("surname s", &["surname", "standard spelling of"]);
/// assert_eq!(suggestions, ["surname"]);
/// ```
pub fn compute_suggestions(input: &str, candidates: &[&str]) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|&candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|&(score, _)| score >= 0.8)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
