//! Locale collaborators for template resolution.
//!
//! A [`Locale`] bundles the locale code with the language-name and
//! qualifier-alias tables. It is read-only for the duration of one
//! resolution call, so resolution stays a pure function of its explicit
//! inputs; loading happens up front, before any rendering.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::bon;

use crate::markup::{ParseError, parse_table_file};
use crate::resolver::error::LoadError;
use crate::resolver::tables;

/// Read-only locale collaborators supplied to the resolver.
///
/// Building a locale seeds both tables from the built-in data for its
/// code (a code without built-in data starts empty). Table files loaded
/// afterwards extend the maps, shadowing individual entries.
///
/// # Example
///
/// ```
/// use wikigloss::Locale;
///
/// let locale = Locale::builder().code("en").build();
/// assert_eq!(locale.language_name("fro"), Some("Old French"));
/// assert_eq!(locale.qualifier_alias("American"), "US");
/// assert_eq!(locale.qualifier_alias("Australia"), "Australia");
/// ```
pub struct Locale {
    /// The locale code (e.g. "en", "pt").
    code: String,
    /// Language code → display name.
    language_names: HashMap<String, String>,
    /// Raw qualifier word → display alias. Words without an entry display
    /// as themselves.
    qualifier_aliases: HashMap<String, String>,
}

#[bon]
impl Locale {
    /// Create a locale seeded with the built-in tables for `code`.
    #[builder]
    pub fn new(#[builder(default = String::from("en"), into)] code: String) -> Locale {
        let language_names = tables::language_names(&code)
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let qualifier_aliases = tables::qualifier_aliases(&code)
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Locale {
            code,
            language_names,
            qualifier_aliases,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::builder().build()
    }
}

impl Locale {
    /// Create a locale for the given code.
    pub fn with_code(code: impl Into<String>) -> Locale {
        Locale::builder().code(code.into()).build()
    }

    /// The locale code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Resolve a language code to its display name.
    pub fn language_name(&self, code: &str) -> Option<&str> {
        self.language_names.get(code).map(String::as_str)
    }

    /// Resolve a qualifier word to its display alias, defaulting to the
    /// word itself.
    pub fn qualifier_alias<'a>(&'a self, word: &'a str) -> &'a str {
        self.qualifier_aliases
            .get(word)
            .map(String::as_str)
            .unwrap_or(word)
    }

    /// The known language codes, sorted.
    pub fn language_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.language_names.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    // =========================================================================
    // Table Loading
    // =========================================================================

    /// Load language-name entries from a table file.
    ///
    /// Entries extend the current table, overwriting per key. Returns the
    /// number of entries read.
    pub fn load_language_names(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = read_table(path)?;
        Self::extend(&mut self.language_names, &content, Some(path), &self.code)
    }

    /// Load language-name entries from a string.
    ///
    /// # Example
    ///
    /// ```
    /// use wikigloss::Locale;
    ///
    /// let mut locale = Locale::default();
    /// let count = locale
    ///     .load_language_names_str(r#"sga = "Old Irish";"#)
    ///     .unwrap();
    /// assert_eq!(count, 1);
    /// assert_eq!(locale.language_name("sga"), Some("Old Irish"));
    /// ```
    pub fn load_language_names_str(&mut self, content: &str) -> Result<usize, LoadError> {
        Self::extend(&mut self.language_names, content, None, &self.code)
    }

    /// Load qualifier-alias entries from a table file.
    ///
    /// Entries extend the current table, overwriting per key. Returns the
    /// number of entries read.
    pub fn load_qualifier_aliases(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = read_table(path)?;
        Self::extend(&mut self.qualifier_aliases, &content, Some(path), &self.code)
    }

    /// Load qualifier-alias entries from a string.
    pub fn load_qualifier_aliases_str(&mut self, content: &str) -> Result<usize, LoadError> {
        Self::extend(&mut self.qualifier_aliases, content, None, &self.code)
    }

    /// Parse `content` and merge its entries into `table`.
    fn extend(
        table: &mut HashMap<String, String>,
        content: &str,
        path: Option<&Path>,
        code: &str,
    ) -> Result<usize, LoadError> {
        let entries =
            parse_table_file(content).map_err(|e| into_load_error(e, path, code))?;
        let count = entries.len();
        for (key, value) in entries {
            table.insert(key, value);
        }
        Ok(count)
    }
}

/// Read a table file, attaching the path to I/O failures.
fn read_table(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Attach file context to a parse error; string-loaded tables report a
/// `<code>` placeholder path.
fn into_load_error(error: ParseError, path: Option<&Path>, code: &str) -> LoadError {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("<{code}>")));
    match error {
        ParseError::Syntax {
            line,
            column,
            message,
        } => LoadError::Parse {
            path,
            line,
            column,
            message,
        },
        ParseError::UnexpectedEof { line, column } => LoadError::Parse {
            path,
            line,
            column,
            message: "unexpected end of file".to_string(),
        },
    }
}
