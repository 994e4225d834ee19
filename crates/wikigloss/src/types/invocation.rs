use serde::{Deserialize, Serialize};

/// One template invocation, already isolated from surrounding markup.
///
/// Carries the template name and the ordered raw argument tokens exactly
/// as the caller split them from `name|arg1|arg2|key=val` syntax (braces
/// stripped, pipe-delimited, not otherwise parsed). Argument order is
/// significant and immutable once constructed; empty tokens are
/// meaningful and preserved.
///
/// # Example
///
/// ```
/// use wikigloss::Invocation;
///
/// let inv = Invocation::new("der", vec!["en".to_string(), "fro".to_string()]);
/// assert_eq!(inv.name(), "der");
/// assert_eq!(inv.args().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    name: String,
    args: Vec<String>,
}

impl Invocation {
    /// Create an invocation from a name and its ordered argument tokens.
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Invocation {
        Invocation {
            name: name.into(),
            args,
        }
    }

    /// The template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw argument tokens, in supplied order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, "|{arg}")?;
        }
        Ok(())
    }
}
