//! Template family dispatch table.

use serde::Serialize;

/// The closed set of handling rules for template invocations.
///
/// A family is selected purely by invocation name, case-sensitively,
/// through a static table resolved once before any argument inspection.
/// Unmatched names map to [`TemplateFamily::Generic`], so dispatch never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateFamily {
    /// `alt form`, `alternative form of`
    AltForm,
    /// `lb`, `lbl`, `label`
    Label,
    /// `bor`, `cog`, `der`, `etyl`, `inh`, `m`
    Etymology,
    /// `standard spelling of`
    StandardSpelling,
    /// `surname`
    Surname,
    /// Everything else
    Generic,
}

/// Template names with a dedicated family rule, sorted.
pub const KNOWN_NAMES: &[&str] = &[
    "alt form",
    "alternative form of",
    "bor",
    "cog",
    "der",
    "etyl",
    "inh",
    "label",
    "lb",
    "lbl",
    "m",
    "standard spelling of",
    "surname",
];

impl TemplateFamily {
    /// Select the family handling `name`.
    pub fn of_name(name: &str) -> TemplateFamily {
        match name {
            "alt form" | "alternative form of" => TemplateFamily::AltForm,
            "lb" | "lbl" | "label" => TemplateFamily::Label,
            "bor" | "cog" | "der" | "etyl" | "inh" | "m" => TemplateFamily::Etymology,
            "standard spelling of" => TemplateFamily::StandardSpelling,
            "surname" => TemplateFamily::Surname,
            _ => TemplateFamily::Generic,
        }
    }
}

impl std::fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TemplateFamily::AltForm => "alt-form",
            TemplateFamily::Label => "label",
            TemplateFamily::Etymology => "etymology",
            TemplateFamily::StandardSpelling => "standard-spelling",
            TemplateFamily::Surname => "surname",
            TemplateFamily::Generic => "generic",
        };
        write!(f, "{label}")
    }
}
