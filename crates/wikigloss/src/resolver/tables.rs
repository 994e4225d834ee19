//! Built-in locale data tables.
//!
//! These seed a [`Locale`](crate::resolver::Locale) when it is built;
//! table files loaded afterwards shadow individual entries. Codes follow
//! the collaborative dictionary's conventions rather than BCP 47, so
//! reconstructed-language codes like `ine-pro` appear as-is.

/// Built-in language-code → display-name entries for a locale.
///
/// Returns an empty slice for locales without built-in data.
pub fn language_names(locale: &str) -> &'static [(&'static str, &'static str)] {
    match locale {
        "en" => EN_LANGUAGE_NAMES,
        "pt" => PT_LANGUAGE_NAMES,
        _ => &[],
    }
}

/// Built-in qualifier alias entries for a locale.
///
/// Qualifiers without an alias display as themselves, so these tables
/// only carry the exceptions.
pub fn qualifier_aliases(locale: &str) -> &'static [(&'static str, &'static str)] {
    match locale {
        "en" => EN_QUALIFIER_ALIASES,
        "pt" => PT_QUALIFIER_ALIASES,
        _ => &[],
    }
}

const EN_LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("ang", "Old English"),
    ("ar", "Arabic"),
    ("cel-pro", "Proto-Celtic"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("dum", "Middle Dutch"),
    ("el", "Greek"),
    ("en", "English"),
    ("enm", "Middle English"),
    ("es", "Spanish"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("frm", "Middle French"),
    ("fro", "Old French"),
    ("ga", "Irish"),
    ("gd", "Scottish Gaelic"),
    ("gem-pro", "Proto-Germanic"),
    ("gmh", "Middle High German"),
    ("gml", "Middle Low German"),
    ("goh", "Old High German"),
    ("got", "Gothic"),
    ("grc", "Ancient Greek"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("ine-pro", "Proto-Indo-European"),
    ("it", "Italian"),
    ("itc-pro", "Proto-Italic"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("mul", "Translingual"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("non", "Old Norse"),
    ("odt", "Old Dutch"),
    ("ofs", "Old Frisian"),
    ("osx", "Old Saxon"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sa", "Sanskrit"),
    ("sco", "Scots"),
    ("sla-pro", "Proto-Slavic"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("xno", "Anglo-Norman"),
    ("zh", "Chinese"),
];

const PT_LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("de", "alemão"),
    ("en", "inglês"),
    ("es", "espanhol"),
    ("fr", "francês"),
    ("grc", "grego antigo"),
    ("it", "italiano"),
    ("la", "latim"),
    ("pt", "português"),
];

const EN_QUALIFIER_ALIASES: &[(&str, &str)] = &[
    ("AAVE", "African-American Vernacular"),
    ("American", "US"),
    ("Early ME", "Early Middle English"),
];

const PT_QUALIFIER_ALIASES: &[(&str, &str)] = &[("Coloquialismo", "coloquial")];
