//! Implementation of the `wikigloss langs` command.

use comfy_table::Table;
use wikigloss::resolver::language_names;
use wikigloss::{Locale, compute_suggestions};

use crate::output::did_you_mean;

/// Arguments for the langs command.
#[derive(Debug, clap::Args)]
pub struct LangsArgs {
    /// Locale code selecting the built-in table
    #[arg(short, long, default_value = "en")]
    pub locale: String,

    /// Look up a single language code
    #[arg(long)]
    pub code: Option<String>,
}

/// Run the langs command.
pub fn run_langs(args: LangsArgs) -> miette::Result<i32> {
    if let Some(code) = &args.code {
        let locale = Locale::with_code(&args.locale);
        return match locale.language_name(code) {
            Some(name) => {
                println!("{name}");
                Ok(exitcode::OK)
            }
            None => {
                let codes = locale.language_codes();
                let suggestions = compute_suggestions(code, &codes);
                eprintln!(
                    "unknown language code '{code}'{}",
                    did_you_mean(&suggestions)
                );
                Ok(exitcode::DATAERR)
            }
        };
    }

    let entries = language_names(&args.locale);
    if entries.is_empty() {
        eprintln!("no built-in language names for locale '{}'", args.locale);
        return Ok(exitcode::DATAERR);
    }

    let mut table = Table::new();
    table.set_header(vec!["code", "language"]);
    for &(code, name) in entries {
        table.add_row(vec![code, name]);
    }
    println!("{table}");

    Ok(exitcode::OK)
}
