//! Implementation of the `wikigloss check` command.
//!
//! Scans a corpus file with one invocation per line (`#` comments and
//! blank lines skipped), reports lint findings and parse failures, and
//! prints a per-family tally.

use std::fs::read_to_string;
use std::path::PathBuf;

use comfy_table::Table;
use wikigloss::{Locale, TemplateFamily, lint_invocation, parse_invocation};

use crate::output::{did_you_mean, error_prefix, warning_prefix};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Corpus file with one invocation per line
    pub file: PathBuf,

    /// Locale code driving language names and qualifier aliases
    #[arg(short, long, default_value = "en")]
    pub locale: String,
}

/// Families in display order for the summary table.
const FAMILIES: [TemplateFamily; 6] = [
    TemplateFamily::AltForm,
    TemplateFamily::Label,
    TemplateFamily::Etymology,
    TemplateFamily::StandardSpelling,
    TemplateFamily::Surname,
    TemplateFamily::Generic,
];

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let content = read_to_string(&args.file)
        .map_err(|e| miette::miette!("cannot read {}: {e}", args.file.display()))?;
    let locale = Locale::with_code(&args.locale);
    let display_path = args.file.display();

    let mut counts = [0usize; FAMILIES.len()];
    let mut warning_count = 0usize;
    let mut error_count = 0usize;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        match parse_invocation(line) {
            Ok(invocation) => {
                let family = TemplateFamily::of_name(invocation.name());
                if let Some(slot) = FAMILIES.iter().position(|&f| f == family) {
                    counts[slot] += 1;
                }
                for warning in lint_invocation(&invocation, &locale) {
                    warning_count += 1;
                    println!(
                        "{display_path}:{line_no}: {} {warning}{}",
                        warning_prefix(),
                        did_you_mean(warning.suggestions())
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                println!("{display_path}:{line_no}: {} {e}", error_prefix());
            }
        }
    }

    let mut table = Table::new();
    table.set_header(vec!["family", "invocations"]);
    for (family, count) in FAMILIES.iter().zip(counts) {
        table.add_row(vec![family.to_string(), count.to_string()]);
    }
    println!("{table}");

    let total: usize = counts.iter().sum();
    println!("{total} invocation(s), {warning_count} warning(s), {error_count} error(s)");

    if error_count > 0 {
        Ok(exitcode::DATAERR)
    } else if warning_count > 0 {
        Ok(1)
    } else {
        Ok(exitcode::OK)
    }
}
