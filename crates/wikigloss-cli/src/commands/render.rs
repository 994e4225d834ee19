//! Implementation of the `wikigloss render` command.

use std::path::PathBuf;

use serde::Serialize;
use wikigloss::{Locale, TemplateFamily, lint_invocation, parse_invocation, resolve};

use crate::output::{did_you_mean, warning_prefix};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Invocation to render, e.g. '{{alt form|enm|theen}}' or 'alt form|enm|theen'
    pub invocation: String,

    /// Locale code driving language names and qualifier aliases
    #[arg(short, long, default_value = "en")]
    pub locale: String,

    /// Table file extending the language-name table
    #[arg(long)]
    pub langs: Option<PathBuf>,

    /// Table file extending the qualifier-alias table
    #[arg(long)]
    pub qualifiers: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub name: String,
    pub family: TemplateFamily,
    pub rendered: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs, verbose: bool) -> miette::Result<i32> {
    let mut locale = Locale::with_code(&args.locale);

    if let Some(path) = &args.langs {
        locale
            .load_language_names(path)
            .map_err(|e| miette::miette!("{e}"))?;
    }
    if let Some(path) = &args.qualifiers {
        locale
            .load_qualifier_aliases(path)
            .map_err(|e| miette::miette!("{e}"))?;
    }

    let invocation = match parse_invocation(&args.invocation) {
        Ok(invocation) => invocation,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("invalid invocation: {e}");
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let rendered = resolve(&invocation, &locale);
    let warnings = lint_invocation(&invocation, &locale);

    if args.json {
        let output = RenderResult {
            name: invocation.name().to_string(),
            family: TemplateFamily::of_name(invocation.name()),
            rendered,
            warnings: warnings.iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{rendered}");
        if verbose {
            for warning in &warnings {
                eprintln!(
                    "{} {warning}{}",
                    warning_prefix(),
                    did_you_mean(warning.suggestions())
                );
            }
        }
    }

    Ok(exitcode::OK)
}
