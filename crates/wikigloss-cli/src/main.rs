//! wikigloss CLI entry point.
//!
//! Provides command-line tools for working with dictionary template
//! invocations:
//! - `wikigloss render` - Resolve one invocation to display prose
//! - `wikigloss check`  - Lint a corpus file of invocations
//! - `wikigloss langs`  - Inspect the built-in language-name tables

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, LangsArgs, RenderArgs, run_check, run_langs, run_render};

/// Dictionary template rendering tools.
#[derive(Debug, Parser)]
#[command(name = "wikigloss")]
#[command(about = "Dictionary template rendering tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one template invocation
    Render(RenderArgs),
    /// Lint a corpus file of invocations
    Check(CheckArgs),
    /// Show the built-in language-name table
    Langs(LangsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Render(args) => run_render(args, cli.verbose),
        Commands::Check(args) => run_check(args),
        Commands::Langs(args) => run_langs(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
