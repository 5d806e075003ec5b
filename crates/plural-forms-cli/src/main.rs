//! plural-forms CLI entry point.
//!
//! Provides command-line tools for working with CLDR plural forms:
//! - `plural-forms count` - Number of plural forms for a locale
//! - `plural-forms index` - Plural form index of a number
//! - `plural-forms table` - List category order per locale
//! - `plural-forms check` - Validate a CLDR plurals.json file

mod commands;
mod output;

use std::io;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_count, run_index, run_table, CheckArgs, CountArgs, IndexArgs, TableArgs,
};
use miette::Diagnostic;
use plural_forms::{CldrJson, CorpusError, PluralForms, PluralRuleTable, TableError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// CLDR plural form tools.
#[derive(Debug, Parser)]
#[command(name = "plural-forms")]
#[command(about = "CLDR plural form tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// CLDR plurals.json to use instead of the embedded data
    #[arg(long, env = "PLURAL_FORMS_CORPUS", global = true)]
    pub corpus: Option<PathBuf>,

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
    /// Print the number of plural forms for a locale
    Count(CountArgs),
    /// Print the plural form index of a number
    Index(IndexArgs),
    /// List plural categories in form-index order
    Table(TableArgs),
    /// Validate a CLDR plurals.json file
    Check(CheckArgs),
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

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// The `--corpus` file could not be turned into a plural rule table.
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to build plural rule table")]
#[diagnostic(
    code(plural_forms::corpus),
    help("run `plural-forms check <file>` for a located diagnostic")
)]
pub struct CorpusLoadError(#[source] pub TableError);

impl CorpusLoadError {
    /// Unreadable files are missing input; anything else is bad data.
    pub fn exit_code(&self) -> i32 {
        match &self.0 {
            TableError::Corpus(CorpusError::Io { .. }) => exitcode::NOINPUT,
            _ => exitcode::DATAERR,
        }
    }
}

/// Build the resolver from `--corpus` or the embedded data.
pub fn load_forms(corpus: Option<&Path>) -> Result<PluralForms, CorpusLoadError> {
    let corpus = match corpus {
        Some(path) => CldrJson::from_path(path).map_err(|e| CorpusLoadError(e.into()))?,
        None => CldrJson::embedded(),
    };
    let table = PluralRuleTable::build(&corpus).map_err(CorpusLoadError)?;
    Ok(PluralForms::new(table))
}

/// Map a command failure to a process exit code.
fn exit_code(report: &miette::Report) -> i32 {
    report
        .downcast_ref::<CorpusLoadError>()
        .map_or(exitcode::SOFTWARE, CorpusLoadError::exit_code)
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let corpus = cli.corpus.as_deref();
    let result = match cli.command {
        Commands::Count(args) => run_count(args, corpus),
        Commands::Index(args) => run_index(args, corpus),
        Commands::Table(args) => run_table(args, corpus),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exit_code(&e));
        }
    }
}
