//! Implementation of the `plural-forms check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{miette, IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use plural_forms::{CldrJson, PluralRuleTable};
use serde::Serialize;

use super::print_json;
use crate::output::CorpusDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// CLDR plurals.json file to check
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a successful check.
#[derive(Serialize)]
struct CheckResult {
    file: String,
    locales: usize,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let content = read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read corpus file {:?}: {}", args.file, e))?;

    let table = match PluralRuleTable::build(&CldrJson::new(content.clone())) {
        Ok(table) => table,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "file": args.file.display().to_string(),
                    "error": e.to_string()
                });
                print_json(&output)?;
                return Ok(exitcode::DATAERR);
            }
            let diagnostic = CorpusDiagnostic::from_table_error(&args.file, &content, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        print_json(&CheckResult {
            file: args.file.display().to_string(),
            locales: table.len(),
        })?;
    } else {
        println!(
            "{} {} ({} locales)",
            "ok".green().bold(),
            args.file.display(),
            table.len()
        );
    }
    Ok(exitcode::OK)
}
