//! Implementation of the `plural-forms count` command.

use std::path::Path;

use serde::Serialize;

use super::{print_json, report_resolve_error};
use crate::load_forms;

/// Arguments for the count command.
#[derive(Debug, clap::Args)]
pub struct CountArgs {
    /// Locale identifier (e.g., pl, en-GB, pt_BR)
    pub locale: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for count results.
#[derive(Serialize)]
struct CountResult<'a> {
    locale: &'a str,
    resolved: &'a str,
    fallback: bool,
    count: usize,
    categories: Vec<&'static str>,
}

/// Run the count command.
pub fn run_count(args: CountArgs, corpus: Option<&Path>) -> miette::Result<i32> {
    let forms = load_forms(corpus)?;

    let (requested, resolved) = match forms.resolve(args.locale.as_str()) {
        Ok(found) => found,
        Err(e) => return Ok(report_resolve_error(&e, args.json)),
    };

    if args.json {
        print_json(&CountResult {
            locale: requested.as_str(),
            resolved: resolved.locale.as_str(),
            fallback: resolved.fallback,
            count: resolved.categories.len(),
            categories: resolved.categories.names(),
        })?;
    } else {
        println!("{}", resolved.categories.len());
    }
    Ok(exitcode::OK)
}
