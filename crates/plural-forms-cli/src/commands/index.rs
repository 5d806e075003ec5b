//! Implementation of the `plural-forms index` command.

use std::path::Path;

use plural_forms::parse_number;
use plural_forms::types::category_str;
use serde::Serialize;

use super::{print_json, report_resolve_error};
use crate::load_forms;

/// Arguments for the index command.
#[derive(Debug, clap::Args)]
pub struct IndexArgs {
    /// Locale identifier (e.g., pl, en-GB, pt_BR)
    pub locale: String,

    /// Number to resolve; decimals keep their visible fraction digits (1.0)
    pub number: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for index results.
#[derive(Serialize)]
struct IndexResult<'a> {
    locale: &'a str,
    number: &'a str,
    resolved: &'a str,
    fallback: bool,
    category: &'static str,
    index: usize,
}

/// Run the index command.
pub fn run_index(args: IndexArgs, corpus: Option<&Path>) -> miette::Result<i32> {
    let forms = load_forms(corpus)?;

    let form = match parse_number(&args.number)
        .and_then(|operands| forms.resolve_form(args.locale.as_str(), operands))
    {
        Ok(form) => form,
        Err(e) => return Ok(report_resolve_error(&e, args.json)),
    };

    if args.json {
        print_json(&IndexResult {
            locale: &args.locale,
            number: &args.number,
            resolved: form.locale.as_str(),
            fallback: form.fallback,
            category: category_str(form.category),
            index: form.index,
        })?;
    } else {
        println!("{} ({})", form.index, category_str(form.category));
    }
    Ok(exitcode::OK)
}
