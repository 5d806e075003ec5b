//! Implementation of the `plural-forms table` command.

use std::path::Path;

use plural_forms::{CategoryList, LocaleKey};
use serde::Serialize;

use super::{print_json, report_resolve_error};
use crate::load_forms;
use crate::output::table::{format_category_table, LocaleRow};

/// Arguments for the table command.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Locales to show (comma-separated). Defaults to every locale.
    #[arg(long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one locale.
#[derive(Debug, Serialize)]
struct LocaleJson {
    locale: String,
    resolved: String,
    categories: Vec<&'static str>,
}

/// Run the table command.
pub fn run_table(args: TableArgs, corpus: Option<&Path>) -> miette::Result<i32> {
    let forms = load_forms(corpus)?;

    let rows: Vec<(String, &LocaleKey, &CategoryList)> = if args.locale.is_empty() {
        forms
            .table()
            .locales()
            .into_iter()
            .filter_map(|key| {
                forms
                    .table()
                    .get(key.as_str())
                    .map(|categories| (key.to_string(), key, categories))
            })
            .collect()
    } else {
        let mut rows = Vec::with_capacity(args.locale.len());
        for locale in &args.locale {
            match forms.resolve(locale.as_str()) {
                Ok((_, resolved)) => {
                    rows.push((locale.clone(), resolved.locale, resolved.categories));
                }
                Err(e) => return Ok(report_resolve_error(&e, args.json)),
            }
        }
        rows
    };

    if args.json {
        let json_data: Vec<LocaleJson> = rows
            .iter()
            .map(|(locale, resolved, categories)| LocaleJson {
                locale: locale.clone(),
                resolved: resolved.to_string(),
                categories: categories.names(),
            })
            .collect();
        print_json(&json_data)?;
    } else {
        let rows: Vec<LocaleRow<'_>> = rows
            .iter()
            .map(|(locale, resolved, categories)| LocaleRow {
                locale,
                resolved: resolved.as_str(),
                categories,
            })
            .collect();
        println!("{}", format_category_table(&rows));
    }
    Ok(exitcode::OK)
}
