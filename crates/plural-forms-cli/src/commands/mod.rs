//! CLI command implementations.

mod check;
mod count;
mod index;
mod table;

pub use check::{run_check, CheckArgs};
pub use count::{run_count, CountArgs};
pub use index::{run_index, IndexArgs};
pub use table::{run_table, TableArgs};

use owo_colors::OwoColorize;
use plural_forms::ResolveError;

/// Print a resolution error and return the exit code for it.
fn report_resolve_error(err: &ResolveError, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({
            "error": err.to_string()
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    exitcode::DATAERR
}

/// Print a serializable value as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> miette::Result<()> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
    println!("{}", output);
    Ok(())
}
