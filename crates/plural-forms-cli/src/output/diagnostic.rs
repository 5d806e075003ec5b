//! Miette diagnostic wrapper for plural corpus errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use plural_forms::{CorpusError, TableError};
use thiserror::Error;

/// A miette-compatible diagnostic for corpus validation failures.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid plural corpus: {message}")]
#[diagnostic(code(plural_forms::corpus))]
pub struct CorpusDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CorpusDiagnostic {
    /// Create a diagnostic from a TableError with source context.
    pub fn from_table_error(path: &Path, content: &str, err: &TableError) -> Self {
        let offset = match err {
            TableError::Corpus(CorpusError::Json(json)) => {
                line_column_offset(content, json.line(), json.column())
            }
            _ => err
                .locale()
                .and_then(|locale| content.find(&format!("\"{locale}\"")))
                .unwrap_or(0),
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        CorpusDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help: help_for(err),
        }
    }
}

/// Convert a 1-based line:column to a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1)
}

fn help_for(err: &TableError) -> Option<String> {
    match err {
        TableError::UnknownCategory { .. } => {
            Some("categories are: zero, one, two, few, many, other".to_string())
        }
        TableError::Corpus(CorpusError::InvalidRuleKey { .. }) => {
            Some("rule keys look like \"pluralRule-count-one\"".to_string())
        }
        TableError::Corpus(CorpusError::MissingCardinalSection) => Some(
            "expected {\"supplemental\": {\"plurals-type-cardinal\": {...}}}".to_string(),
        ),
        TableError::DuplicateLocale { key, .. } => {
            Some(format!("locale keys are compared in canonical form ('{key}')"))
        }
        _ => None,
    }
}
