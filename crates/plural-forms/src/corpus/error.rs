//! Error types for corpus reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while reading a plural rule corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// File I/O error when reading a corpus file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus is not valid JSON or does not have the CLDR layout.
    #[error("malformed plural corpus: {0}")]
    Json(#[from] serde_json::Error),

    /// The document has no `plurals-type-cardinal` section.
    #[error("plural corpus has no 'plurals-type-cardinal' section")]
    MissingCardinalSection,

    /// A locale record is not a JSON object.
    #[error("rules for '{locale}' must be an object")]
    InvalidRecord { locale: String },

    /// A rule key does not follow the `pluralRule-count-<category>` pattern.
    #[error("invalid rule key '{key}' for '{locale}'")]
    InvalidRuleKey { locale: String, key: String },
}
