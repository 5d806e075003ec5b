//! Plural rule corpus providers.
//!
//! A corpus maps raw locale identifiers to the plural category names CLDR
//! defines for them. Only the category names and their enumeration order are
//! consumed; the rule predicates themselves are evaluated elsewhere.

mod cldr;
mod error;

pub use cldr::CldrJson;
pub use error::CorpusError;

/// One locale's record in a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Locale identifier exactly as it appears in the corpus.
    pub locale: String,
    /// Category names in corpus enumeration order.
    pub categories: Vec<String>,
}

/// A source of cardinal plural category data.
pub trait Corpus {
    /// Read every locale record, preserving the corpus order of categories.
    fn entries(&self) -> Result<Vec<CorpusEntry>, CorpusError>;
}
