//! Error types for table construction.

use thiserror::Error;

use crate::corpus::CorpusError;

/// Errors that prevent the plural rule table from being built.
///
/// These are initialization failures: a process must not serve plural
/// lookups without a successfully built table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The corpus could not be read or parsed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// The corpus defines no locales at all.
    #[error("plural corpus defines no locales")]
    EmptyCorpus,

    /// A corpus key is not a well-formed locale identifier.
    #[error("invalid locale identifier '{locale}' in plural corpus")]
    InvalidLocale { locale: String },

    /// Two corpus keys normalize to the same locale.
    #[error("locale '{locale}' is defined more than once (as '{key}')")]
    DuplicateLocale { locale: String, key: String },

    /// A locale defines no categories.
    #[error("locale '{locale}' defines no plural categories")]
    EmptyCategories { locale: String },

    /// A category name is not one of the CLDR category names.
    #[error("unknown plural category '{category}' for '{locale}'")]
    UnknownCategory { locale: String, category: String },

    /// A category is listed more than once for the same locale.
    #[error("plural category '{category}' is listed twice for '{locale}'")]
    DuplicateCategory { locale: String, category: String },

    /// A locale lists more categories than CLDR has names for.
    #[error("locale '{locale}' defines {count} plural categories, at most {max} are allowed")]
    TooManyCategories {
        locale: String,
        count: usize,
        max: usize,
    },
}

impl TableError {
    /// The corpus locale the error refers to, if any.
    pub fn locale(&self) -> Option<&str> {
        match self {
            TableError::Corpus(
                CorpusError::InvalidRecord { locale } | CorpusError::InvalidRuleKey { locale, .. },
            )
            | TableError::InvalidLocale { locale }
            | TableError::DuplicateLocale { locale, .. }
            | TableError::EmptyCategories { locale }
            | TableError::UnknownCategory { locale, .. }
            | TableError::DuplicateCategory { locale, .. }
            | TableError::TooManyCategories { locale, .. } => Some(locale.as_str()),
            TableError::Corpus(_) | TableError::EmptyCorpus => None,
        }
    }
}
