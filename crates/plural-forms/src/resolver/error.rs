//! Error types for plural form resolution.

use thiserror::Error;

/// An error that occurred while resolving a plural form.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Locale text is not a well-formed locale identifier.
    #[error("unknown locale '{locale}'")]
    UnknownLocale { locale: String },

    /// Neither the locale nor its base language has plural rules.
    #[error("no plural rules for locale '{locale}'{}", format_suggestions(suggestions))]
    UnresolvableLocaleKey {
        locale: String,
        suggestions: Vec<String>,
    },

    /// The rule evaluator returned a category the table does not list for the
    /// same locale. Indicates the corpus and the evaluator disagree.
    #[error(
        "plural category '{category}' for '{locale}' is not in its category list ({})",
        available.join(", ")
    )]
    InternalInconsistency {
        locale: String,
        category: &'static str,
        available: Vec<&'static str>,
    },

    /// Number text could not be parsed into plural operands.
    #[error("invalid number '{input}'")]
    InvalidNumber { input: String },

    /// The rule evaluator could not load rules for a locale.
    #[error("failed to load plural rules for '{locale}': {message}")]
    Rules { locale: String, message: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
