//! Plugin contract for host localization frameworks.

use icu_plurals::PluralOperands;

use crate::resolver::{PluralForms, ResolveError};

/// The plural-forms provider contract of gettext-style message catalogs.
///
/// A host framework asks a provider two things: how many plural forms a
/// locale has (`nplurals`) and which form a number selects (`plural`). The
/// trait is object safe so hosts can hold a `Box<dyn PluralFormsProvider>`.
pub trait PluralFormsProvider: Send + Sync {
    /// Number of plural forms for `locale`.
    fn nplurals(&self, locale: &str) -> Result<usize, ResolveError>;

    /// Zero-based plural form index of `number` for `locale`.
    fn plural(&self, locale: &str, number: PluralOperands) -> Result<usize, ResolveError>;
}

impl PluralFormsProvider for PluralForms {
    fn nplurals(&self, locale: &str) -> Result<usize, ResolveError> {
        self.count_forms(locale)
    }

    fn plural(&self, locale: &str, number: PluralOperands) -> Result<usize, ResolveError> {
        self.form_index(locale, number)
    }
}
