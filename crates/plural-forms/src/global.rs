//! Process-wide plural rule table.
//!
//! The table is built once, either explicitly through [`install`] during
//! startup or from the embedded CLDR snapshot on first use, and is read-only
//! afterwards.

use std::sync::{Arc, LazyLock, OnceLock};

use icu_plurals::PluralOperands;

use crate::corpus::CldrJson;
use crate::resolver::{LocaleInput, PluralForms, ResolveError};
use crate::table::PluralRuleTable;

static TABLE: OnceLock<Arc<PluralRuleTable>> = OnceLock::new();

static FORMS: LazyLock<PluralForms> = LazyLock::new(|| PluralForms::new(Arc::clone(table())));

/// Install `table` as the process-wide table.
///
/// Must run before the first lookup. Returns the table back if one is
/// already in place.
pub fn install(table: impl Into<Arc<PluralRuleTable>>) -> Result<(), Arc<PluralRuleTable>> {
    TABLE.set(table.into())
}

/// The process-wide table, built from the embedded corpus if nothing was
/// installed.
///
/// # Panics
///
/// Panics if the embedded corpus cannot be turned into a table. Serving
/// plural lookups without rules is not possible.
pub fn table() -> &'static Arc<PluralRuleTable> {
    TABLE.get_or_init(|| {
        let table = PluralRuleTable::build(&CldrJson::embedded())
            .unwrap_or_else(|e| panic!("failed to build plural rule table: {e}"));
        Arc::new(table)
    })
}

/// The process-wide resolver.
pub fn forms() -> &'static PluralForms {
    &FORMS
}

/// Number of plural forms for `locale` using the process-wide table.
pub fn count_forms<L: LocaleInput + ?Sized>(locale: &L) -> Result<usize, ResolveError> {
    FORMS.count_forms(locale)
}

/// Plural form index of `number` for `locale` using the process-wide table.
pub fn form_index<L: LocaleInput + ?Sized>(
    locale: &L,
    number: impl Into<PluralOperands>,
) -> Result<usize, ResolveError> {
    FORMS.form_index(locale, number)
}
