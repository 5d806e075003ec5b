//! Plural form resolution.
//!
//! This module answers the two questions a gettext-style catalog asks about a
//! locale: how many plural forms it has, and which form a given number uses.
//! Locale text is normalized, looked up in the [`PluralRuleTable`], and the
//! number's category is obtained from a [`CardinalRules`] evaluator.
//!
//! [`PluralRuleTable`]: crate::table::PluralRuleTable

mod error;
mod forms;
mod locale;
mod provider;
mod rules;

pub use error::ResolveError;
pub use forms::{Form, PluralForms, Resolved};
pub use locale::{LocaleInput, normalize, validate};
pub use provider::PluralFormsProvider;
pub use rules::{CardinalRules, IcuCardinalRules, parse_number};
