//! CLDR cardinal plural forms for gettext-style localization.
//!
//! Message catalogs store one translation per plural form and need two
//! answers per locale: how many forms there are, and which form a number
//! selects. This crate derives both from CLDR data:
//!
//! - [`table`] builds an immutable [`PluralRuleTable`] from a [`corpus`],
//!   fixing each locale's category order (and thereby its form indices).
//! - [`resolver`] answers [`count_forms`](PluralForms::count_forms) and
//!   [`form_index`](PluralForms::form_index), falling back once to the base
//!   language when a regional locale has no rules of its own.
//! - [`global`] holds a process-wide table for callers that do not want to
//!   thread a resolver through their code.
//!
//! # Example
//!
//! ```
//! use plural_forms::global;
//!
//! assert_eq!(global::count_forms("ru").unwrap(), 4);
//! assert_eq!(global::form_index("ru", 22).unwrap(), 1); // "few"
//! ```

pub mod corpus;
pub mod global;
pub mod resolver;
pub mod table;
pub mod types;

pub use corpus::{CldrJson, Corpus, CorpusEntry, CorpusError};
pub use resolver::{
    CardinalRules, Form, IcuCardinalRules, LocaleInput, PluralForms, PluralFormsProvider,
    ResolveError, normalize, parse_number, validate,
};
pub use table::{CategoryList, PluralRuleTable, TableError};
pub use types::LocaleKey;

pub use icu_plurals::{PluralCategory, PluralOperands};
