//! Plural form resolution against the rule table.

use std::sync::Arc;

use bon::Builder;
use icu_plurals::{PluralCategory, PluralOperands};
use tracing::debug;

use crate::corpus::CldrJson;
use crate::resolver::rules::{CardinalRules, IcuCardinalRules};
use crate::resolver::{LocaleInput, ResolveError};
use crate::table::{CategoryList, PluralRuleTable, TableError};
use crate::types::{LocaleKey, category_str};

/// Resolves plural form counts and indices for locales.
///
/// Lookups try the exact locale first. When the table has no entry for it,
/// the locale is truncated to its base language subtag and looked up once
/// more; there is no further fallback.
///
/// # Example
///
/// ```
/// use plural_forms::PluralForms;
///
/// let forms = PluralForms::embedded().unwrap();
///
/// assert_eq!(forms.count_forms("pl").unwrap(), 4);
/// assert_eq!(forms.form_index("pl", 5).unwrap(), 2);
///
/// // No "en-GB" entry: resolved through "en".
/// assert_eq!(forms.form_index("en_GB", 1).unwrap(), 0);
/// ```
#[derive(Builder, Clone)]
pub struct PluralForms {
    /// Shared, read-only rule table.
    #[builder(into)]
    table: Arc<PluralRuleTable>,

    /// Evaluator deciding which category a number belongs to.
    #[builder(default = Arc::new(IcuCardinalRules) as Arc<dyn CardinalRules>)]
    rules: Arc<dyn CardinalRules>,
}

/// The table entry that served a locale lookup.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Key of the entry that was used.
    pub locale: &'a LocaleKey,
    /// Categories of that entry.
    pub categories: &'a CategoryList,
    /// True when the entry belongs to the base language, not the exact locale.
    pub fallback: bool,
}

/// The plural form a number resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// Locale whose rules produced the category.
    pub locale: LocaleKey,
    pub category: PluralCategory,
    /// Zero-based plural form index.
    pub index: usize,
    /// True when the base language was used.
    pub fallback: bool,
}

impl PluralForms {
    /// Create a resolver over `table` using ICU4X rule evaluation.
    pub fn new(table: impl Into<Arc<PluralRuleTable>>) -> Self {
        PluralForms::builder().table(table).build()
    }

    /// Create a resolver over the CLDR snapshot compiled into this crate.
    pub fn embedded() -> Result<Self, TableError> {
        let table = PluralRuleTable::build(&CldrJson::embedded())?;
        Ok(PluralForms::new(table))
    }

    /// The rule table this resolver reads.
    pub fn table(&self) -> &PluralRuleTable {
        &self.table
    }

    /// Number of plural forms for `locale`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownLocale`] if locale text cannot be parsed.
    /// - [`ResolveError::UnresolvableLocaleKey`] if neither the locale nor its
    ///   base language is in the table.
    pub fn count_forms<L: LocaleInput + ?Sized>(&self, locale: &L) -> Result<usize, ResolveError> {
        let key = locale.to_locale_key()?;
        Ok(self.lookup(&key)?.categories.len())
    }

    /// Zero-based plural form index of `number` for `locale`.
    ///
    /// Integers are accepted directly; use
    /// [`parse_number`](crate::resolver::parse_number) for decimals.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`count_forms`](Self::count_forms), fails
    /// with [`ResolveError::InternalInconsistency`] if the rule evaluator
    /// returns a category the table does not list for the resolved locale.
    pub fn form_index<L: LocaleInput + ?Sized>(
        &self,
        locale: &L,
        number: impl Into<PluralOperands>,
    ) -> Result<usize, ResolveError> {
        Ok(self.resolve_form(locale, number)?.index)
    }

    /// Plural category of `number` for `locale`, under the rules of whichever
    /// locale the lookup resolved to.
    pub fn form_category<L: LocaleInput + ?Sized>(
        &self,
        locale: &L,
        number: impl Into<PluralOperands>,
    ) -> Result<PluralCategory, ResolveError> {
        Ok(self.resolve_form(locale, number)?.category)
    }

    /// Resolve `number` to its full plural form description.
    pub fn resolve_form<L: LocaleInput + ?Sized>(
        &self,
        locale: &L,
        number: impl Into<PluralOperands>,
    ) -> Result<Form, ResolveError> {
        let key = locale.to_locale_key()?;
        let operands = number.into();

        let category = self.rules.category_for(&key, operands.clone())?;
        if let Some(categories) = self.table.get(key.as_str()) {
            return locate(key, categories, category, false);
        }

        let base = key
            .base_language()
            .ok_or_else(|| self.unresolvable(&key))?;
        debug!(locale = %key, base = %base, "no plural rules for locale, using base language");
        // The category is re-derived under the base language's own rules.
        let category = self.rules.category_for(&base, operands)?;
        let categories = self
            .table
            .get(base.as_str())
            .ok_or_else(|| self.unresolvable(&key))?;
        locate(base, categories, category, true)
    }

    /// Find the table entry serving `locale`.
    pub fn resolve<L: LocaleInput + ?Sized>(
        &self,
        locale: &L,
    ) -> Result<(LocaleKey, Resolved<'_>), ResolveError> {
        let key = locale.to_locale_key()?;
        let resolved = self.lookup(&key)?;
        Ok((key, resolved))
    }

    /// Exact key, then base language key, then failure.
    fn lookup(&self, key: &LocaleKey) -> Result<Resolved<'_>, ResolveError> {
        if let Some((locale, categories)) = self.table.get_key_value(key.as_str()) {
            return Ok(Resolved {
                locale,
                categories,
                fallback: false,
            });
        }

        let base = key.base_language().ok_or_else(|| self.unresolvable(key))?;
        let (locale, categories) = self
            .table
            .get_key_value(base.as_str())
            .ok_or_else(|| self.unresolvable(key))?;
        debug!(locale = %key, base = %base, "no plural rules for locale, using base language");
        Ok(Resolved {
            locale,
            categories,
            fallback: true,
        })
    }

    fn unresolvable(&self, key: &LocaleKey) -> ResolveError {
        ResolveError::UnresolvableLocaleKey {
            locale: key.to_string(),
            suggestions: self.table.suggestions(key.as_str()),
        }
    }
}

fn locate(
    locale: LocaleKey,
    categories: &CategoryList,
    category: PluralCategory,
    fallback: bool,
) -> Result<Form, ResolveError> {
    let index = categories
        .index_of(category)
        .ok_or_else(|| ResolveError::InternalInconsistency {
            locale: locale.to_string(),
            category: category_str(category),
            available: categories.names(),
        })?;
    Ok(Form {
        locale,
        category,
        index,
        fallback,
    })
}
