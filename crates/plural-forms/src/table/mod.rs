//! The plural rule table.
//!
//! The table maps every corpus locale to its ordered category list. It is
//! built once from a [`Corpus`] and never mutated afterwards, so a single
//! instance can be shared by any number of readers.

mod category_list;
mod error;

use std::collections::HashMap;

use strsim::levenshtein;
use tracing::info;

use crate::corpus::Corpus;
use crate::resolver::normalize;
use crate::types::LocaleKey;

pub use category_list::CategoryList;
pub use error::TableError;

/// Immutable mapping from canonical locale key to ordered plural categories.
#[derive(Debug, Clone)]
pub struct PluralRuleTable {
    locales: HashMap<LocaleKey, CategoryList>,
}

impl PluralRuleTable {
    /// Build the table from a corpus.
    ///
    /// Corpus keys are normalized the same way request locales are, so
    /// `"pt_PT"` in a corpus is found by a request for `"pt-PT"`.
    ///
    /// # Errors
    ///
    /// Any malformed record fails the whole build. There is no partial table.
    pub fn build(corpus: &impl Corpus) -> Result<Self, TableError> {
        let entries = corpus.entries()?;
        if entries.is_empty() {
            return Err(TableError::EmptyCorpus);
        }

        let mut locales = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = normalize(&entry.locale).map_err(|_| TableError::InvalidLocale {
                locale: entry.locale.clone(),
            })?;
            let categories = CategoryList::from_names(&entry.locale, &entry.categories)?;
            if locales.contains_key(&key) {
                return Err(TableError::DuplicateLocale {
                    locale: entry.locale,
                    key: key.to_string(),
                });
            }
            locales.insert(key, categories);
        }

        info!(locales = locales.len(), "built plural rule table");
        Ok(PluralRuleTable { locales })
    }

    /// Category list for an exact canonical key.
    pub fn get(&self, key: &str) -> Option<&CategoryList> {
        self.locales.get(key)
    }

    /// Stored key and category list for an exact canonical key.
    pub fn get_key_value(&self, key: &str) -> Option<(&LocaleKey, &CategoryList)> {
        self.locales.get_key_value(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.locales.contains_key(key)
    }

    /// Number of locales in the table.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// All locale keys, sorted.
    pub fn locales(&self) -> Vec<&LocaleKey> {
        let mut keys: Vec<&LocaleKey> = self.locales.keys().collect();
        keys.sort();
        keys
    }

    /// Table keys close to `key`, closest first, at most three.
    ///
    /// Used to decorate lookup failures with "did you mean" hints.
    pub fn suggestions(&self, key: &str) -> Vec<String> {
        let max_distance = if key.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, &str)> = self
            .locales
            .keys()
            .filter_map(|candidate| {
                let dist = levenshtein(key, candidate.as_str());
                (dist <= max_distance && dist > 0).then_some((dist, candidate.as_str()))
            })
            .collect();

        suggestions.sort();
        suggestions
            .into_iter()
            .take(3)
            .map(|(_, s)| s.to_string())
            .collect()
    }
}
