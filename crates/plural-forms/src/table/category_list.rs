//! Ordered plural category lists.

use std::fmt;

use icu_plurals::PluralCategory;

use crate::table::TableError;
use crate::types::{MAX_CATEGORIES, category_str, parse_category};

/// The plural categories of one locale, in form-index order.
///
/// A category's position in the list is its zero-based plural form index.
/// Lists hold between one and [`MAX_CATEGORIES`] unique categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryList(Vec<PluralCategory>);

impl CategoryList {
    /// Build a list from corpus category names, keeping their order.
    ///
    /// `locale` is only used for error reporting.
    pub fn from_names<S: AsRef<str>>(locale: &str, names: &[S]) -> Result<Self, TableError> {
        if names.is_empty() {
            return Err(TableError::EmptyCategories {
                locale: locale.to_string(),
            });
        }
        if names.len() > MAX_CATEGORIES {
            return Err(TableError::TooManyCategories {
                locale: locale.to_string(),
                count: names.len(),
                max: MAX_CATEGORIES,
            });
        }

        let mut categories = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let category = parse_category(name).ok_or_else(|| TableError::UnknownCategory {
                locale: locale.to_string(),
                category: name.to_string(),
            })?;
            if categories.contains(&category) {
                return Err(TableError::DuplicateCategory {
                    locale: locale.to_string(),
                    category: name.to_string(),
                });
            }
            categories.push(category);
        }
        Ok(CategoryList(categories))
    }

    /// Number of plural forms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; lists hold at least one category.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form index of `category`, or `None` if this locale does not define it.
    pub fn index_of(&self, category: PluralCategory) -> Option<usize> {
        self.0.iter().position(|&c| c == category)
    }

    /// Category at form index `index`.
    pub fn get(&self, index: usize) -> Option<PluralCategory> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.0.iter().copied()
    }

    /// Category names in form-index order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(category_str).collect()
    }
}

impl fmt::Display for CategoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}
