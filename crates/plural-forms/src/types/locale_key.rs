//! Canonical locale keys used to index the plural rule table.

use std::borrow::Borrow;
use std::fmt;

use icu_locale_core::LanguageIdentifier;

/// Subtag delimiter in canonical BCP-47 identifiers.
const SUBTAG_DELIMITER: char = '-';

/// A canonical locale identifier such as `"en"`, `"pt-PT"`, or `"sr-Latn"`.
///
/// Keys are produced by normalizing raw locale text (see
/// [`normalize`](crate::resolver::normalize)) or by rendering a parsed
/// [`LanguageIdentifier`], so two spellings of the same locale (`en_gb`,
/// `en-GB`) always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleKey(String);

impl LocaleKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading language subtag as its own key.
    ///
    /// Returns `None` when the key is already a bare language subtag.
    ///
    /// # Examples
    ///
    /// ```
    /// use plural_forms::resolver::normalize;
    ///
    /// let key = normalize("en_GB").unwrap();
    /// assert_eq!(key.base_language().unwrap().as_str(), "en");
    ///
    /// let bare = normalize("en").unwrap();
    /// assert!(bare.base_language().is_none());
    /// ```
    pub fn base_language(&self) -> Option<LocaleKey> {
        self.0
            .split_once(SUBTAG_DELIMITER)
            .map(|(language, _)| LocaleKey(language.to_string()))
    }
}

impl From<&LanguageIdentifier> for LocaleKey {
    fn from(id: &LanguageIdentifier) -> Self {
        LocaleKey(id.to_string())
    }
}

impl Borrow<str> for LocaleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
