//! Locale validation and normalization.
//!
//! Raw locale text arrives in many spellings: BCP-47 (`en-GB`), POSIX
//! (`en_GB.UTF-8`), or with a modifier (`sr_RS@latin`). Everything is reduced
//! to a canonical [`LocaleKey`] before it touches the rule table.

use icu_locale_core::{LanguageIdentifier, Locale};

use crate::resolver::ResolveError;
use crate::types::LocaleKey;

/// Parse raw locale text into a structured locale.
///
/// Strips POSIX encoding suffixes and modifiers and accepts `_` as a subtag
/// separator.
///
/// # Examples
///
/// ```
/// use plural_forms::resolver::validate;
///
/// let locale = validate("pt_BR.UTF-8").unwrap();
/// assert_eq!(locale.to_string(), "pt-BR");
/// assert!(validate("not a locale").is_err());
/// ```
pub fn validate(raw: &str) -> Result<Locale, ResolveError> {
    let unknown = || ResolveError::UnknownLocale {
        locale: raw.to_string(),
    };
    let stripped = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if stripped.is_empty() {
        return Err(unknown());
    }
    stripped.replace('_', "-").parse::<Locale>().map_err(|_| unknown())
}

/// Normalize raw locale text into a canonical table key.
///
/// Unicode extensions are dropped; the key is the language identifier only.
///
/// ```
/// use plural_forms::resolver::normalize;
///
/// assert_eq!(normalize("EN_gb").unwrap().as_str(), "en-GB");
/// assert_eq!(normalize("de-DE-u-co-phonebk").unwrap().as_str(), "de-DE");
/// ```
pub fn normalize(raw: &str) -> Result<LocaleKey, ResolveError> {
    validate(raw).map(|locale| LocaleKey::from(&locale.id))
}

/// Values that identify a locale for plural resolution.
///
/// Implemented for raw locale text as well as for already-parsed locales, so
/// the resolver accepts either.
pub trait LocaleInput {
    /// Produce the canonical table key for this locale.
    fn to_locale_key(&self) -> Result<LocaleKey, ResolveError>;
}

impl LocaleInput for str {
    fn to_locale_key(&self) -> Result<LocaleKey, ResolveError> {
        normalize(self)
    }
}

impl LocaleInput for String {
    fn to_locale_key(&self) -> Result<LocaleKey, ResolveError> {
        normalize(self)
    }
}

impl LocaleInput for LocaleKey {
    fn to_locale_key(&self) -> Result<LocaleKey, ResolveError> {
        Ok(self.clone())
    }
}

impl LocaleInput for Locale {
    fn to_locale_key(&self) -> Result<LocaleKey, ResolveError> {
        Ok(LocaleKey::from(&self.id))
    }
}

impl LocaleInput for LanguageIdentifier {
    fn to_locale_key(&self) -> Result<LocaleKey, ResolveError> {
        Ok(LocaleKey::from(self))
    }
}
