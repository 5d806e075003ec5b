//! CLDR `plurals.json` corpus provider.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::corpus::{Corpus, CorpusEntry, CorpusError};

/// CLDR cardinal plural data bundled with the crate.
const EMBEDDED: &str = include_str!("../../data/plurals.json");

/// Prefix CLDR puts in front of every category name in rule keys.
const RULE_KEY_PREFIX: &str = "pluralRule-count-";

/// CLDR's name for the root locale, which is not a valid language subtag.
const CLDR_ROOT: &str = "root";

/// The locale key the root record is stored under.
const ROOT_LOCALE: &str = "und";

#[derive(Deserialize)]
struct Document {
    supplemental: Supplemental,
}

#[derive(Deserialize)]
struct Supplemental {
    #[serde(rename = "plurals-type-cardinal")]
    cardinal: Option<Map<String, Value>>,
}

/// A corpus in the CLDR JSON layout:
///
/// ```json
/// { "supplemental": { "plurals-type-cardinal": {
///     "pl": {
///         "pluralRule-count-one": "i = 1 and v = 0",
///         "pluralRule-count-few": "...",
///         "pluralRule-count-many": "...",
///         "pluralRule-count-other": ""
///     }
/// } } }
/// ```
///
/// Object key order is preserved, so category indices follow the order in
/// which the document lists the rules. The `root` record is reported under
/// `und`. Parsing is deferred to [`Corpus::entries`].
#[derive(Debug, Clone)]
pub struct CldrJson {
    source: Cow<'static, str>,
}

impl CldrJson {
    /// Wrap CLDR JSON text.
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        CldrJson {
            source: source.into(),
        }
    }

    /// The CLDR snapshot compiled into this crate.
    pub fn embedded() -> Self {
        CldrJson::new(EMBEDDED)
    }

    /// Read CLDR JSON from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CorpusError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(CldrJson::new(content))
    }

    /// The raw JSON text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Corpus for CldrJson {
    fn entries(&self) -> Result<Vec<CorpusEntry>, CorpusError> {
        let document: Document = serde_json::from_str(&self.source)?;
        let cardinal = document
            .supplemental
            .cardinal
            .ok_or(CorpusError::MissingCardinalSection)?;

        cardinal
            .into_iter()
            .map(|(locale, rules)| {
                let Value::Object(rules) = rules else {
                    return Err(CorpusError::InvalidRecord { locale });
                };
                let categories = rules
                    .keys()
                    .map(|key| match key.strip_prefix(RULE_KEY_PREFIX) {
                        Some(category) => Ok(category.to_string()),
                        None => Err(CorpusError::InvalidRuleKey {
                            locale: locale.clone(),
                            key: key.clone(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let locale = if locale == CLDR_ROOT {
                    ROOT_LOCALE.to_string()
                } else {
                    locale
                };
                Ok(CorpusEntry { locale, categories })
            })
            .collect()
    }
}
