//! Cardinal plural rule evaluation.
//!
//! The resolver never evaluates CLDR rule predicates itself. It asks a
//! [`CardinalRules`] implementation which category a number falls into and
//! translates that verdict into a form index.

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};

use crate::resolver::ResolveError;
use crate::types::LocaleKey;

/// Evaluates CLDR cardinal plural rules.
pub trait CardinalRules: Send + Sync {
    /// Return the plural category of `operands` under `locale`'s rules.
    fn category_for(
        &self,
        locale: &LocaleKey,
        operands: PluralOperands,
    ) -> Result<PluralCategory, ResolveError>;
}

/// Rule evaluator backed by ICU4X compiled CLDR data.
///
/// `PluralRules` are constructed on every call; nothing is cached between
/// calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuCardinalRules;

impl CardinalRules for IcuCardinalRules {
    fn category_for(
        &self,
        locale: &LocaleKey,
        operands: PluralOperands,
    ) -> Result<PluralCategory, ResolveError> {
        let loc = locale
            .as_str()
            .parse::<Locale>()
            .map_err(|_| ResolveError::UnknownLocale {
                locale: locale.to_string(),
            })?;
        let rules = PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()).map_err(
            |e| ResolveError::Rules {
                locale: locale.to_string(),
                message: e.to_string(),
            },
        )?;
        Ok(rules.category_for(operands))
    }
}

/// Parse number text into plural operands.
///
/// The text is read as a decimal with `fixed_decimal`, so visible fraction
/// digits are significant: `"1"` and `"1.0"` are different inputs to CLDR
/// rules. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use plural_forms::resolver::parse_number;
///
/// assert!(parse_number("1.50").is_ok());
/// assert!(parse_number(" 2 ").is_ok());
/// assert!(parse_number("one").is_err());
/// ```
pub fn parse_number(input: &str) -> Result<PluralOperands, ResolveError> {
    let decimal =
        Decimal::try_from_str(input.trim()).map_err(|_| ResolveError::InvalidNumber {
            input: input.to_string(),
        })?;
    Ok(PluralOperands::from(&decimal))
}
