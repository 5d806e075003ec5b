//! CLDR plural category names.

use icu_plurals::PluralCategory;

/// Upper bound on the number of categories a single locale can define.
///
/// CLDR has exactly six category names: "zero", "one", "two", "few", "many",
/// and "other".
pub const MAX_CATEGORIES: usize = 6;

/// Translate a `PluralCategory` enum to its CLDR string representation.
pub fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Parse a CLDR category name.
///
/// Returns `None` for anything outside the six CLDR names. Matching is exact;
/// CLDR data always uses lowercase names.
///
/// # Examples
///
/// ```
/// use icu_plurals::PluralCategory;
/// use plural_forms::types::parse_category;
///
/// assert_eq!(parse_category("few"), Some(PluralCategory::Few));
/// assert_eq!(parse_category("several"), None);
/// ```
pub fn parse_category(name: &str) -> Option<PluralCategory> {
    match name {
        "zero" => Some(PluralCategory::Zero),
        "one" => Some(PluralCategory::One),
        "two" => Some(PluralCategory::Two),
        "few" => Some(PluralCategory::Few),
        "many" => Some(PluralCategory::Many),
        "other" => Some(PluralCategory::Other),
        _ => None,
    }
}
