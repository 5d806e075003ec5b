//! Integration tests for plural form resolution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use icu_locale_core::{Locale, langid, locale};
use insta::assert_snapshot;
use plural_forms::{
    CardinalRules, CldrJson, LocaleKey, PluralCategory, PluralForms, PluralFormsProvider,
    PluralOperands, PluralRuleTable, ResolveError, parse_number,
};

fn forms() -> PluralForms {
    PluralForms::embedded().unwrap()
}

fn table(json: &'static str) -> PluralRuleTable {
    PluralRuleTable::build(&CldrJson::new(json)).unwrap()
}

/// Evaluator that always answers with one category and records every call.
struct FixedRules {
    category: PluralCategory,
    calls: Mutex<Vec<String>>,
}

impl FixedRules {
    fn new(category: PluralCategory) -> Arc<Self> {
        Arc::new(FixedRules {
            category,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CardinalRules for FixedRules {
    fn category_for(
        &self,
        locale: &LocaleKey,
        _operands: PluralOperands,
    ) -> Result<PluralCategory, ResolveError> {
        self.calls.lock().unwrap().push(locale.to_string());
        Ok(self.category)
    }
}

// =========================================================================
// count_forms
// =========================================================================

#[test]
fn count_forms_for_known_locales() {
    let forms = forms();
    assert_eq!(forms.count_forms("pl").unwrap(), 4);
    assert_eq!(forms.count_forms("en").unwrap(), 2);
    assert_eq!(forms.count_forms("ar").unwrap(), 6);
    assert_eq!(forms.count_forms("sw").unwrap(), 2);
    assert_eq!(forms.count_forms("mt").unwrap(), 5);
    assert_eq!(forms.count_forms("yue").unwrap(), 1);
    assert_eq!(forms.count_forms("ja").unwrap(), 1);
}

#[test]
fn count_forms_matches_table_for_every_locale() {
    let forms = forms();
    for key in forms.table().locales() {
        let expected = forms.table().get(key.as_str()).unwrap().len();
        assert_eq!(forms.count_forms(key).unwrap(), expected, "locale {key}");
    }
}

#[test]
fn count_forms_accepts_structured_locales() {
    let forms = forms();
    assert_eq!(forms.count_forms(&locale!("ru")).unwrap(), 4);
    assert_eq!(forms.count_forms(&langid!("pt-PT")).unwrap(), 3);
    assert_eq!(forms.count_forms(&"cs".to_string()).unwrap(), 4);
}

#[test]
fn count_forms_normalizes_spelling() {
    let forms = forms();
    assert_eq!(forms.count_forms("PL").unwrap(), 4);
    assert_eq!(forms.count_forms("pl_PL.UTF-8").unwrap(), 4);
    assert_eq!(forms.count_forms("sr_RS@latin").unwrap(), 3);
}

// =========================================================================
// form_index
// =========================================================================

#[test]
fn form_index_polish() {
    let forms = forms();
    assert_eq!(forms.form_index("pl", 1).unwrap(), 0);
    assert_eq!(forms.form_index("pl", 2).unwrap(), 1);
    assert_eq!(forms.form_index("pl", 5).unwrap(), 2);
    assert_eq!(forms.form_index("pl", 112).unwrap(), 2);
}

#[test]
fn form_index_english() {
    let forms = forms();
    assert_eq!(forms.form_index("en", 1).unwrap(), 0);
    assert_eq!(forms.form_index("en", 2).unwrap(), 1);
    assert_eq!(forms.form_index("en", 112).unwrap(), 1);
}

#[test]
fn form_index_arabic_uses_all_six_forms() {
    let forms = forms();
    let indices: Vec<usize> = [0, 1, 2, 3, 11, 100]
        .into_iter()
        .map(|n| forms.form_index("ar", n).unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn form_index_russian() {
    let forms = forms();
    assert_eq!(forms.form_index("ru", 1).unwrap(), 0);
    assert_eq!(forms.form_index("ru", 21).unwrap(), 0);
    assert_eq!(forms.form_index("ru", 3).unwrap(), 1);
    assert_eq!(forms.form_index("ru", 11).unwrap(), 2);
    assert_eq!(forms.form_category("ru", 11).unwrap(), PluralCategory::Many);
}

#[test]
fn form_index_decimals() {
    let forms = forms();
    // "1.0" has a visible fraction digit, so English treats it as "other".
    assert_eq!(forms.form_index("en", parse_number("1").unwrap()).unwrap(), 0);
    assert_eq!(forms.form_index("en", parse_number("1.0").unwrap()).unwrap(), 1);
    assert_eq!(forms.form_index("ru", parse_number("1.5").unwrap()).unwrap(), 3);
}

#[test]
fn number_text_is_trimmed_and_keeps_fraction_digits() {
    let forms = forms();
    assert_eq!(forms.form_index("en", parse_number(" 1 ").unwrap()).unwrap(), 0);
    assert_eq!(forms.form_index("en", parse_number("2.50").unwrap()).unwrap(), 1);
    assert_eq!(forms.form_index("pl", parse_number("-5").unwrap()).unwrap(), 2);
    assert_eq!(forms.form_index("pl", parse_number("5.0").unwrap()).unwrap(), 3);
}

#[test]
fn form_index_in_range_for_every_locale() {
    let forms = forms();
    for key in forms.table().locales() {
        let count = forms.count_forms(key).unwrap();
        for n in 0..=120u32 {
            let index = forms.form_index(key, n).unwrap();
            assert!(index < count, "locale {key}, n {n}");
        }
    }
}

#[test]
fn regional_entry_wins_over_base_language() {
    let forms = forms();
    let form = forms.resolve_form("pt-PT", 0).unwrap();
    assert_eq!(form.locale.as_str(), "pt-PT");
    assert!(!form.fallback);
    // Portugal: 0 is "other"; Brazil-based "pt": 0 is "one".
    assert_eq!(form.index, 2);
    assert_eq!(forms.form_index("pt", 0).unwrap(), 0);
}

// =========================================================================
// Base Language Fallback
// =========================================================================

#[test]
fn region_falls_back_to_base_language() {
    let forms = forms();
    assert_eq!(
        forms.count_forms("en_GB").unwrap(),
        forms.count_forms("en").unwrap()
    );
    for n in [0, 1, 2, 5, 21, 112] {
        assert_eq!(
            forms.form_index("en_GB", n).unwrap(),
            forms.form_index("en", n).unwrap()
        );
    }
}

#[test]
fn fallback_is_reported() {
    let forms = forms();
    let (requested, resolved) = forms.resolve("de-AT").unwrap();
    assert_eq!(requested.as_str(), "de-AT");
    assert_eq!(resolved.locale.as_str(), "de");
    assert!(resolved.fallback);

    let form = forms.resolve_form("de-AT", 1).unwrap();
    assert_eq!(form.locale.as_str(), "de");
    assert!(form.fallback);
}

#[test]
fn fallback_truncates_script_and_region() {
    let forms = forms();
    assert_eq!(forms.count_forms("zh-Hant-TW").unwrap(), 1);
    assert_eq!(forms.form_index("zh-Hant-TW", 7).unwrap(), 0);
}

#[test]
fn fallback_re_evaluates_under_base_language() {
    let rules = FixedRules::new(PluralCategory::Other);
    let forms = PluralForms::builder()
        .table(forms().table().clone())
        .rules(rules.clone())
        .build();

    assert_eq!(forms.form_index("en-GB", 3).unwrap(), 1);
    assert_eq!(rules.calls(), vec!["en-GB", "en"]);
}

#[test]
fn exact_match_evaluates_once() {
    let rules = FixedRules::new(PluralCategory::One);
    let forms = PluralForms::builder()
        .table(forms().table().clone())
        .rules(rules.clone())
        .build();

    assert_eq!(forms.form_index("pt-PT", 1).unwrap(), 0);
    assert_eq!(rules.calls(), vec!["pt-PT"]);
}

#[test]
fn fallback_goes_only_one_level() {
    let forms = PluralForms::new(table(
        r#"{"supplemental": {"plurals-type-cardinal": {
            "sr-Latn": { "pluralRule-count-one": "", "pluralRule-count-other": "" }
        }}}"#,
    ));

    assert_eq!(forms.count_forms("sr-Latn").unwrap(), 2);
    // "sr-Latn-RS" truncates straight to "sr", never to "sr-Latn".
    assert!(matches!(
        forms.count_forms("sr-Latn-RS"),
        Err(ResolveError::UnresolvableLocaleKey { .. })
    ));
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn bare_unknown_locale_is_unresolvable() {
    let forms = forms();
    let err = forms.count_forms("qx").unwrap_err();
    assert_snapshot!(err.to_string(), @"no plural rules for locale 'qx'");

    let rules = FixedRules::new(PluralCategory::Other);
    let forms = PluralForms::builder()
        .table(forms.table().clone())
        .rules(rules)
        .build();
    assert!(matches!(
        forms.form_index("qx", 1),
        Err(ResolveError::UnresolvableLocaleKey { .. })
    ));
}

#[test]
fn unknown_base_language_is_unresolvable() {
    let forms = forms();
    let err = forms.count_forms("xx-GB").unwrap_err();
    match err {
        ResolveError::UnresolvableLocaleKey { locale, .. } => assert_eq!(locale, "xx-GB"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unresolvable_error_suggests_close_locales() {
    let err = forms().count_forms("pk").unwrap_err();
    assert_snapshot!(err.to_string(), @"no plural rules for locale 'pk', did you mean: ak, kk, mk?");
}

#[test]
fn malformed_locale_fails_before_evaluation() {
    let rules = FixedRules::new(PluralCategory::Other);
    let forms = PluralForms::builder()
        .table(forms().table().clone())
        .rules(rules.clone())
        .build();

    let err = forms.form_index("en GB!", 1).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownLocale { .. }));
    assert!(rules.calls().is_empty());

    assert!(matches!(
        forms.count_forms(""),
        Err(ResolveError::UnknownLocale { .. })
    ));
}

#[test]
fn evaluator_mismatch_is_an_error() {
    let rules = FixedRules::new(PluralCategory::Few);
    let forms = PluralForms::builder()
        .table(forms().table().clone())
        .rules(rules)
        .build();

    let err = forms.form_index("en", 3).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"plural category 'few' for 'en' is not in its category list (one, other)"
    );
}

#[test]
fn table_missing_evaluator_category_is_an_error() {
    // Arabic rules put 0 in "zero", which this table does not list.
    let forms = PluralForms::new(table(
        r#"{"supplemental": {"plurals-type-cardinal": {
            "ar": { "pluralRule-count-one": "", "pluralRule-count-other": "" }
        }}}"#,
    ));

    assert!(matches!(
        forms.form_index("ar", 0),
        Err(ResolveError::InternalInconsistency {
            category: "zero",
            ..
        })
    ));
}

#[test]
fn invalid_number_text() {
    let err = parse_number("lots").unwrap_err();
    assert_snapshot!(err.to_string(), @"invalid number 'lots'");
}

#[test]
fn malformed_number_text() {
    for input in ["", "1.2.3", "1,5", "--1"] {
        assert!(
            matches!(parse_number(input), Err(ResolveError::InvalidNumber { .. })),
            "{input:?}"
        );
    }
}

// =========================================================================
// Provider Contract
// =========================================================================

#[test]
fn provider_trait_object() {
    let provider: Box<dyn PluralFormsProvider> = Box::new(forms());
    assert_eq!(provider.nplurals("pl").unwrap(), 4);
    assert_eq!(provider.plural("pl", PluralOperands::from(22u32)).unwrap(), 1);
    assert_eq!(provider.plural("en_GB", PluralOperands::from(1u32)).unwrap(), 0);
    assert!(provider.nplurals("xx").is_err());
}

#[test]
fn repeated_calls_are_idempotent() {
    let forms = forms();
    let first: Vec<usize> = (0..50u32).map(|n| forms.form_index("uk", n).unwrap()).collect();
    let second: Vec<usize> = (0..50u32).map(|n| forms.form_index("uk", n).unwrap()).collect();
    assert_eq!(first, second);
    assert_eq!(forms.count_forms("uk").unwrap(), forms.count_forms("uk").unwrap());
}

#[test]
fn structured_locale_with_extensions() {
    let forms = forms();
    let locale: Locale = "fr-CA-u-nu-latn".parse().unwrap();
    let form = forms.resolve_form(&locale, 1).unwrap();
    assert_eq!(form.locale.as_str(), "fr");
    assert_eq!(form.category, PluralCategory::One);
    assert_eq!(form.index, 0);
}

#[test]
fn builder_counts_calls() {
    let calls = Arc::new(AtomicUsize::new(0));

    struct Counting(Arc<AtomicUsize>);
    impl CardinalRules for Counting {
        fn category_for(
            &self,
            _locale: &LocaleKey,
            _operands: PluralOperands,
        ) -> Result<PluralCategory, ResolveError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(PluralCategory::Other)
        }
    }

    let forms = PluralForms::builder()
        .table(forms().table().clone())
        .rules(Arc::new(Counting(Arc::clone(&calls))))
        .build();

    forms.count_forms("en-GB").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    forms.form_index("en-GB", 2).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
