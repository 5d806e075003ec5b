//! Integration tests for the process-wide table.

use std::ptr;

use plural_forms::{ResolveError, global};

#[test]
fn global_table_uses_embedded_corpus() {
    assert!(global::table().contains("pl"));
    assert_eq!(global::table().len(), 219);
}

#[test]
fn global_count_forms() {
    assert_eq!(global::count_forms("pl").unwrap(), 4);
    assert_eq!(global::count_forms("en_US").unwrap(), 2);
}

#[test]
fn global_form_index() {
    assert_eq!(global::form_index("pl", 112).unwrap(), 2);
    assert_eq!(global::form_index("en", 1).unwrap(), 0);
    assert!(matches!(
        global::form_index("xx", 1),
        Err(ResolveError::UnresolvableLocaleKey { .. })
    ));
}

#[test]
fn global_forms_share_the_table() {
    assert!(ptr::eq(global::forms().table(), &**global::table()));
}
