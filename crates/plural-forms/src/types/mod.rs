//! Core value types shared by the table builder and the resolver.

mod category;
mod locale_key;

pub use category::{MAX_CATEGORIES, category_str, parse_category};
pub use locale_key::LocaleKey;
