//! Natural-language list joining.

use std::fmt::Display;

use humane_i18n::{Locale, current};

use crate::msg;

/// Join items with commas and a final localized "and":
/// `["a", "b", "c"]` becomes "a, b and c".
#[must_use]
pub fn join_and<T: Display>(items: &[T]) -> String {
    join_and_with(&current(), items)
}

/// [`join_and`] with an explicit locale.
#[must_use]
pub fn join_and_with<T: Display>(locale: &Locale, items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            locale
                .text(msg::AND)
                .replacen("%s", &head, 1)
                .replacen("%s", &last.to_string(), 1)
        }
    }
}
