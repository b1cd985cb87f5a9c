#![forbid(unsafe_code)]

//! Localization foundation for Humane.
//!
//! Message catalogs are GNU `.mo` files resolved under
//! `<search_path>/<locale>/LC_MESSAGES/humane.mo` and cached per
//! `(locale, search_path)` pair for the process lifetime. Lookups go
//! through an explicit [`Locale`] value (or the thread-local active
//! locale installed by [`activate`]) and always fall back to the source
//! string, so a missing translation can never break formatting.

pub mod catalog;
pub mod locale;
mod mo;
pub mod plural;

pub use catalog::{Catalog, DOMAIN, I18nError};
pub use locale::{
    LOCALE_DIR_ENV, Locale, Lookup, PluralMsg, ScopedLocale, activate, current, deactivate, scoped,
};
pub use plural::PluralRule;

#[cfg(any(test, feature = "test-helpers"))]
pub use mo::testing;
