//! Locale context, catalog store, and activation.
//!
//! The explicit [`Locale`] value is the unit of localization: every
//! formatter accepts one via its `*_with` form. A thread-local active
//! locale backs the convenience forms; [`activate`] and [`deactivate`]
//! mutate it, and [`scoped`] restores the previous state on every exit
//! path via `Drop`.
//!
//! Catalogs are cached process-wide per `(locale, search_path)` pair;
//! re-activating the same pair reuses the cached catalog instead of
//! re-reading the file.

use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::catalog::{Catalog, I18nError};

/// Environment override for the default catalog search path.
/// Falls back to `./locale` when unset.
pub const LOCALE_DIR_ENV: &str = "HUMANE_LOCALE_DIR";

/// A translation request, resolved uniformly by [`Locale::resolve`].
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    /// A plain source phrase.
    Simple(&'a str),
    /// A counted phrase; the catalog's plural rule picks the form.
    Plural {
        one: &'a str,
        many: &'a str,
        count: i64,
    },
    /// A phrase disambiguated by a grammatical-context tag.
    Context { tag: &'a str, msg: &'a str },
}

/// A singular/plural source-message pair, kept as a typed constant so
/// the catalog key space stays enumerable at compile time.
#[derive(Debug, Clone, Copy)]
pub struct PluralMsg {
    pub one: &'static str,
    pub many: &'static str,
}

/// An explicit localization context: a loaded catalog, or source-language
/// passthrough. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    catalog: Option<Arc<Catalog>>,
}

impl Locale {
    /// The passthrough context: every lookup returns its source string.
    #[must_use]
    pub fn source() -> Self {
        Self::default()
    }

    /// Load (or fetch from the process cache) the catalog for `locale`
    /// under `dir`, without touching the thread's active locale.
    ///
    /// `None` uses the default search path ([`LOCALE_DIR_ENV`] or
    /// `./locale`). An empty id, or one starting with `en`, yields the
    /// passthrough context.
    pub fn load(locale: &str, dir: Option<&Path>) -> Result<Self, I18nError> {
        if locale.is_empty() || locale.starts_with("en") {
            return Ok(Self::source());
        }
        let dir = dir.map_or_else(default_locale_dir, Path::to_path_buf);
        let catalog = cached_catalog(locale, &dir)?;
        Ok(Self {
            catalog: Some(catalog),
        })
    }

    /// Whether this context is source-language passthrough.
    #[must_use]
    pub fn is_source(&self) -> bool {
        self.catalog.is_none()
    }

    /// The loaded catalog's locale id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.catalog.as_deref().map(Catalog::locale)
    }

    /// Resolve a lookup request. Never fails: a missing catalog or entry
    /// degrades to the source string, with the source language's
    /// two-form plural selection.
    #[must_use]
    pub fn resolve(&self, request: Lookup<'_>) -> String {
        match request {
            Lookup::Simple(msg) => self
                .catalog
                .as_deref()
                .and_then(|c| c.message(msg))
                .unwrap_or(msg)
                .to_owned(),
            Lookup::Plural { one, many, count } => {
                if let Some(form) = self.catalog.as_deref().and_then(|c| c.plural(one, count)) {
                    return form.to_owned();
                }
                if count == 1 { one } else { many }.to_owned()
            }
            Lookup::Context { tag, msg } => {
                if let Some(catalog) = self.catalog.as_deref() {
                    let key = format!("{tag}\u{4}{msg}");
                    if let Some(text) = catalog.message(&key).or_else(|| catalog.message(msg)) {
                        return text.to_owned();
                    }
                }
                msg.to_owned()
            }
        }
    }

    /// Translate a plain phrase.
    #[must_use]
    pub fn text(&self, msg: &str) -> String {
        self.resolve(Lookup::Simple(msg))
    }

    /// Translate a counted phrase.
    #[must_use]
    pub fn plural(&self, one: &str, many: &str, count: i64) -> String {
        self.resolve(Lookup::Plural { one, many, count })
    }

    /// Translate a typed singular/plural pair.
    #[must_use]
    pub fn counted(&self, msg: PluralMsg, count: i64) -> String {
        self.plural(msg.one, msg.many, count)
    }

    /// Translate a context-qualified phrase, falling back to the plain
    /// entry and then to the source string.
    #[must_use]
    pub fn qualified(&self, tag: &str, msg: &str) -> String {
        self.resolve(Lookup::Context { tag, msg })
    }

    /// The digit-grouping separator for this locale.
    #[must_use]
    pub fn thousands_separator(&self) -> &'static str {
        separators(self.id().unwrap_or_default()).0
    }

    /// The decimal separator for this locale.
    #[must_use]
    pub fn decimal_separator(&self) -> &'static str {
        separators(self.id().unwrap_or_default()).1
    }
}

/// (thousands, decimal) separators for locales that deviate from the
/// source-language defaults.
fn separators(locale: &str) -> (&'static str, &'static str) {
    match locale {
        "de_DE" | "it_IT" | "pt_BR" => (".", ","),
        "fr_FR" | "hu_HU" => ("\u{a0}", ","),
        _ => (",", "."),
    }
}

fn default_locale_dir() -> PathBuf {
    env::var_os(LOCALE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("locale"))
}

type StoreKey = (String, PathBuf);

fn store() -> &'static Mutex<HashMap<StoreKey, Arc<Catalog>>> {
    static STORE: OnceLock<Mutex<HashMap<StoreKey, Arc<Catalog>>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn cached_catalog(locale: &str, dir: &Path) -> Result<Arc<Catalog>, I18nError> {
    let key = (locale.to_owned(), dir.to_path_buf());
    let mut cache = store().lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(catalog) = cache.get(&key) {
        tracing::trace!(locale, "catalog cache hit");
        return Ok(Arc::clone(catalog));
    }
    let catalog = Arc::new(Catalog::load(locale, dir)?);
    cache.insert(key, Arc::clone(&catalog));
    Ok(catalog)
}

thread_local! {
    static ACTIVE: RefCell<Locale> = RefCell::new(Locale::source());
}

/// Install `locale` as this thread's active locale.
///
/// Repeated activation of the same `(locale, dir)` pair is cheap: the
/// catalog is read from the process cache. Ids starting with `en`
/// deactivate instead.
pub fn activate(locale: &str, dir: Option<&Path>) -> Result<(), I18nError> {
    let next = Locale::load(locale, dir)?;
    tracing::debug!(locale, passthrough = next.is_source(), "locale activated");
    ACTIVE.with(|active| *active.borrow_mut() = next);
    Ok(())
}

/// Revert this thread to source-language passthrough. No-op when nothing
/// is active.
pub fn deactivate() {
    ACTIVE.with(|active| *active.borrow_mut() = Locale::source());
}

/// Snapshot of this thread's active locale.
#[must_use]
pub fn current() -> Locale {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Activate `locale` for the lifetime of the returned guard; the
/// previously active locale is restored when the guard drops, including
/// on unwind.
pub fn scoped(locale: &str, dir: Option<&Path>) -> Result<ScopedLocale, I18nError> {
    let next = Locale::load(locale, dir)?;
    let prev = ACTIVE.with(|active| active.replace(next));
    Ok(ScopedLocale { prev: Some(prev) })
}

/// Guard returned by [`scoped`].
#[must_use = "the previous locale is restored when this guard drops"]
#[derive(Debug)]
pub struct ScopedLocale {
    prev: Option<Locale>,
}

impl Drop for ScopedLocale {
    fn drop(&mut self) {
        if let Some(prev) = self.prev.take() {
            ACTIVE.with(|active| *active.borrow_mut() = prev);
        }
    }
}
