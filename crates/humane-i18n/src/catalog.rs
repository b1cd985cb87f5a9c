//! Loaded message catalogs.
//!
//! # Invariants
//!
//! 1. A [`Catalog`] is immutable after construction.
//! 2. Lookups never fail; a missing entry means the caller falls back to
//!    the source string.
//! 3. A malformed file fails the load for that locale only; other
//!    locales and the passthrough path stay usable.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing file | No catalog for the locale under the search path | `I18nError::CatalogNotFound` |
//! | Corrupt file | Bad magic, truncated tables | `I18nError::Malformed` |
//! | Unreadable file | Filesystem error | `I18nError::Io` |
//! | Missing key | Translator never covered it | `None` from lookups |

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::mo::{self, MoEntry};
use crate::plural::PluralRule;

/// The fixed gettext domain. Catalogs are resolved as
/// `<search_path>/<locale>/LC_MESSAGES/humane.mo`.
pub const DOMAIN: &str = "humane";

/// Errors from catalog loading. Lookups never produce errors.
#[derive(Debug)]
pub enum I18nError {
    /// No catalog file exists for the locale under the search path.
    CatalogNotFound { locale: String, dir: PathBuf },
    /// The file exists but is not a valid `.mo` catalog.
    Malformed { locale: String, reason: String },
    /// The catalog file could not be read.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogNotFound { locale, dir } => write!(
                f,
                "no catalog for locale '{locale}' under {} (expected <dir>/{locale}/LC_MESSAGES/{DOMAIN}.mo)",
                dir.display()
            ),
            Self::Malformed { locale, reason } => {
                write!(f, "malformed catalog for locale '{locale}': {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "cannot read catalog {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for I18nError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A locale's compiled messages: simple and context-qualified entries,
/// plural tables, and the plural rule from the `Plural-Forms:` header.
#[derive(Debug)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
    plurals: HashMap<String, Vec<String>>,
    rule: PluralRule,
}

impl Catalog {
    /// Build a catalog from in-memory `.mo` data.
    pub fn from_bytes(locale: &str, data: &[u8]) -> Result<Self, I18nError> {
        let decoded = mo::decode(data).map_err(|reason| I18nError::Malformed {
            locale: locale.to_owned(),
            reason,
        })?;

        let mut messages = HashMap::new();
        let mut plurals = HashMap::new();
        for entry in decoded.entries {
            match entry {
                MoEntry::Message { id, text } => {
                    messages.insert(id, text);
                }
                MoEntry::Plural { ids, forms } => {
                    // Index the plural table by the singular msgid, and
                    // expose the first two forms to simple lookups too.
                    if let (Some(first_id), Some(first_form)) = (ids.first(), forms.first()) {
                        messages.insert(first_id.clone(), first_form.clone());
                        if let (Some(second_id), Some(second_form)) = (ids.get(1), forms.get(1)) {
                            messages.insert(second_id.clone(), second_form.clone());
                        }
                        plurals.insert(first_id.clone(), forms);
                    }
                }
            }
        }

        Ok(Self {
            locale: locale.to_owned(),
            messages,
            plurals,
            rule: PluralRule::from_header(decoded.nplurals, &decoded.plural_expression),
        })
    }

    /// Load the catalog for `locale` under `dir`, retrying with the bare
    /// language code (`fr` for `fr_FR`) when the full id has no file.
    pub fn load(locale: &str, dir: &Path) -> Result<Self, I18nError> {
        let path = resolve_path(locale, dir).ok_or_else(|| I18nError::CatalogNotFound {
            locale: locale.to_owned(),
            dir: dir.to_path_buf(),
        })?;
        let data = std::fs::read(&path).map_err(|source| I18nError::Io { path: path.clone(), source })?;
        let catalog = Self::from_bytes(locale, &data)?;
        tracing::debug!(locale, path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The locale identifier this catalog was loaded for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The plural rule declared by the catalog.
    #[must_use]
    pub fn rule(&self) -> PluralRule {
        self.rule
    }

    /// Number of distinct message entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn message(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    pub(crate) fn plural(&self, one: &str, count: i64) -> Option<&str> {
        let forms = self.plurals.get(one)?;
        forms.get(self.rule.index(count)).map(String::as_str)
    }
}

fn resolve_path(locale: &str, dir: &Path) -> Option<PathBuf> {
    let full = mo_path(locale, dir);
    if full.exists() {
        return Some(full);
    }
    let language = locale.split(['_', '-']).next().unwrap_or(locale);
    if language != locale {
        let short = mo_path(language, dir);
        if short.exists() {
            return Some(short);
        }
    }
    None
}

fn mo_path(locale: &str, dir: &Path) -> PathBuf {
    dir.join(locale).join("LC_MESSAGES").join(format!("{DOMAIN}.mo"))
}
