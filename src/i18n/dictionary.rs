//! Dictionary loading.
//!
//! A dictionary is the text bundle for one locale. Where it comes from
//! is hidden behind [`DictionarySource`], so pages only ever ask for
//! "the dictionary for this locale" and await the answer.

use std::io;
use std::path::PathBuf;

use futures::future::BoxFuture;
use serde::Deserialize;
use tracing::debug;

use super::Locale;

/// Translated UI strings for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dictionary {
    pub home: HomeText,
}

/// Strings of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeText {
    pub title: String,
    pub description: String,
    /// Label of the language toggle button.
    pub button: String,
}

/// Errors that can occur while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("no dictionary for locale {locale}")]
    Missing { locale: Locale },

    #[error("failed to read dictionary for locale {locale}")]
    Read {
        locale: Locale,
        #[source]
        source: io::Error,
    },

    #[error("malformed dictionary for locale {locale}")]
    Malformed {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can resolve the dictionary of a locale.
///
/// Loading may suspend on I/O. Implementations never mutate what they
/// hand out; every call produces an independent [`Dictionary`].
pub trait DictionarySource: Send + Sync {
    fn load(&self, locale: Locale) -> BoxFuture<'_, Result<Dictionary, DictionaryError>>;
}

fn parse(locale: Locale, raw: &str) -> Result<Dictionary, DictionaryError> {
    serde_json::from_str(raw).map_err(|source| DictionaryError::Malformed { locale, source })
}

/// Dictionaries compiled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedDictionaries {
    bundles: &'static [(Locale, &'static str)],
}

const BUNDLES: &[(Locale, &str)] = &[
    (Locale::En, include_str!("en.json")),
    (Locale::Ar, include_str!("ar.json")),
];

impl Default for EmbeddedDictionaries {
    fn default() -> Self {
        Self { bundles: BUNDLES }
    }
}

impl EmbeddedDictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom bundle table instead of the built-in one.
    #[cfg(test)]
    pub fn with_bundles(bundles: &'static [(Locale, &'static str)]) -> Self {
        Self { bundles }
    }
}

impl DictionaryError {
    /// Locale whose dictionary failed to load.
    pub fn locale(&self) -> Locale {
        match self {
            Self::Missing { locale } | Self::Read { locale, .. } | Self::Malformed { locale, .. } => {
                *locale
            }
        }
    }
}

impl DictionarySource for EmbeddedDictionaries {
    fn load(&self, locale: Locale) -> BoxFuture<'_, Result<Dictionary, DictionaryError>> {
        Box::pin(async move {
            let raw = self
                .bundles
                .iter()
                .find(|(l, _)| *l == locale)
                .map(|(_, raw)| *raw)
                .ok_or(DictionaryError::Missing { locale })?;

            parse(locale, raw)
        })
    }
}

/// Dictionaries read from `<dir>/<code>.json` on every load.
#[derive(Debug, Clone)]
pub struct FileDictionaries {
    dir: PathBuf,
}

impl FileDictionaries {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }
}

impl DictionarySource for FileDictionaries {
    fn load(&self, locale: Locale) -> BoxFuture<'_, Result<Dictionary, DictionaryError>> {
        Box::pin(async move {
            let path = self.path_for(locale);
            debug!("Loading dictionary from {}", path.display());

            let raw = tokio::fs::read_to_string(&path).await.map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    DictionaryError::Missing { locale }
                } else {
                    DictionaryError::Read { locale, source }
                }
            })?;

            parse(locale, &raw)
        })
    }
}
