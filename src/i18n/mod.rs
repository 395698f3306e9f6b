//! Internationalization (i18n) module.
//!
//! Defines the two supported locales and loads the translated text
//! bundle (the "dictionary") for each of them.

mod cache;
mod dictionary;

use std::fmt;
use std::str::FromStr;

pub use cache::{CacheConfig, CachedDictionaries};
pub use dictionary::{
    Dictionary, DictionaryError, DictionarySource, EmbeddedDictionaries, FileDictionaries,
    HomeText,
};

/// A supported UI language, taken from the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// The code used in URLs and dictionary file names.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// The other of the two locales.
    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Text direction for the `dir` attribute of the document.
    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// Fixed label of the direct-selection button for this locale.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::En => "Change to english",
            Self::Ar => "Change to arabic",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not one of the supported locale codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}
