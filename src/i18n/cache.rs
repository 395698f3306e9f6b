//! Optional dictionary cache backed by Moka.
//!
//! Dictionaries are loaded fresh on every request by default. When a
//! TTL is configured, [`CachedDictionaries`] sits in front of the real
//! source and keeps successful loads around until they expire.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use moka::sync::Cache;
use tracing::debug;

use super::{Dictionary, DictionaryError, DictionarySource, Locale};

/// Configuration for the dictionary cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached dictionaries.
    pub max_capacity: u64,

    /// Time-to-live for cached dictionaries.
    pub ttl: Duration,
}

impl CacheConfig {
    /// Cache dictionaries for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            max_capacity: 16,
            ttl,
        }
    }
}

/// A [`DictionarySource`] that memoizes another source.
///
/// Failed loads are not cached, so a missing file that later appears
/// is picked up on the next request.
pub struct CachedDictionaries {
    inner: Arc<dyn DictionarySource>,
    cache: Cache<Locale, Dictionary>,
}

impl CachedDictionaries {
    pub fn new(inner: Arc<dyn DictionarySource>, config: CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .build();

        Self { inner, cache }
    }
}

impl DictionarySource for CachedDictionaries {
    fn load(&self, locale: Locale) -> BoxFuture<'_, Result<Dictionary, DictionaryError>> {
        Box::pin(async move {
            if let Some(dict) = self.cache.get(&locale) {
                debug!("Dictionary cache hit for {}", locale);
                return Ok(dict);
            }

            let dict = self.inner.load(locale).await?;
            self.cache.insert(locale, dict.clone());
            Ok(dict)
        })
    }
}
