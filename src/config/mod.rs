//! Configuration module for the landing server.
//!
//! Loads configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::i18n::Locale;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // HTTP
    pub listen_addr: IpAddr,
    pub port: u16,

    /// Locale that `/` redirects to.
    pub default_locale: Locale,

    // Dictionaries
    /// Directory holding `<code>.json` bundles.
    /// Embedded bundles are used when unset.
    pub dictionary_dir: Option<PathBuf>,

    /// Cache loaded dictionaries for this long.
    /// Dictionaries are loaded on every request when unset.
    pub dictionary_cache_ttl: Option<Duration>,

    /// Upper bound on a single dictionary load.
    pub dictionary_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            default_locale: Locale::default(),
            dictionary_dir: None,
            dictionary_cache_ttl: None,
            dictionary_timeout: Duration::from_millis(5000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns error if a set variable cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let listen_addr = match var("LISTEN_ADDR") {
            Some(addr) => addr
                .trim()
                .parse()
                .with_context(|| format!("Invalid LISTEN_ADDR: {addr}"))?,
            None => defaults.listen_addr,
        };

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {port}"))?,
            None => defaults.port,
        };

        // Unknown codes fall back to the default rather than failing startup
        let default_locale = var("DEFAULT_LOCALE")
            .and_then(|code| code.trim().parse().ok())
            .unwrap_or(defaults.default_locale);

        let dictionary_dir = var("DICTIONARY_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let dictionary_cache_ttl = match var("DICTIONARY_CACHE_TTL_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid DICTIONARY_CACHE_TTL_SECS: {secs}"))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        let dictionary_timeout = match var("DICTIONARY_TIMEOUT_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| format!("Invalid DICTIONARY_TIMEOUT_MS: {ms}"))?,
            ),
            None => defaults.dictionary_timeout,
        };

        Ok(Self {
            listen_addr,
            port,
            default_locale,
            dictionary_dir,
            dictionary_cache_ttl,
            dictionary_timeout,
        })
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.port)
    }
}
