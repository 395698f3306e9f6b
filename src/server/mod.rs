//! HTTP server - router, shared state and runtime.

mod error;
mod routes;

pub use error::AppError;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::i18n::{
    CacheConfig, CachedDictionaries, DictionarySource, EmbeddedDictionaries, FileDictionaries,
    Locale,
};
use crate::views::SWITCH_ROUTE;

/// Shared application state.
///
/// Read-only after startup; every request works on its own copy.
#[derive(Clone)]
pub struct AppState {
    /// Where dictionaries come from.
    pub dictionaries: Arc<dyn DictionarySource>,

    /// Locale that `/` redirects to.
    pub default_locale: Locale,

    /// Upper bound on a single dictionary load.
    pub dictionary_timeout: Duration,
}

impl AppState {
    /// Create application state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let source: Arc<dyn DictionarySource> = match &config.dictionary_dir {
            Some(dir) => {
                info!("Loading dictionaries from {}", dir.display());
                Arc::new(FileDictionaries::new(dir))
            }
            None => {
                info!("Using embedded dictionaries");
                Arc::new(EmbeddedDictionaries::new())
            }
        };

        let dictionaries: Arc<dyn DictionarySource> = match config.dictionary_cache_ttl {
            Some(ttl) => {
                info!("Dictionary cache enabled (ttl: {:?})", ttl);
                Arc::new(CachedDictionaries::new(source, CacheConfig::with_ttl(ttl)))
            }
            None => source,
        };

        Self {
            dictionaries,
            default_locale: config.default_locale,
            dictionary_timeout: config.dictionary_timeout,
        }
    }
}

/// Build the router with every page and the switch endpoint.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route(SWITCH_ROUTE, post(routes::switch_locale))
        .route("/:lang", get(routes::home))
        .route("/:lang/*rest", get(routes::nested))
        .fallback(routes::fallback)
        .with_state(state)
}

/// Bind the listener and serve until Ctrl+C.
pub async fn run(config: &Config, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("📡 Listening on: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
