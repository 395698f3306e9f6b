//! Landing - bilingual server-rendered landing page
//!
//! Serves translated copy under `/{locale}/...` and lets the visitor
//! switch between English and Arabic by rewriting the locale segment.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `i18n` - Locales and dictionary loading (embedded, files, optional Moka cache)
//! - `navigation` - Locale switching over an injected navigator
//! - `views` - Maud page shell, hero and switcher buttons
//! - `server` - Axum router, page handlers and runtime

mod config;
mod i18n;
mod navigation;
mod server;
mod views;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::AppState;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("landing=info,tower_http=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting landing server...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");
    info!("Default locale: {}", config.default_locale);

    let state = AppState::from_config(&config);

    server::run(&config, state).await
}
