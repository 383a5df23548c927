//! Lift pass pricing HTTP server

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_pass_pricing::cache::{self, AppCache};
use lift_pass_pricing::config::{Config, StoreBackend};
use lift_pass_pricing::pricing::{InMemoryPriceStore, PgPriceStore, PriceStore};
use lift_pass_pricing::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lift_pass_pricing=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("lift-pass-pricing starting");

    let store: Arc<dyn PriceStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await
                .context("failed to connect to database")?;

            if config.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("failed to run migrations")?;
                info!("Database migrations applied");
            }

            Arc::new(PgPriceStore::new(pool))
        }
        StoreBackend::Memory => Arc::new(InMemoryPriceStore::with_defaults()),
    };

    let app_cache = AppCache::new(config.price_cache_ttl);
    tokio::spawn(cache::start_cache_warmer(
        app_cache.clone(),
        store.clone(),
        config.price_cache_ttl,
    ));

    let app = lift_pass_pricing::app(AppState::new(store, app_cache));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        store_backend = ?config.store_backend,
        cache_ttl_secs = config.price_cache_ttl.as_secs(),
        "config_loaded"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("lift-pass-pricing stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
