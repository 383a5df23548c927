//! Lift pass pricing service
//!
//! Prices admission tickets by type, visitor age and visit date against a
//! configurable base price list and holiday calendar.
//!
//! Module structure:
//! - `pricing/` - Evaluator, price store, HTTP handlers
//! - `cache` - Base price cache
//! - `config` - Environment configuration
//! - `error` - Application error type

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::cache::AppCache;
use crate::pricing::store::PriceStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PriceStore>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(store: Arc<dyn PriceStore>, cache: AppCache) -> Self {
        Self { store, cache }
    }
}

/// Build the full application router with middleware
pub fn app(state: AppState) -> Router {
    pricing::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
