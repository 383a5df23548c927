//! In-memory caching using moka
//!
//! Caches base prices per ticket type. Holidays are read fresh from the store
//! on every evaluation and never cached.

use moka::future::Cache;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::pricing::store::PriceStore;

/// Application cache holding resolved base prices
///
/// Every write to a ticket type's base price bumps that type's generation.
/// Values read from the store are only cached if no write happened since
/// the read started, so a slow reader cannot put back a superseded price.
#[derive(Clone)]
pub struct AppCache {
    /// Base prices (ticket type -> cost)
    pub base_prices: Cache<String, u32>,
    /// Write generation per ticket type; held while filling or invalidating
    generations: Arc<Mutex<HashMap<String, u64>>>,
}

impl AppCache {
    /// Create a new cache instance with the given TTL for base prices
    pub fn new(ttl: Duration) -> Self {
        Self {
            // Base prices: a handful of ticket types, idle entries dropped after the TTL
            base_prices: Cache::builder()
                .max_capacity(256)
                .time_to_live(ttl)
                .time_to_idle(ttl)
                .build(),
            generations: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Current write generation of a ticket type. Take it before reading the store.
    pub async fn generation(&self, ticket_type: &str) -> u64 {
        self.generations
            .lock()
            .await
            .get(ticket_type)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of every write generation, for bulk fills
    pub async fn generation_snapshot(&self) -> HashMap<String, u64> {
        self.generations.lock().await.clone()
    }

    /// Cache a base price read from the store at generation `seen`.
    ///
    /// Returns `false` (and caches nothing) when the price was written since.
    pub async fn fill_base_price(&self, ticket_type: &str, cost: u32, seen: u64) -> bool {
        let generations = self.generations.lock().await;
        if generations.get(ticket_type).copied().unwrap_or(0) != seen {
            debug!("Discarding stale base price for ticket type: {}", ticket_type);
            return false;
        }
        self.base_prices.insert(ticket_type.to_string(), cost).await;
        true
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            base_prices_size: self.base_prices.entry_count(),
        }
    }

    /// Invalidate the cached base price of one ticket type after a write
    pub async fn invalidate_base_price(&self, ticket_type: &str) {
        let mut generations = self.generations.lock().await;
        *generations.entry(ticket_type.to_string()).or_insert(0) += 1;
        self.base_prices.invalidate(ticket_type).await;
        info!("Cache invalidated for ticket type: {}", ticket_type);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(10 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub base_prices_size: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every `every`.
pub async fn start_cache_warmer(cache: AppCache, store: Arc<dyn PriceStore>, every: Duration) {
    let mut interval = interval(every);
    loop {
        // First tick completes immediately, so this also does the initial warm-up
        interval.tick().await;
        warm_cache(&cache, store.as_ref()).await;
    }
}

/// Warm the cache with every known base price
pub async fn warm_cache(cache: &AppCache, store: &dyn PriceStore) {
    info!("Starting cache warm-up...");

    let seen = cache.generation_snapshot().await;
    match store.list_base_prices().await {
        Ok(prices) => {
            for price in prices {
                let generation = seen.get(&price.ticket_type).copied().unwrap_or(0);
                match u32::try_from(price.cost) {
                    Ok(cost) => {
                        cache
                            .fill_base_price(&price.ticket_type, cost, generation)
                            .await;
                    }
                    Err(_) => warn!(
                        "Skipping negative base price for ticket type: {}",
                        price.ticket_type
                    ),
                }
            }
        }
        Err(e) => warn!("Failed to warm base price cache: {}", e),
    }

    // moka updates entry counts lazily
    cache.base_prices.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
