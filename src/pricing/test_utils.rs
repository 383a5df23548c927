//! Test helpers for interleaving store reads with writes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

use super::models::{BasePrice, HolidayRow};
use super::store::{InMemoryPriceStore, PriceStore, StoreError};

/// Wraps an in-memory store and parks the first base price read
/// (`find_base_price_by_type` or `list_base_prices`) after it has read
/// from the inner store, until the test calls [`PausingStore::resume`].
pub struct PausingStore {
    inner: InMemoryPriceStore,
    pause_next_read: AtomicBool,
    read_done: Notify,
    resume: Notify,
}

impl PausingStore {
    pub fn new(inner: InMemoryPriceStore) -> Self {
        Self {
            inner,
            pause_next_read: AtomicBool::new(true),
            read_done: Notify::new(),
            resume: Notify::new(),
        }
    }

    /// Wait until the paused read has its (now old) value in hand
    pub async fn wait_for_read(&self) {
        self.read_done.notified().await;
    }

    /// Let the paused read return
    pub fn resume(&self) {
        self.resume.notify_one();
    }

    async fn maybe_pause(&self) {
        if self.pause_next_read.swap(false, Ordering::SeqCst) {
            self.read_done.notify_one();
            self.resume.notified().await;
        }
    }
}

#[async_trait]
impl PriceStore for PausingStore {
    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<(), StoreError> {
        self.inner.set_base_price(ticket_type, cost).await
    }

    async fn find_base_price_by_type(&self, ticket_type: &str) -> Result<BasePrice, StoreError> {
        let price = self.inner.find_base_price_by_type(ticket_type).await;
        self.maybe_pause().await;
        price
    }

    async fn get_holidays(&self) -> Result<Vec<HolidayRow>, StoreError> {
        self.inner.get_holidays().await
    }

    async fn list_base_prices(&self) -> Result<Vec<BasePrice>, StoreError> {
        let prices = self.inner.list_base_prices().await;
        self.maybe_pause().await;
        prices
    }
}
