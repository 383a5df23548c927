//! Price store: base prices per ticket type and the holiday calendar.
//!
//! The HTTP layer talks to a `PriceStore`; the evaluator never does.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

use super::models::{BasePrice, HolidayRow};
use super::queries;

/// Price store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown ticket type: {ticket_type}")]
    UnknownTicketType { ticket_type: String },

    #[error("Cost {cost} is out of range for ticket type {ticket_type}")]
    CostOutOfRange { ticket_type: String, cost: u32 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage backend for base prices and holidays
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Insert or replace the base cost of a ticket type
    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<(), StoreError>;

    /// Look up the base cost of a ticket type
    async fn find_base_price_by_type(&self, ticket_type: &str) -> Result<BasePrice, StoreError>;

    /// Full holiday snapshot
    async fn get_holidays(&self) -> Result<Vec<HolidayRow>, StoreError>;

    /// All base prices, ordered by ticket type
    async fn list_base_prices(&self) -> Result<Vec<BasePrice>, StoreError>;
}

/// PostgreSQL-backed price store
#[derive(Debug, Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<(), StoreError> {
        let cost = i32::try_from(cost).map_err(|_| StoreError::CostOutOfRange {
            ticket_type: ticket_type.to_string(),
            cost,
        })?;
        queries::upsert_base_price(&self.pool, ticket_type, cost).await?;
        Ok(())
    }

    async fn find_base_price_by_type(&self, ticket_type: &str) -> Result<BasePrice, StoreError> {
        queries::find_base_price_by_type(&self.pool, ticket_type)
            .await?
            .ok_or_else(|| StoreError::UnknownTicketType {
                ticket_type: ticket_type.to_string(),
            })
    }

    async fn get_holidays(&self) -> Result<Vec<HolidayRow>, StoreError> {
        Ok(queries::get_holidays(&self.pool).await?)
    }

    async fn list_base_prices(&self) -> Result<Vec<BasePrice>, StoreError> {
        Ok(queries::get_all_base_prices(&self.pool).await?)
    }
}

/// In-process price store, seeded explicitly by the caller
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    prices: RwLock<BTreeMap<String, i32>>,
    holidays: RwLock<BTreeSet<String>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the default lift pass price list and holidays
    pub fn with_defaults() -> Self {
        Self::with_data(
            [("1jour", 35), ("night", 19)],
            ["2019-02-18", "2019-02-25", "2019-03-04"],
        )
    }

    pub fn with_data<'a>(
        prices: impl IntoIterator<Item = (&'a str, i32)>,
        holidays: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            prices: RwLock::new(
                prices
                    .into_iter()
                    .map(|(t, c)| (t.to_string(), c))
                    .collect(),
            ),
            holidays: RwLock::new(holidays.into_iter().map(str::to_string).collect()),
        }
    }

    pub async fn add_holiday(&self, holiday: &str) {
        self.holidays.write().await.insert(holiday.to_string());
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<(), StoreError> {
        let cost = i32::try_from(cost).map_err(|_| StoreError::CostOutOfRange {
            ticket_type: ticket_type.to_string(),
            cost,
        })?;
        self.prices
            .write()
            .await
            .insert(ticket_type.to_string(), cost);
        Ok(())
    }

    async fn find_base_price_by_type(&self, ticket_type: &str) -> Result<BasePrice, StoreError> {
        self.prices
            .read()
            .await
            .get(ticket_type)
            .map(|&cost| BasePrice {
                ticket_type: ticket_type.to_string(),
                cost,
            })
            .ok_or_else(|| StoreError::UnknownTicketType {
                ticket_type: ticket_type.to_string(),
            })
    }

    async fn get_holidays(&self) -> Result<Vec<HolidayRow>, StoreError> {
        Ok(self
            .holidays
            .read()
            .await
            .iter()
            .map(HolidayRow::new)
            .collect())
    }

    async fn list_base_prices(&self) -> Result<Vec<BasePrice>, StoreError> {
        Ok(self
            .prices
            .read()
            .await
            .iter()
            .map(|(ticket_type, &cost)| BasePrice {
                ticket_type: ticket_type.clone(),
                cost,
            })
            .collect())
    }
}
