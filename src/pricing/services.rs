//! Pricing service functions with store access.
//!
//! These functions resolve the snapshot the evaluator needs (base cost,
//! holiday calendar, visit date) and hand it to the pure calculators.

use tracing::{debug, info};

use crate::cache::AppCache;
use crate::error::{AppError, Result};

use super::calculators::compute_cost;
use super::calendar::{parse_date, HolidaySet};
use super::models::TicketType;
use super::requests::{PriceQuery, SetPriceQuery};
use super::store::PriceStore;

/// Resolve the base cost of a ticket type, going through the cache first.
pub async fn resolve_base_cost(
    store: &dyn PriceStore,
    cache: &AppCache,
    ticket_type: &str,
) -> Result<u32> {
    if let Some(cost) = cache.base_prices.get(ticket_type).await {
        debug!("Cache HIT for base price: {}", ticket_type);
        return Ok(cost);
    }

    debug!("Cache MISS for base price: {}", ticket_type);
    let seen = cache.generation(ticket_type).await;
    let price = store.find_base_price_by_type(ticket_type).await?;
    let cost = u32::try_from(price.cost).map_err(|_| {
        AppError::Internal(format!(
            "Stored base price for {} is negative: {}",
            ticket_type, price.cost
        ))
    })?;

    // Not cached if the price was written while we were reading it
    cache.fill_base_price(ticket_type, cost, seen).await;

    Ok(cost)
}

/// Quote the cost of a lift pass.
///
/// The visit date is parsed before touching the store, so a malformed date
/// is rejected without any lookups.
pub async fn quote_price(
    store: &dyn PriceStore,
    cache: &AppCache,
    query: &PriceQuery,
) -> Result<u32> {
    let date = parse_date(query.date.as_deref())?;
    let base_cost = resolve_base_cost(store, cache, &query.ticket_type).await?;
    let holidays = HolidaySet::from_rows(&store.get_holidays().await?)?;

    let ticket_type = TicketType::parse(&query.ticket_type);
    let cost = compute_cost(query.age, &ticket_type, base_cost, date, &holidays);

    debug!(
        ticket_type = %query.ticket_type,
        age = ?query.age,
        date = ?date.map(|d| d.to_string()),
        base_cost,
        cost,
        "price_quoted"
    );

    Ok(cost)
}

/// Set the base price of a ticket type and drop any cached value for it.
///
/// The store is written before the cache generation is bumped, so readers
/// that started earlier cannot cache the old price.
pub async fn update_base_price(
    store: &dyn PriceStore,
    cache: &AppCache,
    query: &SetPriceQuery,
) -> Result<()> {
    store
        .set_base_price(&query.ticket_type, query.cost)
        .await?;
    cache.invalidate_base_price(&query.ticket_type).await;

    info!(
        ticket_type = %query.ticket_type,
        cost = query.cost,
        "base_price_updated"
    );

    Ok(())
}
