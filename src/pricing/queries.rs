//! Database queries for the lift pass price store.
//!
//! All queries use sqlx runtime-checked `query_as` with bound parameters.

use sqlx::PgPool;

use super::models::{BasePrice, HolidayRow};

/// Insert or update the base price of a ticket type
pub async fn upsert_base_price(
    pool: &PgPool,
    ticket_type: &str,
    cost: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO base_price (type, cost)
        VALUES ($1, $2)
        ON CONFLICT (type) DO UPDATE SET cost = EXCLUDED.cost
        "#,
    )
    .bind(ticket_type)
    .bind(cost)
    .execute(pool)
    .await?;

    Ok(())
}

/// Find the base price of a ticket type
pub async fn find_base_price_by_type(
    pool: &PgPool,
    ticket_type: &str,
) -> Result<Option<BasePrice>, sqlx::Error> {
    let price = sqlx::query_as::<_, BasePrice>(
        r#"
        SELECT type, cost
        FROM base_price
        WHERE type = $1
        "#,
    )
    .bind(ticket_type)
    .fetch_optional(pool)
    .await?;

    Ok(price)
}

/// Get all base prices (for cache warming)
pub async fn get_all_base_prices(pool: &PgPool) -> Result<Vec<BasePrice>, sqlx::Error> {
    let prices = sqlx::query_as::<_, BasePrice>(
        r#"
        SELECT type, cost
        FROM base_price
        ORDER BY type
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(prices)
}

/// Get every recorded holiday, rendered as `YYYY-MM-DD`
pub async fn get_holidays(pool: &PgPool) -> Result<Vec<HolidayRow>, sqlx::Error> {
    let holidays = sqlx::query_as::<_, HolidayRow>(
        r#"
        SELECT to_char(holiday, 'YYYY-MM-DD') AS holiday
        FROM holidays
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(holidays)
}
