//! Domain models for lift pass pricing.
//!
//! Row types use sqlx's FromRow derive for direct database deserialization.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Ticket category requested by the visitor.
///
/// Only `night` has its own pricing path. Every other value, including
/// categories the store knows about but the evaluator does not, is priced
/// as a day ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TicketType {
    Day,
    Night,
    Other(String),
}

impl TicketType {
    /// Parse a raw ticket type identifier as stored in `base_price.type`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "night" => TicketType::Night,
            "day" | "1jour" => TicketType::Day,
            other => TicketType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketType::Day => f.write_str("day"),
            TicketType::Night => f.write_str("night"),
            TicketType::Other(raw) => f.write_str(raw),
        }
    }
}

/// Base price from base_price
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BasePrice {
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub cost: i32,
}

/// Holiday from holidays, with the date rendered as `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct HolidayRow {
    pub holiday: String,
}

impl HolidayRow {
    pub fn new(holiday: impl Into<String>) -> Self {
        Self {
            holiday: holiday.into(),
        }
    }
}

/// Pricing error types raised by the evaluator's helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    InvalidDateFormat { value: String },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidDateFormat { value } => {
                write!(f, "Invalid date format: '{}' (expected YYYY-MM-DD)", value)
            }
        }
    }
}

impl std::error::Error for PricingError {}
