//! Lift pass pricing module.
//!
//! The evaluator (`calculators`, `calendar`) is pure. Everything that talks
//! to the price store or HTTP lives in `services`, `store` and `routes`.

pub mod calculators;
pub mod calendar;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used items
pub use calculators::{ceil_cost, compute_cost, weekday_reduction};
pub use calendar::{parse_date, CalendarDate, HolidayCalendar, HolidaySet};
pub use models::{PricingError, TicketType};
pub use routes::router;
pub use store::{InMemoryPriceStore, PgPriceStore, PriceStore, StoreError};
