//! Response DTOs for pricing API endpoints.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response for `GET /prices`
#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub cost: u32,
}

/// Response for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: CacheStats,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
