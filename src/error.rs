//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::models::PricingError;
use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::store::StoreError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Unknown ticket type: {0}")]
    UnknownTicketType(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownTicketType { ticket_type } => {
                AppError::UnknownTicketType(ticket_type)
            }
            StoreError::Database(e) => AppError::Database(e),
            other @ StoreError::CostOutOfRange { .. } => AppError::BadRequest(other.to_string()),
        }
    }
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Pricing(PricingError::InvalidDateFormat { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_date_format")
            }
            AppError::UnknownTicketType(_) => (StatusCode::NOT_FOUND, "unknown_ticket_type"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => {
                tracing::debug!("Rejected request: {}", other);
                other.to_string()
            }
        };

        let details = match &self {
            AppError::Pricing(PricingError::InvalidDateFormat { value }) => {
                Some(serde_json::json!({ "date": value }))
            }
            AppError::UnknownTicketType(ticket_type) => {
                Some(serde_json::json!({ "type": ticket_type }))
            }
            _ => None,
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
