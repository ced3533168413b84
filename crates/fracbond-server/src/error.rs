//! API errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use fracbond_portfolio::PortfolioError;
use fracbond_pricing::BondError;

/// Errors returned by the request handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A required request field is absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A request field has an unusable value.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The pricing engine rejected the inputs.
    #[error(transparent)]
    Pricing(#[from] BondError),

    /// The portfolio engine failed.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ServerError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::Pricing(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Portfolio(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::MissingField("rating").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServerError::Validation("fractions must be positive".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(BondError::invalid_input("x")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServerError::from(PortfolioError::EmptyUniverse).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ServerError::MissingField("face_value").to_string(),
            "Missing required field: face_value"
        );
        assert_eq!(
            ServerError::from(PortfolioError::EmptyUniverse).to_string(),
            "Bond universe is empty"
        );
    }
}
