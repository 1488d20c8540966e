use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

use crate::services::ServiceError;

/// Error surface of the staking routes.
#[derive(Debug, Error)]
pub enum StakingApiError {
    /// No service is registered for the requested chain.
    #[error("not supported chain network: {0}")]
    UnsupportedChain(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl StakingApiError {
    fn status(&self) -> StatusCode {
        match self {
            StakingApiError::UnsupportedChain(_) => StatusCode::BAD_REQUEST,
            StakingApiError::Service(err) => match err {
                ServiceError::InvalidAccount(_) | ServiceError::InvalidRequest(_) => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::CollatorNotFound(_) | ServiceError::StorageMissing(_) => {
                    StatusCode::NOT_FOUND
                }
                ServiceError::HistoryUnavailable => StatusCode::NOT_IMPLEMENTED,
                ServiceError::Rpc(_) => StatusCode::BAD_GATEWAY,
                ServiceError::Decode(_) | ServiceError::HeaderFieldMissing(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for StakingApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
