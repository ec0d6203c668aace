use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("plan {0} not found")]
    PlanNotFound(String),
    #[error("plan {0} has no generated days yet")]
    PlanNotGenerated(String),
    #[error("Failed to get AI response: {0}")]
    Upstream(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PlanNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PlanNotGenerated(_) => StatusCode::CONFLICT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::BadRequest(_) => "Bad request",
            ApiError::Validation(_) => "Invalid athlete profile",
            ApiError::PlanNotFound(_) => "Plan not found",
            ApiError::PlanNotGenerated(_) => "Plan not generated",
            ApiError::Upstream(_) => "Failed to get AI response",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request.failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request.rejected");
        }

        let body = Json(json!({
            "error": self.label(),
            "details": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Validation(ValidationError::AgeOutOfRange(9)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PlanNotFound("p1".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream(anyhow::anyhow!("timeout")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(anyhow::anyhow!("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_carry_details() {
        assert_eq!(
            ApiError::Upstream(anyhow::anyhow!("timeout")).to_string(),
            "Failed to get AI response: timeout"
        );
        assert_eq!(
            ApiError::from(ValidationError::MissingField("name")).to_string(),
            "name is required"
        );
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ApiError::PlanNotGenerated("p1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
