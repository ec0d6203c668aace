use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::api::error::ApiError;

pub const OWNER_HEADER: &str = "x-user-id";

pub fn authenticate_request(headers: &HeaderMap, api_token: &str) -> Result<(), ApiError> {
    let auth_str = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    if token != api_token {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

/// Owner identifier for plan lookups, taken from `X-User-Id`.
pub fn owner_id(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(OWNER_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(str::trim)
        .filter(|owner| !owner.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::BadRequest(format!("missing {} header", OWNER_HEADER)))
}
