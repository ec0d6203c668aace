use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::api::AppState;
use crate::api::auth::authenticate_request;
use crate::api::error::ApiError;
use crate::clients::models::requests::ChatRequest;
use crate::clients::models::responses::ChatResponse;

pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    authenticate_request(&headers, &state.config.api_token)?;

    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is required".to_string()));
    }

    tracing::info!(
        has_plan = request.plan_data.is_some(),
        "chat.received"
    );

    let response = state
        .chat_service
        .reply(request)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(response))
}
