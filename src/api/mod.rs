pub mod auth;
pub mod chat;
pub mod error;
pub mod plans;

use axum::Router;
use axum::http::{HeaderName, header};
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::clients::store::PlanStore;
use crate::config::Config;
use crate::services::nutrition_chat::NutritionChatService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub plan_store: Arc<dyn PlanStore>,
    pub chat_service: NutritionChatService,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static(auth::OWNER_HEADER),
        ]);

    Router::new()
        .route("/", get(|| async { "Weight cut planner is running!" }))
        .route("/plans", get(plans::list_plans).post(plans::create_plan))
        .route(
            "/plans/{plan_id}",
            get(plans::get_plan).delete(plans::delete_plan),
        )
        .route("/plans/{plan_id}/suggestions", post(plans::apply_suggestion))
        .route(
            "/plans/{plan_id}/toggle/{unit}",
            get(plans::toggle_plan_units),
        )
        .route("/chat", post(chat::handle_chat))
        .layer(cors)
        .with_state(state)
}
