use std::sync::Arc;

use crate::api::AppState;
use crate::clients::gemini::GeminiClient;
use crate::clients::store::{MemoryPlanStore, PlanStore};
use crate::clients::supabase::SupabaseClient;
use crate::config::Config;
use crate::services::nutrition_chat::NutritionChatService;

mod api;
mod clients;
mod config;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let plan_store: Arc<dyn PlanStore> = match &config.supabase {
        Some(supabase) => {
            tracing::info!(url = %supabase.url, "store.supabase");
            Arc::new(SupabaseClient::new(supabase)?)
        }
        None => {
            tracing::warn!("store.memory: SUPABASE_URL/SUPABASE_KEY not set, plans are not persisted");
            Arc::new(MemoryPlanStore::new())
        }
    };

    let gemini_client = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )?;
    let chat_service = NutritionChatService::new(Arc::new(gemini_client));

    let state = AppState {
        config: config.clone(),
        plan_store,
        chat_service,
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
