use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::api::auth::{authenticate_request, owner_id};
use crate::api::error::ApiError;
use crate::clients::models::chat::Suggestion;
use crate::clients::models::requests::{CreatePlanRequest, NewPlan};
use crate::clients::models::responses::{PlanRecord, PlanSummary};
use crate::services::plan_projection::{PlanView, UnitToggle};
use crate::services::safety::{self, SafetyAssessment};
use crate::services::unit_conversion::UnitPreference;
use crate::services::{plan_editor, plan_generator, validation};

/// A stored plan with its days rewritten into the viewer's units.
#[derive(Debug, Serialize)]
pub struct PlanViewResponse {
    #[serde(flatten)]
    pub plan: PlanRecord,
    pub units: UnitPreference,
    pub safety: SafetyAssessment,
}

fn authorize(headers: &HeaderMap, state: &AppState) -> Result<String, ApiError> {
    authenticate_request(headers, &state.config.api_token)?;
    owner_id(headers)
}

pub async fn list_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PlanSummary>>, ApiError> {
    let owner = authorize(&headers, &state)?;

    let plans = state.plan_store.list_plans(&owner).await?;
    tracing::info!(owner = %owner, count = plans.len(), "plans.listed");

    Ok(Json(plans))
}

pub async fn create_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<PlanRecord>), ApiError> {
    let owner = authorize(&headers, &state)?;

    validation::validate_profile(&request)?;

    let days = plan_generator::generate_plan(&request, Utc::now().date_naive());
    let record = state
        .plan_store
        .insert_plan(NewPlan::from_request(&owner, request, days))
        .await?;

    tracing::info!(plan_id = %record.id, owner = %owner, "plan.created");

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<String>,
    Query(units): Query<UnitPreference>,
) -> Result<Json<PlanViewResponse>, ApiError> {
    let owner = authorize(&headers, &state)?;

    let response = view_plan(&state, &plan_id, &owner, units, None).await?;
    Ok(Json(response))
}

/// Flips one unit switch relative to the units in the query string and
/// returns the plan in the resulting units.
pub async fn toggle_plan_units(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((plan_id, toggle)): Path<(String, UnitToggle)>,
    Query(units): Query<UnitPreference>,
) -> Result<Json<PlanViewResponse>, ApiError> {
    let owner = authorize(&headers, &state)?;

    let response = view_plan(&state, &plan_id, &owner, units, Some(toggle)).await?;
    Ok(Json(response))
}

async fn view_plan(
    state: &AppState,
    plan_id: &str,
    owner: &str,
    units: UnitPreference,
    toggle: Option<UnitToggle>,
) -> Result<PlanViewResponse, ApiError> {
    let mut plan = state
        .plan_store
        .get_plan(plan_id, owner)
        .await?
        .ok_or_else(|| ApiError::PlanNotFound(plan_id.to_string()))?;

    let stored_days = plan.ai_generated_plan.take();
    let has_days = stored_days.is_some();

    let mut view = PlanView::with_units(Arc::new(stored_days.unwrap_or_default()), units);
    let days = match toggle {
        Some(toggle) => view.toggle(toggle),
        None => view.display(),
    };
    if has_days {
        plan.ai_generated_plan = Some(days);
    }
    let units = view.units();

    let safety = safety::assess(
        plan.current_weight,
        plan.desired_weight,
        plan.weigh_in_date,
        plan.weight_unit,
        Utc::now().date_naive(),
    );

    tracing::info!(
        %plan_id,
        food_unit = ?units.food_unit,
        water_unit = ?units.water_unit,
        toggled = ?toggle,
        safe = safety.safe,
        "plan.fetched"
    );

    Ok(PlanViewResponse {
        plan,
        units,
        safety,
    })
}

pub async fn delete_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let owner = authorize(&headers, &state)?;

    if !state.plan_store.delete_plan(&plan_id, &owner).await? {
        return Err(ApiError::PlanNotFound(plan_id));
    }

    tracing::info!(%plan_id, "plan.deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn apply_suggestion(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<String>,
    Json(suggestion): Json<Suggestion>,
) -> Result<Json<PlanRecord>, ApiError> {
    let owner = authorize(&headers, &state)?;

    let plan = state
        .plan_store
        .get_plan(&plan_id, &owner)
        .await?
        .ok_or_else(|| ApiError::PlanNotFound(plan_id.clone()))?;

    let days = plan
        .ai_generated_plan
        .filter(|days| !days.is_empty())
        .ok_or_else(|| ApiError::PlanNotGenerated(plan_id.clone()))?;

    let updated_days = plan_editor::apply_change(&days, &suggestion.changes);

    let record = state
        .plan_store
        .update_plan_days(&plan_id, &owner, &updated_days)
        .await?
        .ok_or_else(|| ApiError::PlanNotFound(plan_id.clone()))?;

    tracing::info!(%plan_id, title = %suggestion.title, "plan.suggestion_applied");

    Ok(Json(record))
}
