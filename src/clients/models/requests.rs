use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::models::common::{DayPlan, Gender, HeightUnit, WeightUnit};

/// Athlete profile submitted when creating a plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub name: String,
    pub height: f64,
    pub height_unit: HeightUnit,
    pub current_weight: f64,
    pub weight_unit: WeightUnit,
    pub gender: Gender,
    pub age: u32,
    pub sport: String,
    pub desired_weight: f64,
    pub weigh_in_date: NaiveDate,
    pub training_schedule: String,
    #[serde(default)]
    pub food_preferences: Option<String>,
}

/// Row inserted into `weight_cutting_plans`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPlan {
    pub user_id: String,
    pub name: String,
    pub height: f64,
    pub height_unit: HeightUnit,
    pub current_weight: f64,
    pub weight_unit: WeightUnit,
    pub gender: Gender,
    pub age: u32,
    pub sport: String,
    pub desired_weight: f64,
    pub weigh_in_date: NaiveDate,
    pub training_schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_preferences: Option<String>,
    pub ai_generated_plan: Vec<DayPlan>,
}

impl NewPlan {
    pub fn from_request(user_id: &str, request: CreatePlanRequest, days: Vec<DayPlan>) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: request.name.trim().to_string(),
            height: request.height,
            height_unit: request.height_unit,
            current_weight: request.current_weight,
            weight_unit: request.weight_unit,
            gender: request.gender,
            age: request.age,
            sport: request.sport.trim().to_string(),
            desired_weight: request.desired_weight,
            weigh_in_date: request.weigh_in_date,
            training_schedule: request.training_schedule.trim().to_string(),
            food_preferences: request
                .food_preferences
                .map(|preferences| preferences.trim().to_string())
                .filter(|preferences| !preferences.is_empty()),
            ai_generated_plan: days,
        }
    }
}

/// PATCH body replacing the stored days of a plan.
#[derive(Debug, Serialize)]
pub struct PlanDaysUpdate<'a> {
    pub ai_generated_plan: &'a [DayPlan],
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "planData", default)]
    pub plan_data: Option<Vec<DayPlan>>,
}
