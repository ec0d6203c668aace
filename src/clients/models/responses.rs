use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::models::chat::Suggestion;
use crate::clients::models::common::{DayPlan, Gender, HeightUnit, WeightUnit};

/// A full `weight_cutting_plans` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
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
    #[serde(default)]
    pub food_preferences: Option<String>,
    #[serde(default)]
    pub ai_generated_plan: Option<Vec<DayPlan>>,
    pub created_at: DateTime<Utc>,
}

// Columns selected for the plan list
pub const PLAN_SUMMARY_COLUMNS: &str =
    "id,name,current_weight,desired_weight,weigh_in_date,weight_unit,sport,created_at";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub current_weight: f64,
    pub desired_weight: f64,
    pub weigh_in_date: NaiveDate,
    pub weight_unit: WeightUnit,
    pub sport: String,
    pub created_at: DateTime<Utc>,
}

impl From<&PlanRecord> for PlanSummary {
    fn from(record: &PlanRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            current_weight: record.current_weight,
            desired_weight: record.desired_weight,
            weigh_in_date: record.weigh_in_date,
            weight_unit: record.weight_unit,
            sport: record.sport.clone(),
            created_at: record.created_at,
        }
    }
}

/// Reply returned to the chat client. `suggestion` is only set when
/// `actionable` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub actionable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl ChatResponse {
    pub fn plain(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            actionable: false,
            suggestion: None,
        }
    }
}
