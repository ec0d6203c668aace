use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::clients::models::common::MealSlot;

/// A plan edit proposed by the assistant, applied only when the user asks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub changes: PlanChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanChange {
    /// 1-based day number; `None` targets every day.
    #[serde(default)]
    pub day: Option<u32>,
    pub field: PlanField,
    pub action: ChangeAction,
    pub content: ChangeContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanField {
    Meals,
    Workout,
    Hydration,
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Replace,
    Add,
    Modify,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeContent {
    Text(String),
    IngredientSwap(IngredientSwap),
    Meals(BTreeMap<MealSlot, String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSwap {
    pub old_ingredient: String,
    pub new_ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealSlot>,
}
