use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of a cutting plan, in the JSON shape stored in
/// `weight_cutting_plans.ai_generated_plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    pub meals: Meals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydration: Option<Hydration>,
    #[serde(default)]
    pub workout: Workout,
    #[serde(default)]
    pub recovery: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snacks: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];
}

impl Meals {
    /// The text of a meal that is present. Snacks are absent when unset.
    pub fn slot_mut(&mut self, slot: MealSlot) -> Option<&mut String> {
        match slot {
            MealSlot::Breakfast => Some(&mut self.breakfast),
            MealSlot::Lunch => Some(&mut self.lunch),
            MealSlot::Dinner => Some(&mut self.dinner),
            MealSlot::Snacks => self.snacks.as_mut(),
        }
    }
}

/// Stored plans carry hydration either as a sentence or as an amount with a
/// list of drinking times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hydration {
    Text(String),
    Schedule(HydrationSchedule),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationSchedule {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub timing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn max_safe_daily_loss(self) -> f64 {
        match self {
            WeightUnit::Lbs => 2.0,
            WeightUnit::Kg => 0.9,
        }
    }

    pub fn max_safe_total_loss(self) -> f64 {
        match self {
            WeightUnit::Lbs => 15.0,
            WeightUnit::Kg => 7.0,
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Ft,
    Cm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}
