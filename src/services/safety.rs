use chrono::NaiveDate;
use serde::Serialize;

use crate::clients::models::common::WeightUnit;

pub const MIN_SAFE_DAYS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SafetyConcern {
    DailyLossTooHigh { daily_loss: f64, max_daily_loss: f64 },
    TotalLossTooHigh { total_loss: f64, max_total_loss: f64 },
    TimelineTooShort { days: i64, min_days: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyAssessment {
    pub days_to_weigh_in: i64,
    pub total_loss: f64,
    pub daily_loss: f64,
    pub weight_unit: WeightUnit,
    pub concerns: Vec<SafetyConcern>,
    pub safe: bool,
}

/// Checks a cut against the daily, total and timeline limits for its unit.
pub fn assess(
    current_weight: f64,
    desired_weight: f64,
    weigh_in_date: NaiveDate,
    weight_unit: WeightUnit,
    today: NaiveDate,
) -> SafetyAssessment {
    let days_to_weigh_in = (weigh_in_date - today).num_days();
    let total_loss = current_weight - desired_weight;
    // A weigh-in today or in the past spreads the whole cut over one day.
    let daily_loss = total_loss / days_to_weigh_in.max(1) as f64;

    let max_daily_loss = weight_unit.max_safe_daily_loss();
    let max_total_loss = weight_unit.max_safe_total_loss();

    let mut concerns = Vec::new();
    if daily_loss > max_daily_loss {
        concerns.push(SafetyConcern::DailyLossTooHigh {
            daily_loss,
            max_daily_loss,
        });
    }
    if total_loss > max_total_loss {
        concerns.push(SafetyConcern::TotalLossTooHigh {
            total_loss,
            max_total_loss,
        });
    }
    if days_to_weigh_in < MIN_SAFE_DAYS {
        concerns.push(SafetyConcern::TimelineTooShort {
            days: days_to_weigh_in,
            min_days: MIN_SAFE_DAYS,
        });
    }

    SafetyAssessment {
        days_to_weigh_in,
        total_loss,
        daily_loss,
        weight_unit,
        safe: concerns.is_empty(),
        concerns,
    }
}
