use thiserror::Error;

use crate::clients::models::common::WeightUnit;
use crate::clients::models::requests::CreatePlanRequest;

pub const MIN_AGE: u32 = 13;
pub const MAX_AGE: u32 = 70;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("age must be between 13 and 70, got {0}")]
    AgeOutOfRange(u32),
    #[error(
        "weight cut of {difference:.1} {unit} is too aggressive; the maximum recommended is {max} {unit}"
    )]
    CutTooAggressive {
        difference: f64,
        max: f64,
        unit: WeightUnit,
    },
}

pub fn validate_profile(profile: &CreatePlanRequest) -> Result<(), ValidationError> {
    let required = [
        ("name", &profile.name),
        ("sport", &profile.sport),
        ("training schedule", &profile.training_schedule),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let positive = [
        ("height", profile.height),
        ("current weight", profile.current_weight),
        ("desired weight", profile.desired_weight),
    ];
    for (field, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(ValidationError::NotPositive(field));
        }
    }

    if !(MIN_AGE..=MAX_AGE).contains(&profile.age) {
        return Err(ValidationError::AgeOutOfRange(profile.age));
    }

    let difference = (profile.current_weight - profile.desired_weight).abs();
    let max = profile.weight_unit.max_safe_total_loss();
    if difference > max {
        return Err(ValidationError::CutTooAggressive {
            difference,
            max,
            unit: profile.weight_unit,
        });
    }

    Ok(())
}
