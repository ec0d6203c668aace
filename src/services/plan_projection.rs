use serde::Deserialize;
use std::sync::Arc;

use crate::clients::models::common::{DayPlan, Meals};
use crate::services::unit_conversion::{FoodUnit, Unit, UnitPreference, WaterUnit};
use crate::services::unit_rewriter::{convert_hydration, convert_text};

/// Unit every generated plan is written in.
pub const CANONICAL_UNIT: Unit = Unit::Oz;

/// Derives a display copy of `original` in the requested units. Only meal text
/// and hydration change; the input is never modified.
pub fn project(original: &[DayPlan], food_unit: FoodUnit, water_unit: WaterUnit) -> Vec<DayPlan> {
    let food_unit = Unit::from(food_unit);
    let water_unit = Unit::from(water_unit);

    original
        .iter()
        .map(|day| DayPlan {
            meals: Meals {
                breakfast: convert_text(&day.meals.breakfast, CANONICAL_UNIT, food_unit),
                lunch: convert_text(&day.meals.lunch, CANONICAL_UNIT, food_unit),
                dinner: convert_text(&day.meals.dinner, CANONICAL_UNIT, food_unit),
                snacks: day
                    .meals
                    .snacks
                    .as_deref()
                    .map(|snacks| convert_text(snacks, CANONICAL_UNIT, food_unit)),
            },
            hydration: day
                .hydration
                .as_ref()
                .map(|hydration| convert_hydration(hydration, CANONICAL_UNIT, water_unit)),
            ..day.clone()
        })
        .collect()
}

/// A viewing session over one plan. The canonical days are shared read-only,
/// and every unit change re-projects from them rather than from the last
/// display copy.
#[derive(Debug, Clone)]
pub struct PlanView {
    original: Arc<Vec<DayPlan>>,
    units: UnitPreference,
}

/// Which of the two unit switches to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitToggle {
    Food,
    Water,
}

impl PlanView {
    pub fn with_units(original: Arc<Vec<DayPlan>>, units: UnitPreference) -> Self {
        Self { original, units }
    }

    pub fn units(&self) -> UnitPreference {
        self.units
    }

    pub fn display(&self) -> Vec<DayPlan> {
        project(&self.original, self.units.food_unit, self.units.water_unit)
    }

    pub fn toggle_food_unit(&mut self) -> Vec<DayPlan> {
        self.units.food_unit = self.units.food_unit.toggled();
        tracing::debug!(food_unit = ?self.units.food_unit, "plan_view.food_unit_toggled");
        self.display()
    }

    pub fn toggle_water_unit(&mut self) -> Vec<DayPlan> {
        self.units.water_unit = self.units.water_unit.toggled();
        tracing::debug!(water_unit = ?self.units.water_unit, "plan_view.water_unit_toggled");
        self.display()
    }

    pub fn toggle(&mut self, toggle: UnitToggle) -> Vec<DayPlan> {
        match toggle {
            UnitToggle::Food => self.toggle_food_unit(),
            UnitToggle::Water => self.toggle_water_unit(),
        }
    }
}
