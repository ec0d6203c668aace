use regex::{NoExpand, RegexBuilder};

use crate::clients::models::chat::{ChangeAction, ChangeContent, IngredientSwap, PlanChange, PlanField};
use crate::clients::models::common::{DayPlan, Hydration, MealSlot, Meals};

/// Applies an assistant suggestion to a copy of the plan. Day numbers are
/// 1-based; a missing day applies the change to every day.
pub fn apply_change(days: &[DayPlan], change: &PlanChange) -> Vec<DayPlan> {
    let mut updated = days.to_vec();

    match change.day {
        Some(day) => {
            let target = (day as usize)
                .checked_sub(1)
                .and_then(|index| updated.get_mut(index));
            match target {
                Some(day_plan) => apply_to_day(day_plan, change),
                None => tracing::warn!(day, plan_days = days.len(), "suggestion.day_out_of_range"),
            }
        }
        None => updated
            .iter_mut()
            .for_each(|day_plan| apply_to_day(day_plan, change)),
    }

    updated
}

fn apply_to_day(day: &mut DayPlan, change: &PlanChange) {
    match (change.field, change.action, &change.content) {
        (PlanField::Meals, ChangeAction::Modify, ChangeContent::IngredientSwap(swap)) => {
            swap_ingredient(&mut day.meals, swap)
        }
        (PlanField::Meals, ChangeAction::Replace, ChangeContent::Meals(replacements)) => {
            for (slot, text) in replacements {
                if let Some(meal) = day.meals.slot_mut(*slot) {
                    *meal = text.clone();
                }
            }
        }
        (PlanField::Meals, ChangeAction::Add, ChangeContent::Text(text)) => {
            day.meals.snacks = Some(match day.meals.snacks.take() {
                Some(existing) if !existing.is_empty() => format!("{}, {}", existing, text),
                _ => text.clone(),
            });
        }
        (PlanField::Recovery, ChangeAction::Add, ChangeContent::Text(text)) => {
            day.recovery.push(text.clone())
        }
        (field, ChangeAction::Replace | ChangeAction::Add, ChangeContent::Text(text))
            if field != PlanField::Meals =>
        {
            replace_field(day, field, text)
        }
        (field, action, _) => {
            tracing::debug!(?field, ?action, date = %day.date, "suggestion.unsupported_change");
        }
    }
}

fn replace_field(day: &mut DayPlan, field: PlanField, text: &str) {
    match field {
        PlanField::Recovery => day.recovery = vec![text.to_string()],
        PlanField::Hydration => day.hydration = Some(Hydration::Text(text.to_string())),
        PlanField::Workout => day.workout.activity = text.to_string(),
        PlanField::Meals => {}
    }
}

fn swap_ingredient(meals: &mut Meals, swap: &IngredientSwap) {
    let old = swap.old_ingredient.trim();
    if old.is_empty() || swap.new_ingredient.trim().is_empty() {
        return;
    }

    let pattern = match RegexBuilder::new(&regex::escape(old))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!(error = %e, ingredient = %old, "suggestion.invalid_ingredient");
            return;
        }
    };

    let slots: &[MealSlot] = match &swap.meal_type {
        Some(slot) => std::slice::from_ref(slot),
        None => &MealSlot::ALL,
    };

    for slot in slots {
        if let Some(meal) = meals.slot_mut(*slot) {
            let replaced = pattern
                .replace_all(meal.as_str(), NoExpand(&swap.new_ingredient))
                .into_owned();
            *meal = replaced;
        }
    }
}
