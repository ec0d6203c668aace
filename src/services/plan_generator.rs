use chrono::{Days, NaiveDate};

use crate::clients::models::common::{DayPlan, Hydration, HydrationSchedule, Meals, Workout};
use crate::clients::models::requests::CreatePlanRequest;

pub const PLAN_LENGTH_DAYS: usize = 7;

struct DayTemplate {
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
    snacks: Option<&'static str>,
    water: &'static str,
    timing: &'static [&'static str],
    activity: &'static str,
    duration: &'static str,
    recovery: &'static [&'static str],
}

// Water load for three days, hold, then taper into weigh-in. All quantities
// are written in ounces, and only `water` carries an amount.
const WEEK_TEMPLATE: [DayTemplate; PLAN_LENGTH_DAYS] = [
    DayTemplate {
        breakfast: "4 oz egg whites, 1/2 cup oatmeal with berries",
        lunch: "6 oz grilled chicken breast, 1 cup white rice, steamed spinach",
        dinner: "5 oz salmon, 4 oz sweet potato, asparagus",
        snacks: Some("1 oz almonds, 1 apple"),
        water: "128 oz",
        timing: &["upon waking", "before noon", "through training", "by evening"],
        activity: "Technical drilling and moderate conditioning",
        duration: "60 min",
        recovery: &["8 hours of sleep", "10 min stretching"],
    },
    DayTemplate {
        breakfast: "4 oz egg whites, 1 slice whole-grain toast",
        lunch: "6 oz turkey breast, mixed greens, 1/2 cup quinoa",
        dinner: "5 oz lean beef, 4 oz roasted potatoes, green beans",
        snacks: Some("6 oz Greek yogurt"),
        water: "128 oz",
        timing: &["upon waking", "before noon", "through training", "by evening"],
        activity: "Sparring rounds",
        duration: "45 min",
        recovery: &["8 hours of sleep", "Foam rolling 10 min"],
    },
    DayTemplate {
        breakfast: "4 oz egg whites, 1/2 cup oatmeal",
        lunch: "6 oz grilled chicken breast, 1/2 cup white rice, cucumber salad",
        dinner: "5 oz white fish, steamed zucchini",
        snacks: Some("1 oz almonds"),
        water: "128 oz",
        timing: &["upon waking", "before noon", "through training", "by evening"],
        activity: "Strength circuit and light pad work",
        duration: "50 min",
        recovery: &["8 hours of sleep", "Contrast shower"],
    },
    DayTemplate {
        breakfast: "4 oz egg whites, 1/2 banana",
        lunch: "5 oz grilled chicken breast, 1/2 cup white rice",
        dinner: "5 oz white fish, steamed carrots",
        snacks: None,
        water: "96-112 oz",
        timing: &["upon waking", "before noon", "remaining by 6 PM"],
        activity: "Light technical work",
        duration: "40 min",
        recovery: &["8 hours of sleep", "Limit sodium to 1,500 mg"],
    },
    DayTemplate {
        breakfast: "3 oz egg whites, 1/2 cup cream of rice",
        lunch: "4 oz grilled chicken breast, 1/2 cup white rice",
        dinner: "4 oz white fish, 1/2 cup white rice",
        snacks: None,
        water: "64 oz",
        timing: &["upon waking", "before noon", "last drink by 4 PM"],
        activity: "Shadowboxing and mobility",
        duration: "30 min",
        recovery: &["8 hours of sleep", "Low-fiber meals only"],
    },
    DayTemplate {
        breakfast: "3 oz egg whites, 1 rice cake with honey",
        lunch: "3 oz grilled chicken breast, 1 rice cake",
        dinner: "3 oz white fish",
        snacks: None,
        water: "32 oz",
        timing: &["upon waking", "before noon", "small sips as needed"],
        activity: "Light sweat session in layers",
        duration: "20-30 min",
        recovery: &["Monitor weight every morning", "Warm bath 15 min"],
    },
    DayTemplate {
        breakfast: "Nothing until weigh-in",
        lunch: "After weigh-in: 16 oz electrolyte drink, 1 cup white rice",
        dinner: "6 oz grilled chicken breast, 1 cup white rice, 1 banana",
        snacks: Some("2 oz dried fruit, rice cakes"),
        water: "8-16 oz sips before weigh-in",
        timing: &["small sips only before weigh-in", "rehydrate steadily after weigh-in"],
        activity: "Weigh-in, then rest",
        duration: "n/a",
        recovery: &["Rehydrate gradually over 4 hours", "Sleep early"],
    },
];

/// Builds the week-long cut from the template, walking the target weight in
/// equal steps from the current weight to the desired weight.
pub fn generate_plan(profile: &CreatePlanRequest, start_date: NaiveDate) -> Vec<DayPlan> {
    let workout_time = profile.training_schedule.trim().to_string();

    WEEK_TEMPLATE
        .iter()
        .enumerate()
        .map(|(index, template)| DayPlan {
            date: start_date + Days::new(index as u64),
            meals: Meals {
                breakfast: template.breakfast.to_string(),
                lunch: template.lunch.to_string(),
                dinner: template.dinner.to_string(),
                snacks: template.snacks.map(str::to_string),
            },
            hydration: Some(Hydration::Schedule(HydrationSchedule {
                amount: template.water.to_string(),
                timing: template.timing.iter().map(|t| t.to_string()).collect(),
            })),
            workout: Workout {
                time: workout_time.clone(),
                activity: template.activity.to_string(),
                duration: template.duration.to_string(),
            },
            recovery: template.recovery.iter().map(|r| r.to_string()).collect(),
            target_weight: Some(interpolate_target_weight(
                profile.current_weight,
                profile.desired_weight,
                index,
                PLAN_LENGTH_DAYS,
            )),
        })
        .collect()
}

/// Target for `day_index` (0-based) out of `total_days`, rounded to hundredths.
/// The last day lands exactly on `desired`.
pub fn interpolate_target_weight(
    current: f64,
    desired: f64,
    day_index: usize,
    total_days: usize,
) -> f64 {
    if total_days == 0 || day_index + 1 >= total_days {
        return desired;
    }

    let progress = (day_index + 1) as f64 / total_days as f64;
    let target = current - (current - desired) * progress;
    (target * 100.0).round() / 100.0
}
