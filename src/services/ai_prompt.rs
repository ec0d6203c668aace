use crate::clients::models::common::{DayPlan, Hydration};

const COACH_PROMPT: &str = r#"You are a knowledgeable nutrition and weight cutting coach. You help athletes with their nutrition plans, provide food alternatives, and offer safe weight cutting advice. Always prioritize athlete health and safety.

Key guidelines:
- Provide practical, actionable advice
- Suggest healthy food alternatives when requested
- Never recommend dangerous rapid weight loss methods
- Keep responses concise but informative
- If asked about substituting foods, provide multiple alternatives with similar nutritional profiles
- Write every food and water quantity in ounces (oz)

IMPORTANT: When you provide suggestions that can be applied to the user's plan (like adding workouts, changing meals, adjusting hydration), format your response as JSON with this structure:
{
  "response": "Your regular conversational response",
  "actionable": true,
  "suggestion": {
    "title": "Brief title of the change",
    "description": "What will be changed",
    "changes": {
      "day": number (1-7, or null for all days),
      "field": "meals" | "workout" | "hydration" | "recovery",
      "action": "replace" | "add" | "modify",
      "content": "The new content or modification"
    }
  }
}

For ingredient swaps use "action": "modify" with content {"oldIngredient": "...", "newIngredient": "...", "mealType": "breakfast" | "lunch" | "dinner" | "snacks" | null}.
To replace whole meals use "action": "replace" with content {"breakfast": "...", "lunch": "..."} naming only the meals that change.

If your response is just informational without actionable changes, respond normally without JSON formatting."#;

pub fn build_coach_system_prompt(plan: Option<&[DayPlan]>) -> String {
    let mut prompt = COACH_PROMPT.to_string();

    if let Some(days) = plan.filter(|days| !days.is_empty()) {
        prompt.push_str(&format!(
            "\n\nCurrent user's plan context: The user has a {}-day weight cutting plan with daily meals, hydration, and workout recommendations. Use this context when providing advice.\n\n",
            days.len()
        ));
        prompt.push_str(&format_plan_for_prompt(days));
    }

    prompt
}

pub fn format_plan_for_prompt(days: &[DayPlan]) -> String {
    days.iter()
        .enumerate()
        .map(|(index, day)| {
            let mut block = format!("Day {} ({})", index + 1, day.date);
            if let Some(target) = day.target_weight {
                block.push_str(&format!(" - target {:.1}", target));
            }
            block.push('\n');
            block.push_str(&format!("  Breakfast: {}\n", day.meals.breakfast));
            block.push_str(&format!("  Lunch: {}\n", day.meals.lunch));
            block.push_str(&format!("  Dinner: {}\n", day.meals.dinner));
            if let Some(snacks) = &day.meals.snacks {
                block.push_str(&format!("  Snacks: {}\n", snacks));
            }
            if let Some(hydration) = &day.hydration {
                block.push_str(&format!("  Hydration: {}\n", format_hydration(hydration)));
            }
            if !day.workout.activity.is_empty() {
                block.push_str(&format!(
                    "  Workout: {} ({})\n",
                    day.workout.activity, day.workout.duration
                ));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("")
}

fn format_hydration(hydration: &Hydration) -> String {
    match hydration {
        Hydration::Text(text) => text.clone(),
        Hydration::Schedule(schedule) if schedule.timing.is_empty() => schedule.amount.clone(),
        Hydration::Schedule(schedule) => {
            format!("{} ({})", schedule.amount, schedule.timing.join("; "))
        }
    }
}
