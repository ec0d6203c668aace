use crate::clients::models::common::{Hydration, HydrationSchedule};
use crate::services::quantity_matcher::rewrite_mentions;
use crate::services::unit_conversion::{
    Unit, grams_to_ounces, liters_to_ounces, ounces_to_grams, ounces_to_liters,
};

/// Rewrites food quantities between ounces and grams. Any other unit pair
/// returns the text unchanged.
pub fn convert_text(text: &str, from: Unit, to: Unit) -> String {
    let convert: fn(f64) -> f64 = match (from, to) {
        (Unit::Oz, Unit::G) => ounces_to_grams,
        (Unit::G, Unit::Oz) => grams_to_ounces,
        _ => return text.to_string(),
    };

    rewrite_mentions(text, from, to, convert)
}

/// Rewrites water quantities between ounces and liters. Only the amount of a
/// schedule is touched; its timing list is copied as-is, and a schedule with
/// no amount comes back unchanged.
pub fn convert_hydration(hydration: &Hydration, from: Unit, to: Unit) -> Hydration {
    let convert: fn(f64) -> f64 = match (from, to) {
        (Unit::Oz, Unit::L) => ounces_to_liters,
        (Unit::L, Unit::Oz) => liters_to_ounces,
        _ => return hydration.clone(),
    };

    match hydration {
        Hydration::Text(text) => Hydration::Text(rewrite_mentions(text, from, to, convert)),
        Hydration::Schedule(schedule) if schedule.amount.trim().is_empty() => hydration.clone(),
        Hydration::Schedule(schedule) => Hydration::Schedule(HydrationSchedule {
            amount: rewrite_mentions(&schedule.amount, from, to, convert),
            ..schedule.clone()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_unit_returns_text_unchanged() {
        for unit in [Unit::Oz, Unit::G, Unit::L] {
            let text = "4 oz chicken, 150g rice, 2 l water";
            assert_eq!(convert_text(text, unit, unit), text);
        }
    }

    #[test]
    fn test_text_without_mentions_is_untouched() {
        let text = "Grilled chicken with steamed broccoli and 1 cup rice";
        assert_eq!(convert_text(text, Unit::Oz, Unit::G), text);
        assert_eq!(convert_text(text, Unit::G, Unit::Oz), text);
    }

    #[test]
    fn test_unsupported_pair_is_noop() {
        let text = "150g rice";
        assert_eq!(convert_text(text, Unit::G, Unit::L), text);
        assert_eq!(convert_text("4 oz chicken", Unit::Oz, Unit::L), "4 oz chicken");

        let hydration = Hydration::Text("64 oz".to_string());
        assert_eq!(convert_hydration(&hydration, Unit::Oz, Unit::G), hydration);
    }

    #[test]
    fn test_ounces_to_grams_and_back() {
        assert_eq!(
            convert_text("4 oz chicken", Unit::Oz, Unit::G),
            "113.4g chicken"
        );
        assert_eq!(
            convert_text("113.4g chicken", Unit::G, Unit::Oz),
            "4oz chicken"
        );
    }

    #[test]
    fn test_every_mention_in_text_is_converted() {
        assert_eq!(
            convert_text(
                "6 oz chicken breast, 4 oz sweet potato, 2 oz avocado",
                Unit::Oz,
                Unit::G
            ),
            "170.1g chicken breast, 113.4g sweet potato, 56.7g avocado"
        );
    }

    #[test]
    fn test_pounds_survive_liter_conversion() {
        let hydration = Hydration::Text("cut 5 lbs this week".to_string());
        assert_eq!(convert_hydration(&hydration, Unit::L, Unit::Oz), hydration);
        assert_eq!(convert_hydration(&hydration, Unit::Oz, Unit::L), hydration);
    }

    #[test]
    fn test_range_converts_both_bounds() {
        let hydration = Hydration::Text("80-100 oz".to_string());
        assert_eq!(
            convert_hydration(&hydration, Unit::Oz, Unit::L),
            Hydration::Text("2.4-3l".to_string())
        );
    }

    #[test]
    fn test_schedule_keeps_timing() {
        let timing = vec!["upon waking".to_string(), "pre-workout".to_string()];
        let hydration = Hydration::Schedule(HydrationSchedule {
            amount: "64 oz".to_string(),
            timing: timing.clone(),
        });

        let converted = convert_hydration(&hydration, Unit::Oz, Unit::L);

        assert_eq!(
            converted,
            Hydration::Schedule(HydrationSchedule {
                amount: "1.9l".to_string(),
                timing,
            })
        );
    }

    #[test]
    fn test_empty_hydration_passes_through() {
        let hydration = Hydration::Text(String::new());
        assert_eq!(convert_hydration(&hydration, Unit::Oz, Unit::L), hydration);
    }

    #[test]
    fn test_schedule_without_amount_passes_through() {
        let hydration = Hydration::Schedule(HydrationSchedule {
            amount: String::new(),
            timing: vec!["upon waking".to_string()],
        });
        assert_eq!(convert_hydration(&hydration, Unit::Oz, Unit::L), hydration);
    }

    #[test]
    fn test_spelled_out_units_are_left_alone() {
        let hydration = Hydration::Text("2 liters with 2 large lemons".to_string());
        assert_eq!(convert_hydration(&hydration, Unit::L, Unit::Oz), hydration);
        assert_eq!(
            convert_text("8 grams of salt, 4 ounces of rice", Unit::G, Unit::Oz),
            "8 grams of salt, 4 ounces of rice"
        );
    }

    #[test]
    fn test_liters_back_to_ounces() {
        let hydration = Hydration::Text("Drink 2 L before noon, then 1.5l".to_string());
        assert_eq!(
            convert_hydration(&hydration, Unit::L, Unit::Oz),
            Hydration::Text("Drink 67.6oz before noon, then 50.7oz".to_string())
        );
    }
}
