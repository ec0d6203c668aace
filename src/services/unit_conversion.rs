use serde::{Deserialize, Serialize};

const GRAMS_PER_OUNCE: f64 = 28.3495;
const LITERS_PER_OUNCE: f64 = 0.0295735;

/// Unit tags that can appear in plan text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Oz,
    G,
    L,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Oz => "oz",
            Unit::G => "g",
            Unit::L => "l",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodUnit {
    #[default]
    Oz,
    G,
}

impl FoodUnit {
    pub fn toggled(self) -> Self {
        match self {
            FoodUnit::Oz => FoodUnit::G,
            FoodUnit::G => FoodUnit::Oz,
        }
    }
}

impl From<FoodUnit> for Unit {
    fn from(unit: FoodUnit) -> Self {
        match unit {
            FoodUnit::Oz => Unit::Oz,
            FoodUnit::G => Unit::G,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterUnit {
    #[default]
    Oz,
    L,
}

impl WaterUnit {
    pub fn toggled(self) -> Self {
        match self {
            WaterUnit::Oz => WaterUnit::L,
            WaterUnit::L => WaterUnit::Oz,
        }
    }
}

impl From<WaterUnit> for Unit {
    fn from(unit: WaterUnit) -> Self {
        match unit {
            WaterUnit::Oz => Unit::Oz,
            WaterUnit::L => Unit::L,
        }
    }
}

/// Display units chosen by the viewer. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreference {
    #[serde(default)]
    pub food_unit: FoodUnit,
    #[serde(default)]
    pub water_unit: WaterUnit,
}

pub fn ounces_to_grams(value: f64) -> f64 {
    round_to_tenth(value * GRAMS_PER_OUNCE)
}

pub fn grams_to_ounces(value: f64) -> f64 {
    round_to_tenth(value / GRAMS_PER_OUNCE)
}

pub fn ounces_to_liters(value: f64) -> f64 {
    round_to_tenth(value * LITERS_PER_OUNCE)
}

pub fn liters_to_ounces(value: f64) -> f64 {
    round_to_tenth(value / LITERS_PER_OUNCE)
}

/// Parses a matched numeric literal. Anything unparseable counts as zero.
pub fn parse_quantity(literal: &str) -> f64 {
    literal
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Renders a converted value without a trailing `.0`, so 4.0 becomes "4".
pub fn format_quantity(value: f64) -> String {
    format!("{}", round_to_tenth(value))
}

fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    // Adding 0.0 folds -0.0 into 0.0 so it never renders as "-0".
    (value * 10.0).round() / 10.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_conversions_round_to_one_decimal() {
        assert_eq!(ounces_to_grams(4.0), 113.4);
        assert_eq!(ounces_to_grams(1.0), 28.3);
        assert_eq!(grams_to_ounces(113.4), 4.0);
        assert_eq!(grams_to_ounces(100.0), 3.5);
    }

    #[test]
    fn test_volume_conversions_round_to_one_decimal() {
        assert_eq!(ounces_to_liters(64.0), 1.9);
        assert_eq!(ounces_to_liters(100.0), 3.0);
        assert_eq!(ounces_to_liters(80.0), 2.4);
        assert_eq!(liters_to_ounces(2.0), 67.6);
    }

    #[test]
    fn test_non_finite_input_converts_to_zero() {
        assert_eq!(ounces_to_grams(f64::NAN), 0.0);
        assert_eq!(ounces_to_liters(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_zero() {
        assert_eq!(parse_quantity("12.5"), 12.5);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity(""), 0.0);
    }

    #[test]
    fn test_format_quantity_drops_trailing_zero() {
        assert_eq!(format_quantity(4.0), "4");
        assert_eq!(format_quantity(113.4), "113.4");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(-0.0), "0");
    }

    #[test]
    fn test_round_trip_stays_within_tolerance() {
        let mut value = 0.1;
        while value <= 1000.0 {
            let mass = grams_to_ounces(ounces_to_grams(value));
            assert!(
                (mass - value).abs() <= 0.1 + 1e-9,
                "oz->g->oz drifted for {}: {}",
                value,
                mass
            );
            value += 7.3;
        }

        // One decimal of liters is coarser than one decimal of ounces, so the
        // volume round trip is checked at the resolution it can represent.
        let mut liters = 0.1;
        while liters <= 30.0 {
            let ounces = liters_to_ounces(liters);
            assert_eq!(ounces_to_liters(ounces), round_to_tenth(liters));
            liters += 0.3;
        }
    }

    #[test]
    fn test_ounces_through_liters_stay_within_two_ounces() {
        let mut ounces = 1.0;
        while ounces <= 256.0 {
            let back = liters_to_ounces(ounces_to_liters(ounces));
            assert!(
                (back - ounces).abs() <= 1.8,
                "oz->l->oz drifted for {}: {}",
                ounces,
                back
            );
            ounces += 2.5;
        }

        assert_eq!(liters_to_ounces(ounces_to_liters(128.0)), 128.5);
        assert_eq!(liters_to_ounces(ounces_to_liters(64.0)), 64.2);
    }

    #[test]
    fn test_unit_preferences_toggle() {
        let preference = UnitPreference::default();
        assert_eq!(preference.food_unit, FoodUnit::Oz);
        assert_eq!(preference.water_unit, WaterUnit::Oz);

        assert_eq!(FoodUnit::Oz.toggled(), FoodUnit::G);
        assert_eq!(FoodUnit::G.toggled(), FoodUnit::Oz);
        assert_eq!(WaterUnit::Oz.toggled(), WaterUnit::L);
        assert_eq!(WaterUnit::L.toggled(), WaterUnit::Oz);
    }

    #[test]
    fn test_preference_deserializes_from_lowercase_tags() {
        let preference: UnitPreference =
            serde_json::from_str(r#"{"food_unit":"g","water_unit":"l"}"#).unwrap();
        assert_eq!(preference.food_unit, FoodUnit::G);
        assert_eq!(preference.water_unit, WaterUnit::L);

        let partial: UnitPreference = serde_json::from_str(r#"{"water_unit":"l"}"#).unwrap();
        assert_eq!(partial.food_unit, FoodUnit::Oz);
    }
}
