use serde::{Deserialize, Serialize};

/// The four macro values tracked for foods and meals.
///
/// Calories are kcal, the rest are grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSet {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutrientSet {
    pub const ZERO: NutrientSet = NutrientSet {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fats: 0.0,
    };

    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Integer calories, one-decimal grams.
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_whole(self.calories),
            protein: round_tenth(self.protein),
            carbs: round_tenth(self.carbs),
            fats: round_tenth(self.fats),
        }
    }
}

/// Rounds to the nearest integer, ties toward positive infinity. Never
/// returns negative zero.
pub fn round_whole(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0
}

pub fn round_tenth(x: f64) -> f64 {
    round_whole(x * 10.0) / 10.0
}

/// Scales per-serving nutrients by `multiplier`.
///
/// No bounds are enforced here: zero and negative multipliers are computed
/// like any other.
pub fn scale(base: &NutrientSet, multiplier: f64) -> NutrientSet {
    NutrientSet {
        calories: round_whole(base.calories * multiplier),
        protein: round_tenth(base.protein * multiplier),
        carbs: round_tenth(base.carbs * multiplier),
        fats: round_tenth(base.fats * multiplier),
    }
}
