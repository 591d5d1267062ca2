use crate::meals::dto::{DailyTotals, MealEntry};
use crate::nutrition::NutrientSet;

/// Sums the four macros across `entries`, then rounds the sums.
///
/// Rounding happens once on the totals, not per entry.
pub fn aggregate(entries: &[MealEntry]) -> DailyTotals {
    let sum = entries.iter().fold(NutrientSet::ZERO, |acc, meal| NutrientSet {
        calories: acc.calories + meal.calories,
        protein: acc.protein + meal.protein,
        carbs: acc.carbs + meal.carbs,
        fats: acc.fats + meal.fats,
    });
    let rounded = sum.rounded();
    DailyTotals {
        calories: rounded.calories,
        protein: rounded.protein,
        carbs: rounded.carbs,
        fats: rounded.fats,
    }
}
