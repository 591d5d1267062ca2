use crate::foods::catalog::{
    Nutrient, DEFAULT_BRAND, DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT,
};
use crate::foods::dto::{FoodCandidate, UsdaFood, UsdaFoodNutrient, UsdaSearchResponse};
use crate::nutrition::NutrientSet;

/// Value of the first entry matching `nutrient`, or 0 when absent.
pub fn find_nutrient(nutrients: &[UsdaFoodNutrient], nutrient: Nutrient) -> f64 {
    nutrients
        .iter()
        .find(|n| n.nutrient_id == Some(nutrient.usda_id()))
        .and_then(|n| n.value)
        .unwrap_or(0.0)
}

pub fn extract_nutrients(nutrients: &[UsdaFoodNutrient]) -> NutrientSet {
    NutrientSet {
        calories: find_nutrient(nutrients, Nutrient::Calories),
        protein: find_nutrient(nutrients, Nutrient::Protein),
        carbs: find_nutrient(nutrients, Nutrient::Carbs),
        fats: find_nutrient(nutrients, Nutrient::Fats),
    }
}

pub fn to_candidate(food: UsdaFood) -> FoodCandidate {
    let nutrients = extract_nutrients(&food.food_nutrients);
    FoodCandidate {
        fdc_id: food.fdc_id,
        name: food.description,
        brand_owner: non_empty(food.brand_owner).unwrap_or_else(|| DEFAULT_BRAND.into()),
        serving_size: food
            .serving_size
            .filter(|s| *s != 0.0 && !s.is_nan())
            .unwrap_or(DEFAULT_SERVING_SIZE),
        serving_size_unit: non_empty(food.serving_size_unit)
            .unwrap_or_else(|| DEFAULT_SERVING_UNIT.into()),
        nutrients,
    }
}

pub fn to_candidates(body: UsdaSearchResponse) -> Vec<FoodCandidate> {
    body.foods.into_iter().map(to_candidate).collect()
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}
