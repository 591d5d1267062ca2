use serde::{Deserialize, Serialize};

use crate::nutrition::NutrientSet;

/// Upstream identifier; FoodData Central uses integers but the value is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FoodId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCandidate {
    pub fdc_id: FoodId,
    pub name: String,
    pub brand_owner: String,
    pub serving_size: f64,
    pub serving_size_unit: String,
    pub nutrients: NutrientSet,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

// --- upstream payloads ---

#[derive(Debug, Deserialize)]
pub struct UsdaSearchResponse {
    pub foods: Vec<UsdaFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaFood {
    pub fdc_id: FoodId,
    pub description: String,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_size_unit: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<UsdaFoodNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaFoodNutrient {
    #[serde(default)]
    pub nutrient_id: Option<u32>,
    #[serde(default)]
    pub value: Option<f64>,
}
