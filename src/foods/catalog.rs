//! Fixed lookup tables for the USDA FoodData Central search API.

/// Macro nutrients extracted from a food record, keyed by USDA nutrient ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fats,
    ];

    pub const fn usda_id(self) -> u32 {
        match self {
            Nutrient::Calories => 1008,
            Nutrient::Protein => 1003,
            Nutrient::Carbs => 1005,
            Nutrient::Fats => 1004,
        }
    }
}

/// Dataset categories requested on every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetType {
    SrLegacy,
    SurveyFndds,
    Foundation,
    Branded,
}

impl DatasetType {
    pub const ALL: [DatasetType; 4] = [
        DatasetType::SrLegacy,
        DatasetType::SurveyFndds,
        DatasetType::Foundation,
        DatasetType::Branded,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DatasetType::SrLegacy => "SR Legacy",
            DatasetType::SurveyFndds => "Survey (FNDDS)",
            DatasetType::Foundation => "Foundation",
            DatasetType::Branded => "Branded",
        }
    }

    /// Comma-joined form expected by the `dataType` query parameter.
    pub fn filter_param() -> String {
        Self::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub const PAGE_SIZE: u32 = 10;
pub const DEFAULT_BRAND: &str = "Generic";
pub const DEFAULT_SERVING_SIZE: f64 = 100.0;
pub const DEFAULT_SERVING_UNIT: &str = "g";
