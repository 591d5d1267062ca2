use crate::foods::FoodCandidate;
use crate::meals::NewMeal;
use crate::nutrition::{scale, NutrientSet};

/// Editable meal held by a planner session until it is submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    source: Option<FoodCandidate>,
}

impl MealDraft {
    pub fn new(name: impl Into<String>, macros: NutrientSet) -> Self {
        let mut draft = Self {
            name: name.into(),
            ..Self::default()
        };
        draft.set_macros(macros);
        draft
    }

    /// Candidate the draft was built from, if any.
    pub fn source(&self) -> Option<&FoodCandidate> {
        self.source.as_ref()
    }

    /// Per-serving nutrients of the source candidate.
    pub fn base(&self) -> Option<&NutrientSet> {
        self.source.as_ref().map(|c| &c.nutrients)
    }

    pub fn macros(&self) -> NutrientSet {
        NutrientSet::new(self.calories, self.protein, self.carbs, self.fats)
    }

    pub fn set_macros(&mut self, macros: NutrientSet) {
        self.calories = macros.calories;
        self.protein = macros.protein;
        self.carbs = macros.carbs;
        self.fats = macros.fats;
    }

    /// Recomputes the macros from the base nutrients. The name is left alone.
    /// Drafts without a source candidate are unchanged.
    pub fn rescale(&mut self, multiplier: f64) {
        if let Some(base) = self.base().copied() {
            self.set_macros(scale(&base, multiplier));
        }
    }

    /// Request body for the ledger, with the quantity prefix applied.
    pub fn to_new_meal(&self, multiplier: f64) -> NewMeal {
        NewMeal {
            name: format!("{}{}", quantity_prefix(multiplier), self.name),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }
}

/// Builds a draft named `"<name> (<servingSize><unit>)"` with macros scaled by
/// `multiplier`.
pub fn apply_to_draft(candidate: &FoodCandidate, multiplier: f64) -> MealDraft {
    let mut draft = MealDraft {
        name: format!(
            "{} ({}{})",
            candidate.name, candidate.serving_size, candidate.serving_size_unit
        ),
        source: Some(candidate.clone()),
        ..MealDraft::default()
    };
    draft.rescale(multiplier);
    draft
}

/// `"2x "` for multipliers above one, empty otherwise.
pub fn quantity_prefix(multiplier: f64) -> String {
    if multiplier > 1.0 {
        format!("{multiplier}x ")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foods::FoodId;

    fn chicken() -> FoodCandidate {
        FoodCandidate {
            fdc_id: FoodId::Number(171077),
            name: "Chicken breast".into(),
            brand_owner: "Generic".into(),
            serving_size: 100.0,
            serving_size_unit: "g".into(),
            nutrients: NutrientSet::new(165.0, 31.0, 0.0, 3.6),
        }
    }

    #[test]
    fn first_selection_names_and_rounds() {
        let mut c = chicken();
        c.serving_size = 28.35;
        c.nutrients = NutrientSet::new(52.4, 0.26, 13.81, 0.17);
        let draft = apply_to_draft(&c, 1.0);
        assert_eq!(draft.name, "Chicken breast (28.35g)");
        assert_eq!(draft.macros(), NutrientSet::new(52.0, 0.3, 13.8, 0.2));
        assert_eq!(draft.base(), Some(&c.nutrients));
    }

    #[test]
    fn rescale_keeps_name() {
        let mut draft = apply_to_draft(&chicken(), 1.0);
        draft.name = "Lunch chicken".into();
        draft.rescale(2.0);
        assert_eq!(draft.name, "Lunch chicken");
        assert_eq!(draft.macros(), NutrientSet::new(330.0, 62.0, 0.0, 7.2));
        draft.rescale(0.5);
        assert_eq!(draft.macros(), NutrientSet::new(83.0, 15.5, 0.0, 1.8));
    }

    #[test]
    fn manual_draft_ignores_rescale() {
        let mut draft = MealDraft::new("Toast", NutrientSet::new(80.0, 3.0, 15.0, 1.0));
        draft.rescale(3.0);
        assert_eq!(draft.calories, 80.0);
        assert!(draft.source().is_none());
    }

    #[test]
    fn prefix_only_above_one() {
        assert_eq!(quantity_prefix(2.0), "2x ");
        assert_eq!(quantity_prefix(1.5), "1.5x ");
        assert_eq!(quantity_prefix(1.0), "");
        assert_eq!(quantity_prefix(0.5), "");

        let draft = apply_to_draft(&chicken(), 2.0);
        assert_eq!(draft.to_new_meal(2.0).name, "2x Chicken breast (100g)");
        assert_eq!(draft.to_new_meal(1.0).name, "Chicken breast (100g)");
    }
}
