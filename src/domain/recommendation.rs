//! Diet recommendation types.
//!
//! Represents the output of the diet classifier and the complete
//! per-prediction bundle the UI and report render from.

use serde::{Deserialize, Serialize};

use crate::domain::{BmiCategory, FoodItem, MealPlan, PatientVitals};

/// Diet category recommended by the classifier.
///
/// The label set is closed but not formally enumerated by the artifact
/// contract; any label outside the two known special cases falls back to
/// `Balanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietRecommendation {
    /// Carbohydrate-restricted diet
    LowCarb,
    /// Sodium-restricted diet
    LowSodium,
    /// Balanced diet (default branch)
    Balanced,
}

impl DietRecommendation {
    /// Map a decoded label string onto the category set.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Low_Carb" => Self::LowCarb,
            "Low_Sodium" => Self::LowSodium,
            _ => Self::Balanced,
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::LowCarb => "Low carb diet - Restrict carbohydrate intake",
            Self::LowSodium => "Low sodium diet - Restrict salt intake",
            Self::Balanced => "Balanced diet - Standard macro distribution",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::LowCarb => (16, 185, 129),   // Emerald (#10B981)
            Self::LowSodium => (251, 191, 36), // Amber (#FBBF24)
            Self::Balanced => (59, 130, 246),  // Blue (#3B82F6)
        }
    }

    /// Macro distribution for this diet category.
    #[must_use]
    pub fn nutrient_split(&self) -> NutrientSplit {
        match self {
            Self::LowCarb => NutrientSplit {
                carbohydrates: 30,
                protein: 40,
                fat: 30,
            },
            Self::LowSodium => NutrientSplit {
                carbohydrates: 50,
                protein: 30,
                fat: 20,
            },
            Self::Balanced => NutrientSplit {
                carbohydrates: 60,
                protein: 25,
                fat: 15,
            },
        }
    }
}

impl std::fmt::Display for DietRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowCarb => write!(f, "LOW CARB DIET"),
            Self::LowSodium => write!(f, "LOW SODIUM DIET"),
            Self::Balanced => write!(f, "BALANCED DIET"),
        }
    }
}

/// Macro-nutrient percentage triple. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientSplit {
    pub carbohydrates: u8,
    pub protein: u8,
    pub fat: u8,
}

impl NutrientSplit {
    /// `(label, percentage)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, u8); 3] {
        [
            ("Carbohydrates", self.carbohydrates),
            ("Protein", self.protein),
            ("Fat", self.fat),
        ]
    }
}

/// Complete recommendation bundle for one prediction.
///
/// Every field is derived from the same `vitals` snapshot; nothing here is
/// mutated after construction, so all four output views always render
/// consistently.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// The vitals snapshot this prediction ran on
    pub vitals: PatientVitals,

    /// BMI classification of the snapshot
    pub bmi_category: BmiCategory,

    /// Diet category
    pub diet: DietRecommendation,

    /// Raw label string as decoded from the model artifact
    pub label: String,

    /// Ordered rationale notes
    pub explanation: Vec<String>,

    /// Macro distribution for the recommended diet
    pub nutrients: NutrientSplit,

    /// Generated weekly meal plan
    pub meal_plan: MealPlan,

    /// Top foods to favor (protein desc, fiber desc)
    pub recommended_foods: Vec<FoodItem>,

    /// Top foods to avoid (carbohydrates desc, glycemic index desc)
    pub foods_to_avoid: Vec<FoodItem>,

    /// Timestamp of the prediction
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_mapping() {
        assert_eq!(
            DietRecommendation::from_label("Low_Carb"),
            DietRecommendation::LowCarb
        );
        assert_eq!(
            DietRecommendation::from_label("Low_Sodium"),
            DietRecommendation::LowSodium
        );
        assert_eq!(
            DietRecommendation::from_label("Balanced"),
            DietRecommendation::Balanced
        );
        // Unknown labels take the default branch rather than erroring.
        assert_eq!(
            DietRecommendation::from_label("Keto_Extreme"),
            DietRecommendation::Balanced
        );
    }

    #[test]
    fn test_nutrient_splits_are_exact_and_sum_to_100() {
        let cases = [
            (DietRecommendation::LowCarb, (30, 40, 30)),
            (DietRecommendation::LowSodium, (50, 30, 20)),
            (DietRecommendation::Balanced, (60, 25, 15)),
        ];

        for (diet, (carbs, protein, fat)) in cases {
            let split = diet.nutrient_split();
            assert_eq!(split.carbohydrates, carbs);
            assert_eq!(split.protein, protein);
            assert_eq!(split.fat, fat);
            assert_eq!(
                u32::from(split.carbohydrates) + u32::from(split.protein) + u32::from(split.fat),
                100
            );
        }
    }
}
