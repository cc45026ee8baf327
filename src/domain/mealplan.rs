//! Weekly meal plan generation.
//!
//! A plan assigns 21 distinct foods, sampled without replacement from the
//! catalog, to the fixed Mon-Sun x Breakfast/Lunch/Dinner grid.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::domain::FoodCatalog;
use crate::NutriplanError;

/// Days of the meal-plan week, in display order.
pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Meals per day, in display order.
pub const MEALS: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];

/// Number of slots in a weekly plan (7 days x 3 meals).
pub const PLAN_SLOTS: usize = DAYS.len() * MEALS.len();

/// One slot of the weekly plan.
#[derive(Debug, Clone, Serialize)]
pub struct MealSlot {
    pub day: &'static str,
    pub meal: &'static str,
    pub food: String,
}

/// A generated 7-day meal plan.
///
/// Ephemeral: regenerated on every prediction from the same vitals
/// snapshot as the rest of the recommendation bundle.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    slots: Vec<MealSlot>,
}

impl MealPlan {
    /// Generate a plan by sampling `PLAN_SLOTS` distinct foods from the
    /// catalog and assigning them to the grid in day-major order.
    ///
    /// # Errors
    /// Returns `InsufficientCatalog` if the deduplicated catalog holds
    /// fewer than `PLAN_SLOTS` foods.
    pub fn generate(catalog: &FoodCatalog) -> Result<Self, NutriplanError> {
        let mut rng = ChaCha20Rng::from_entropy();
        Self::generate_with_rng(catalog, &mut rng)
    }

    /// Generate with a caller-supplied RNG (seedable for tests).
    ///
    /// # Errors
    /// Returns `InsufficientCatalog` if the catalog is too small.
    pub fn generate_with_rng<R: rand::Rng>(
        catalog: &FoodCatalog,
        rng: &mut R,
    ) -> Result<Self, NutriplanError> {
        if catalog.len() < PLAN_SLOTS {
            return Err(NutriplanError::InsufficientCatalog {
                needed: PLAN_SLOTS,
                available: catalog.len(),
            });
        }

        let foods: Vec<String> = catalog
            .items()
            .choose_multiple(rng, PLAN_SLOTS)
            .map(|item| item.name.clone())
            .collect();

        let mut slots = Vec::with_capacity(PLAN_SLOTS);
        let mut idx = 0;
        for day in DAYS {
            for meal in MEALS {
                slots.push(MealSlot {
                    day,
                    meal,
                    food: foods[idx].clone(),
                });
                idx += 1;
            }
        }

        Ok(Self { slots })
    }

    /// All slots, in Mon-Sun x Breakfast/Lunch/Dinner order.
    #[must_use]
    pub fn slots(&self) -> &[MealSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FoodItem;
    use std::collections::HashSet;

    fn catalog_of(n: usize) -> FoodCatalog {
        let items = (0..n)
            .map(|i| FoodItem {
                name: format!("Food {i}"),
                protein: 1.0,
                fiber: 1.0,
                carbohydrates: 1.0,
                glycemic_index: 1.0,
            })
            .collect();
        FoodCatalog::from_items(items)
    }

    #[test]
    fn test_plan_has_21_distinct_foods_on_the_full_grid() {
        let catalog = catalog_of(30);
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let plan = MealPlan::generate_with_rng(&catalog, &mut rng).expect("should generate");

        assert_eq!(plan.slots().len(), PLAN_SLOTS);

        let foods: HashSet<&str> = plan.slots().iter().map(|s| s.food.as_str()).collect();
        assert_eq!(foods.len(), PLAN_SLOTS, "foods must be pairwise distinct");

        let days: HashSet<&str> = plan.slots().iter().map(|s| s.day).collect();
        assert_eq!(days.len(), 7);
        for day in DAYS {
            let meals: Vec<&str> = plan
                .slots()
                .iter()
                .filter(|s| s.day == day)
                .map(|s| s.meal)
                .collect();
            assert_eq!(meals, MEALS.to_vec(), "each day has exactly the 3 meals");
        }
    }

    #[test]
    fn test_plan_draws_from_catalog() {
        let catalog = catalog_of(25);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let plan = MealPlan::generate_with_rng(&catalog, &mut rng).expect("should generate");

        let names: HashSet<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert!(plan.slots().iter().all(|s| names.contains(s.food.as_str())));
    }

    #[test]
    fn test_insufficient_catalog_is_an_error() {
        let catalog = catalog_of(20);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let err = MealPlan::generate_with_rng(&catalog, &mut rng).expect_err("must fail");
        match err {
            NutriplanError::InsufficientCatalog { needed, available } => {
                assert_eq!(needed, 21);
                assert_eq!(available, 20);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_exactly_21_foods_is_enough() {
        let catalog = catalog_of(21);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let plan = MealPlan::generate_with_rng(&catalog, &mut rng).expect("should generate");
        let foods: HashSet<&str> = plan.slots().iter().map(|s| s.food.as_str()).collect();
        assert_eq!(foods.len(), 21);
    }
}
