//! Food catalog: reference table of foods and their nutrient attributes.

use serde::{Deserialize, Serialize};

/// A single food item from the catalog.
///
/// Field renames match the headers of the catalog CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Food Name")]
    pub name: String,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Fiber Content")]
    pub fiber: f64,

    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,

    #[serde(rename = "Glycemic Index")]
    pub glycemic_index: f64,
}

/// In-memory food catalog, deduplicated by food name.
///
/// Loaded once at startup and treated as read-only for the process
/// lifetime; meal plans and ranking views borrow from it per prediction.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog from raw rows, keeping the first occurrence of each
    /// food name.
    #[must_use]
    pub fn from_items(raw: Vec<FoodItem>) -> Self {
        let mut items: Vec<FoodItem> = Vec::with_capacity(raw.len());
        for item in raw {
            if !items.iter().any(|existing| existing.name == item.name) {
                items.push(item);
            }
        }
        Self { items }
    }

    /// Number of distinct foods in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All catalog items, in load order.
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Top `n` foods to favor: highest protein, ties broken by fiber.
    #[must_use]
    pub fn recommended(&self, n: usize) -> Vec<FoodItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| {
            b.protein
                .total_cmp(&a.protein)
                .then(b.fiber.total_cmp(&a.fiber))
        });
        sorted.truncate(n);
        sorted
    }

    /// Top `n` foods to avoid: highest carbohydrates, ties broken by
    /// glycemic index.
    #[must_use]
    pub fn to_avoid(&self, n: usize) -> Vec<FoodItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| {
            b.carbohydrates
                .total_cmp(&a.carbohydrates)
                .then(b.glycemic_index.total_cmp(&a.glycemic_index))
        });
        sorted.truncate(n);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, protein: f64, fiber: f64, carbs: f64, gi: f64) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            protein,
            fiber,
            carbohydrates: carbs,
            glycemic_index: gi,
        }
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let catalog = FoodCatalog::from_items(vec![
            item("Oats", 13.0, 10.0, 67.0, 55.0),
            item("Oats", 99.0, 99.0, 99.0, 99.0),
            item("Lentils", 9.0, 8.0, 20.0, 32.0),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!((catalog.items()[0].protein - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recommended_orders_by_protein_then_fiber() {
        let catalog = FoodCatalog::from_items(vec![
            item("A", 10.0, 2.0, 0.0, 0.0),
            item("B", 20.0, 1.0, 0.0, 0.0),
            item("C", 20.0, 5.0, 0.0, 0.0),
        ]);

        let top = catalog.recommended(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "C");
        assert_eq!(top[1].name, "B");
    }

    #[test]
    fn test_to_avoid_orders_by_carbs_then_gi() {
        let catalog = FoodCatalog::from_items(vec![
            item("A", 0.0, 0.0, 80.0, 70.0),
            item("B", 0.0, 0.0, 80.0, 90.0),
            item("C", 0.0, 0.0, 50.0, 99.0),
        ]);

        let avoid = catalog.to_avoid(10);
        assert_eq!(avoid.len(), 3);
        assert_eq!(avoid[0].name, "B");
        assert_eq!(avoid[1].name, "A");
        assert_eq!(avoid[2].name, "C");
    }

    #[test]
    fn test_rankings_shorter_than_n_for_small_catalogs() {
        let catalog = FoodCatalog::from_items(vec![item("A", 1.0, 1.0, 1.0, 1.0)]);
        assert_eq!(catalog.recommended(10).len(), 1);
        assert_eq!(catalog.to_avoid(10).len(), 1);
    }
}
