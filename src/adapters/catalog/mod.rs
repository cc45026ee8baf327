//! CSV catalog adapter: Implementation of CatalogSource.
//!
//! Reads the food table shipped with the application. Rows deserialize
//! directly into `FoodItem` via the renamed CSV headers; duplicate food
//! names collapse to their first occurrence.

use std::path::{Path, PathBuf};

use crate::domain::{FoodCatalog, FoodItem};
use crate::ports::CatalogSource;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog at {0} contains no rows")]
    Empty(PathBuf),
}

/// CSV-backed catalog source.
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    /// Create a source for the given CSV path.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for CsvCatalogSource {
    type Error = CatalogError;

    fn load(&self) -> Result<FoodCatalog, CatalogError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize::<FoodItem>() {
            rows.push(record?);
        }

        if rows.is_empty() {
            return Err(CatalogError::Empty(self.path.clone()));
        }

        let raw_count = rows.len();
        let catalog = FoodCatalog::from_items(rows);
        tracing::info!(
            "Loaded food catalog from {:?} ({} rows, {} distinct foods)",
            self.path,
            raw_count,
            catalog.len()
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER: &str = "Food Name,Protein,Fiber Content,Carbohydrates,Glycemic Index";

    #[test]
    fn test_load_and_dedupe() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("foods.csv");
        std::fs::write(
            &path,
            format!("{HEADER}\nOats,13.2,10.1,67.0,55\nOats,1,1,1,1\nLentils,9.0,7.9,20.1,32\n"),
        )
        .expect("write csv");

        let catalog = CsvCatalogSource::new(&path).load().expect("load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].name, "Oats");
        assert!((catalog.items()[0].protein - 13.2).abs() < f64::EPSILON);
        assert!((catalog.items()[1].glycemic_index - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let source = CsvCatalogSource::new(temp.path().join("nope.csv"));
        assert!(matches!(source.load(), Err(CatalogError::Csv(_))));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("empty.csv");
        std::fs::write(&path, format!("{HEADER}\n")).expect("write csv");
        assert!(matches!(
            CsvCatalogSource::new(&path).load(),
            Err(CatalogError::Empty(_))
        ));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("bad.csv");
        std::fs::write(&path, format!("{HEADER}\nOats,abc,10.1,67.0,55\n")).expect("write csv");
        assert!(matches!(
            CsvCatalogSource::new(&path).load(),
            Err(CatalogError::Csv(_))
        ));
    }

    #[test]
    fn test_shipped_catalog_supports_a_meal_plan() {
        // Same relative-path convention as running the binary from the
        // repository root.
        let catalog = CsvCatalogSource::new("data/food_catalog.csv")
            .load()
            .expect("shipped catalog should load");
        assert!(catalog.len() >= crate::domain::PLAN_SLOTS);
    }
}
