//! Recommendation service: Orchestrates the prediction pipeline.
//!
//! One call runs the full sequence for a single vitals snapshot:
//! encode features, classify, decode the label, derive the explanation
//! and nutrient split, and generate the meal plan with its ranking views.
//! The returned bundle is complete or the call fails; no partial output.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::{
    explanation, DietRecommendation, FeatureRecord, FoodCatalog, MealPlan, PatientVitals,
    Recommendation,
};
use crate::ports::Classifier;
use crate::NutriplanError;

/// Number of rows in the recommended/avoid food tables.
const FOOD_TABLE_ROWS: usize = 10;

/// Service for producing diet recommendations.
pub struct RecommendationService<C>
where
    C: Classifier,
{
    classifier: Arc<C>,
    catalog: Arc<FoodCatalog>,
}

impl<C> RecommendationService<C>
where
    C: Classifier,
    C::Error: Into<crate::adapters::ModelError>,
{
    /// Create a new recommendation service.
    pub fn new(classifier: Arc<C>, catalog: Arc<FoodCatalog>) -> Self {
        Self {
            classifier,
            catalog,
        }
    }

    /// The shared food catalog.
    #[must_use]
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// The underlying classifier.
    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Run the prediction pipeline on a vitals snapshot.
    ///
    /// # Errors
    /// Returns error if classification fails or the catalog is too small
    /// for a meal plan.
    pub fn predict(&self, vitals: PatientVitals) -> Result<Recommendation, NutriplanError> {
        let mut rng = ChaCha20Rng::from_entropy();
        self.predict_with_rng(vitals, &mut rng)
    }

    /// Run the pipeline with a caller-supplied RNG (seedable for tests).
    ///
    /// # Errors
    /// Returns error if classification fails or the catalog is too small.
    pub fn predict_with_rng<R: rand::Rng>(
        &self,
        vitals: PatientVitals,
        rng: &mut R,
    ) -> Result<Recommendation, NutriplanError> {
        tracing::info!("Starting prediction pipeline...");

        // Step 1: encode the vitals into the model's input schema.
        let record = FeatureRecord::from_vitals(&vitals);
        let features = record.encode(self.classifier.expected_columns());
        tracing::debug!("Encoded {} feature columns", features.len());

        // Step 2: classify and decode the label.
        let index = self
            .classifier
            .predict(&features)
            .map_err(|e| NutriplanError::Model(e.into()))?;
        let label = self
            .classifier
            .decode_label(index)
            .map_err(|e| NutriplanError::Model(e.into()))?
            .to_string();
        let diet = DietRecommendation::from_label(&label);
        tracing::debug!("Classified as index {index} -> {label}");

        // Step 3: derive the presentation views from the same snapshot.
        let explanation = explanation::explain(&vitals);
        let nutrients = diet.nutrient_split();
        let meal_plan = MealPlan::generate_with_rng(&self.catalog, rng)?;
        let recommended_foods = self.catalog.recommended(FOOD_TABLE_ROWS);
        let foods_to_avoid = self.catalog.to_avoid(FOOD_TABLE_ROWS);

        tracing::info!(
            "Prediction complete: diet={diet}, {} explanation notes, {} meal slots",
            explanation.len(),
            meal_plan.slots().len()
        );

        Ok(Recommendation {
            vitals,
            bmi_category: vitals.bmi_category(),
            diet,
            label,
            explanation,
            nutrients,
            meal_plan,
            recommended_foods,
            foods_to_avoid,
            created_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::model::{ExportedLinearModel, LinearModel};
    use crate::domain::FoodItem;
    use std::path::Path;
    use tempfile::tempdir;

    const COLUMNS: [&str; 5] = [
        "Age",
        "High_Glucose",
        "High_BP",
        "High_Cholesterol",
        "BMI_Category_Obese",
    ];

    fn write_test_model(dir: &Path) {
        // Balanced baseline; glucose pushes Low_Carb, BP pushes Low_Sodium.
        let model = ExportedLinearModel {
            coefficients: vec![
                vec![0.0, 0.0, 0.0, 0.0, 0.0],
                vec![0.0, 4.0, 0.0, 0.5, 1.0],
                vec![0.0, 0.0, 4.0, 1.0, 0.0],
            ],
            intercepts: vec![1.0, -1.0, -1.0],
        };
        std::fs::write(
            dir.join("diet_model.json"),
            serde_json::to_string(&model).expect("serialize"),
        )
        .expect("write model");
        std::fs::write(
            dir.join("label_classes.json"),
            serde_json::to_string(&["Balanced", "Low_Carb", "Low_Sodium"]).expect("serialize"),
        )
        .expect("write labels");
        std::fs::write(
            dir.join("model_features.json"),
            serde_json::to_string(&COLUMNS).expect("serialize"),
        )
        .expect("write columns");
    }

    fn test_catalog(n: usize) -> FoodCatalog {
        FoodCatalog::from_items(
            (0..n)
                .map(|i| FoodItem {
                    name: format!("Food {i}"),
                    protein: f64::from(u32::try_from(i).unwrap_or(0)),
                    fiber: 1.0,
                    carbohydrates: 10.0,
                    glycemic_index: 40.0,
                })
                .collect(),
        )
    }

    fn create_test_service(n_foods: usize) -> RecommendationService<LinearModel> {
        let temp = tempdir().expect("tempdir");
        write_test_model(temp.path());
        let classifier = Arc::new(LinearModel::load(temp.path()).expect("load model"));
        RecommendationService::new(classifier, Arc::new(test_catalog(n_foods)))
    }

    fn vitals(bp: u32, glucose: u32) -> PatientVitals {
        PatientVitals {
            age: 30,
            bmi: 23.0,
            blood_pressure: bp,
            glucose,
            cholesterol: 180,
        }
    }

    #[test]
    fn test_pipeline_produces_consistent_bundle() {
        let service = create_test_service(30);
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        let rec = service
            .predict_with_rng(vitals(120, 120), &mut rng)
            .expect("predict");

        assert_eq!(rec.diet, DietRecommendation::Balanced);
        assert_eq!(rec.label, "Balanced");
        assert_eq!(rec.nutrients, rec.diet.nutrient_split());
        assert_eq!(rec.explanation, explanation::explain(&rec.vitals));
        assert_eq!(rec.meal_plan.slots().len(), 21);
        assert_eq!(rec.recommended_foods.len(), 10);
        assert_eq!(rec.foods_to_avoid.len(), 10);
    }

    #[test]
    fn test_high_glucose_recommends_low_carb() {
        let service = create_test_service(30);
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        let rec = service
            .predict_with_rng(vitals(120, 180), &mut rng)
            .expect("predict");
        assert_eq!(rec.diet, DietRecommendation::LowCarb);
        assert_eq!(rec.nutrients.entries()[0], ("Carbohydrates", 30));
    }

    #[test]
    fn test_high_bp_recommends_low_sodium() {
        let service = create_test_service(30);
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let rec = service
            .predict_with_rng(vitals(160, 120), &mut rng)
            .expect("predict");
        assert_eq!(rec.diet, DietRecommendation::LowSodium);
    }

    #[test]
    fn test_label_and_split_deterministic_across_runs() {
        let service = create_test_service(30);

        let mut a_rng = ChaCha20Rng::seed_from_u64(100);
        let mut b_rng = ChaCha20Rng::seed_from_u64(200);
        let a = service
            .predict_with_rng(PatientVitals::default(), &mut a_rng)
            .expect("predict");
        let b = service
            .predict_with_rng(PatientVitals::default(), &mut b_rng)
            .expect("predict");

        // The meal plan is sampled, but label and split must not vary.
        assert_eq!(a.label, b.label);
        assert_eq!(a.nutrients, b.nutrients);
    }

    #[test]
    fn test_small_catalog_fails_whole_prediction() {
        let service = create_test_service(15);
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        let err = service
            .predict_with_rng(vitals(120, 120), &mut rng)
            .expect_err("must fail");
        assert!(matches!(err, NutriplanError::InsufficientCatalog { .. }));
    }

    #[test]
    fn test_shipped_artifacts_end_to_end() {
        use crate::adapters::catalog::CsvCatalogSource;
        use crate::ports::CatalogSource;

        let classifier = Arc::new(LinearModel::load(Path::new("models")).expect("shipped model"));
        let catalog = Arc::new(
            CsvCatalogSource::new("data/food_catalog.csv")
                .load()
                .expect("shipped catalog"),
        );
        let service = RecommendationService::new(classifier, catalog);

        // Reference inputs: all vitals in the normal band.
        let rec = service.predict(PatientVitals::default()).expect("predict");
        assert_eq!(rec.diet, DietRecommendation::Balanced);
        assert_eq!(rec.nutrients.entries().map(|(_, p)| p), [60, 25, 15]);
        assert_eq!(rec.meal_plan.slots().len(), 21);

        // Elevated glucose flips the recommendation to low-carb.
        let rec = service.predict(vitals(120, 180)).expect("predict");
        assert_eq!(rec.diet, DietRecommendation::LowCarb);

        // Elevated blood pressure flips it to low-sodium.
        let rec = service.predict(vitals(160, 120)).expect("predict");
        assert_eq!(rec.diet, DietRecommendation::LowSodium);
    }
}
