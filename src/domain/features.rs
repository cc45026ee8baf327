//! Feature encoding: vitals to the classifier's input schema.
//!
//! The classifier was trained on a one-hot expanded frame, so the encoder
//! must reproduce the training-time columns exactly. Raw vitals become a
//! fixed-schema record, the record is one-hot expanded, and the resulting
//! columns are reindexed against the expected-column list shipped with the
//! model, filling any absent column with 0.

use crate::domain::{BmiCategory, PatientVitals};

/// Glucose above this threshold sets the `High_Glucose` flag.
pub const HIGH_GLUCOSE_THRESHOLD: u32 = 140;

/// Blood pressure above this threshold sets the `High_BP` flag.
pub const HIGH_BP_THRESHOLD: u32 = 130;

/// Cholesterol above this threshold sets the `High_Cholesterol` flag.
pub const HIGH_CHOLESTEROL_THRESHOLD: u32 = 200;

/// Fixed-schema record the classifier expects, prior to one-hot expansion.
///
/// `disease_type`, `severity` and `physical_activity_level` are constant for
/// this application; they exist because the model was trained on a broader
/// population frame that carried them.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub age: u32,
    pub bmi_category: BmiCategory,
    pub disease_type: &'static str,
    pub severity: &'static str,
    pub physical_activity_level: &'static str,
    pub high_glucose: u8,
    pub high_bp: u8,
    pub high_cholesterol: u8,
}

impl FeatureRecord {
    /// Derive the feature record from a vitals snapshot.
    #[must_use]
    pub fn from_vitals(vitals: &PatientVitals) -> Self {
        Self {
            age: vitals.age,
            bmi_category: vitals.bmi_category(),
            disease_type: "Diabetes",
            severity: "Moderate",
            physical_activity_level: "Medium",
            high_glucose: u8::from(vitals.glucose > HIGH_GLUCOSE_THRESHOLD),
            high_bp: u8::from(vitals.blood_pressure > HIGH_BP_THRESHOLD),
            high_cholesterol: u8::from(vitals.cholesterol > HIGH_CHOLESTEROL_THRESHOLD),
        }
    }

    /// One-hot expand the record into `(column, value)` pairs.
    ///
    /// Categorical fields expand to `{Field}_{Value}` columns, matching the
    /// naming the training pipeline produced.
    #[must_use]
    pub fn one_hot(&self) -> Vec<(String, f64)> {
        vec![
            ("Age".to_string(), f64::from(self.age)),
            (
                format!("BMI_Category_{}", self.bmi_category.as_str()),
                1.0,
            ),
            (format!("Disease_Type_{}", self.disease_type), 1.0),
            (format!("Severity_{}", self.severity), 1.0),
            (
                format!("Physical_Activity_Level_{}", self.physical_activity_level),
                1.0,
            ),
            ("High_Glucose".to_string(), f64::from(self.high_glucose)),
            ("High_BP".to_string(), f64::from(self.high_bp)),
            (
                "High_Cholesterol".to_string(),
                f64::from(self.high_cholesterol),
            ),
        ]
    }

    /// Reindex the one-hot columns against the model's expected column list.
    ///
    /// Columns the record does not produce (categorical branches absent from
    /// this input) are filled with 0, so the output length always equals
    /// `expected_columns.len()` regardless of the input. Columns the record
    /// produces but the model does not expect are dropped.
    #[must_use]
    pub fn encode(&self, expected_columns: &[String]) -> Vec<f64> {
        let pairs = self.one_hot();
        expected_columns
            .iter()
            .map(|col| {
                pairs
                    .iter()
                    .find(|(name, _)| name == col)
                    .map_or(0.0, |(_, v)| *v)
            })
            .collect()
    }
}
