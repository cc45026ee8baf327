//! Linear model adapter: Implementation of Classifier.
//!
//! Loads the three artifacts exported by the training pipeline:
//!
//! - `diet_model.json` - per-class coefficient rows and intercepts
//! - `label_classes.json` - ordered label list (the label decoder)
//! - `model_features.json` - expected input columns, in training order
//!
//! Prediction is an argmax over the class scores
//! `score_c = dot(coefficients[c], x) + intercepts[c]`, which makes the
//! label deterministic for fixed inputs and fixed artifacts. Ties resolve
//! to the first class in artifact order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ports::Classifier;

/// File names expected inside the model directory.
const MODEL_FILE: &str = "diet_model.json";
const LABELS_FILE: &str = "label_classes.json";
const FEATURES_FILE: &str = "model_features.json";

/// Error type for model artifact operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to load artifact: {0}")]
    Load(String),

    #[error("Invalid artifact schema: {0}")]
    Schema(String),

    #[error("Feature count mismatch: got {got}, expected {expected}")]
    InputShape { got: usize, expected: usize },

    #[error("Unknown label index: {0}")]
    UnknownLabel(usize),
}

/// Weight matrix exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    /// One coefficient row per class, each `feature_columns.len()` long
    pub coefficients: Vec<Vec<f64>>,
    /// One intercept per class
    pub intercepts: Vec<f64>,
}

/// Linear model adapter.
///
/// Holds all three startup artifacts; construction fails if any is
/// missing or internally inconsistent, so a constructed model is always
/// usable.
pub struct LinearModel {
    model: ExportedLinearModel,
    labels: Vec<String>,
    feature_columns: Vec<String>,
}

impl LinearModel {
    /// Load the model artifacts from a directory.
    ///
    /// # Errors
    /// Returns error if any artifact is missing, unparseable, or the
    /// pieces disagree on dimensions.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let model: ExportedLinearModel = read_json(&model_dir.join(MODEL_FILE))?;
        let labels: Vec<String> = read_json(&model_dir.join(LABELS_FILE))?;
        let feature_columns: Vec<String> = read_json(&model_dir.join(FEATURES_FILE))?;

        if labels.is_empty() {
            return Err(ModelError::Schema("label list is empty".into()));
        }
        if feature_columns.is_empty() {
            return Err(ModelError::Schema("feature column list is empty".into()));
        }
        if model.coefficients.len() != labels.len() {
            return Err(ModelError::Schema(format!(
                "{} coefficient rows for {} labels",
                model.coefficients.len(),
                labels.len()
            )));
        }
        if model.intercepts.len() != labels.len() {
            return Err(ModelError::Schema(format!(
                "{} intercepts for {} labels",
                model.intercepts.len(),
                labels.len()
            )));
        }
        for (i, row) in model.coefficients.iter().enumerate() {
            if row.len() != feature_columns.len() {
                return Err(ModelError::Schema(format!(
                    "coefficient row {i} has {} entries, expected {}",
                    row.len(),
                    feature_columns.len()
                )));
            }
        }

        tracing::info!(
            "Loaded model from {:?} (n_features={}, n_classes={})",
            model_dir,
            feature_columns.len(),
            labels.len()
        );

        Ok(Self {
            model,
            labels,
            feature_columns,
        })
    }

    /// The ordered label list (label decoder table).
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ModelError::Load(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| ModelError::Schema(format!("{}: {e}", path.display())))
}

impl Classifier for LinearModel {
    type Error = ModelError;

    fn expected_columns(&self) -> &[String] {
        &self.feature_columns
    }

    fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        if features.len() != self.feature_columns.len() {
            return Err(ModelError::InputShape {
                got: features.len(),
                expected: self.feature_columns.len(),
            });
        }

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, (row, intercept)) in self
            .model
            .coefficients
            .iter()
            .zip(self.model.intercepts.iter())
            .enumerate()
        {
            let score: f64 = row
                .iter()
                .zip(features.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
                + intercept;
            tracing::trace!("class {class} score {score:.4}");
            if score > best_score {
                best_score = score;
                best = class;
            }
        }

        Ok(best)
    }

    fn decode_label(&self, index: usize) -> Result<&str, ModelError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(ModelError::UnknownLabel(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_artifacts(
        dir: &Path,
        columns: &[&str],
        labels: &[&str],
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) {
        let model = ExportedLinearModel {
            coefficients,
            intercepts,
        };
        std::fs::write(
            dir.join(MODEL_FILE),
            serde_json::to_string(&model).expect("serialize model"),
        )
        .expect("write model");
        std::fs::write(
            dir.join(LABELS_FILE),
            serde_json::to_string(&labels).expect("serialize labels"),
        )
        .expect("write labels");
        std::fs::write(
            dir.join(FEATURES_FILE),
            serde_json::to_string(&columns).expect("serialize columns"),
        )
        .expect("write columns");
    }

    #[test]
    fn test_predict_argmax_and_decode() {
        let temp = tempdir().expect("tempdir");
        write_artifacts(
            temp.path(),
            &["a", "b"],
            &["X", "Y"],
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![0.0, 0.0],
        );

        let model = LinearModel::load(temp.path()).expect("load");
        let idx = model.predict(&[0.2, 0.9]).expect("predict");
        assert_eq!(idx, 1);
        assert_eq!(model.decode_label(idx).expect("decode"), "Y");
    }

    #[test]
    fn test_ties_resolve_to_first_class() {
        let temp = tempdir().expect("tempdir");
        write_artifacts(
            temp.path(),
            &["a"],
            &["X", "Y"],
            vec![vec![1.0], vec![1.0]],
            vec![0.5, 0.5],
        );

        let model = LinearModel::load(temp.path()).expect("load");
        assert_eq!(model.predict(&[1.0]).expect("predict"), 0);
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let temp = tempdir().expect("tempdir");
        write_artifacts(
            temp.path(),
            &["a", "b"],
            &["X"],
            vec![vec![1.0, 0.0]],
            vec![0.0],
        );

        let model = LinearModel::load(temp.path()).expect("load");
        let err = model.predict(&[1.0]).expect_err("must fail");
        assert!(matches!(
            err,
            ModelError::InputShape {
                got: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_inconsistent_artifacts_fail_to_load() {
        let temp = tempdir().expect("tempdir");
        // Two labels but only one coefficient row.
        write_artifacts(temp.path(), &["a"], &["X", "Y"], vec![vec![1.0]], vec![0.0]);
        assert!(matches!(
            LinearModel::load(temp.path()),
            Err(ModelError::Schema(_))
        ));
    }

    #[test]
    fn test_missing_artifact_fails_to_load() {
        let temp = tempdir().expect("tempdir");
        assert!(matches!(
            LinearModel::load(temp.path()),
            Err(ModelError::Load(_))
        ));
    }

    #[test]
    fn test_decode_out_of_range() {
        let temp = tempdir().expect("tempdir");
        write_artifacts(temp.path(), &["a"], &["X"], vec![vec![1.0]], vec![0.0]);
        let model = LinearModel::load(temp.path()).expect("load");
        assert!(matches!(
            model.decode_label(3),
            Err(ModelError::UnknownLabel(3))
        ));
    }
}
