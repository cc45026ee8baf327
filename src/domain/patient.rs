//! Patient vitals types for diet recommendation.
//!
//! The five vitals mirror the sliders of the data-entry form.

use serde::{Deserialize, Serialize};

/// Raw patient vitals input from the TUI.
///
/// Immutable for the duration of one prediction; every output view of a
/// prediction is derived from the same `PatientVitals` snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatientVitals {
    /// Age in years (18-80)
    pub age: u32,

    /// Body mass index (15.0-40.0)
    pub bmi: f64,

    /// Systolic blood pressure in mmHg (90-180)
    pub blood_pressure: u32,

    /// Fasting glucose in mg/dL (70-300)
    pub glucose: u32,

    /// Total cholesterol in mg/dL (100-300)
    pub cholesterol: u32,
}

impl PatientVitals {
    /// Validate that all vitals are within the form's input ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(18..=80).contains(&self.age) {
            errors.push(format!("Age {} out of range [18, 80]", self.age));
        }
        if !(15.0..=40.0).contains(&self.bmi) {
            errors.push(format!("BMI {} out of range [15.0, 40.0]", self.bmi));
        }
        if !(90..=180).contains(&self.blood_pressure) {
            errors.push(format!(
                "Blood pressure {} out of range [90, 180]",
                self.blood_pressure
            ));
        }
        if !(70..=300).contains(&self.glucose) {
            errors.push(format!("Glucose {} out of range [70, 300]", self.glucose));
        }
        if !(100..=300).contains(&self.cholesterol) {
            errors.push(format!(
                "Cholesterol {} out of range [100, 300]",
                self.cholesterol
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// BMI category for this patient's BMI value.
    #[must_use]
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }
}

impl Default for PatientVitals {
    /// Defaults match the initial slider positions of the entry form.
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 23.0,
            blood_pressure: 120,
            glucose: 120,
            cholesterol: 180,
        }
    }
}

/// WHO-style BMI classification used by the feature encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Upper bounds are exclusive.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Category name as it appears in the model's one-hot columns.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_category_thresholds() {
        assert_eq!(BmiCategory::from_bmi(15.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::Obese);
    }

    #[test]
    fn test_validation() {
        let valid = PatientVitals::default();
        assert!(valid.validate().is_ok());

        let invalid = PatientVitals {
            age: 10,
            bmi: 50.0,
            ..PatientVitals::default()
        };
        let errors = invalid.validate().expect_err("should fail");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_default_matches_form_defaults() {
        let v = PatientVitals::default();
        assert_eq!(v.age, 30);
        assert!((v.bmi - 23.0).abs() < f64::EPSILON);
        assert_eq!(v.blood_pressure, 120);
        assert_eq!(v.glucose, 120);
        assert_eq!(v.cholesterol, 180);
        assert_eq!(v.bmi_category(), BmiCategory::Normal);
    }
}
