//! Explanation generator: human-readable rationale for a recommendation.
//!
//! Pure function of the vitals snapshot, using the same thresholds as the
//! feature encoder. The output order is fixed: BMI note, glucose note(s),
//! BP note (only if triggered), cholesterol note (only if triggered).

use crate::domain::features::{
    HIGH_BP_THRESHOLD, HIGH_CHOLESTEROL_THRESHOLD, HIGH_GLUCOSE_THRESHOLD,
};
use crate::domain::PatientVitals;

/// Produce the ordered explanation list for a vitals snapshot.
#[must_use]
pub fn explain(vitals: &PatientVitals) -> Vec<String> {
    let mut notes = Vec::new();

    if vitals.bmi > 25.0 {
        notes.push("BMI is elevated".to_string());
    } else {
        notes.push("BMI is normal".to_string());
    }

    if vitals.glucose > HIGH_GLUCOSE_THRESHOLD {
        notes.push("High glucose detected".to_string());
        notes.push("Reduced carbohydrate intake recommended".to_string());
    } else {
        notes.push("Glucose level is normal".to_string());
    }

    if vitals.blood_pressure > HIGH_BP_THRESHOLD {
        notes.push("Blood pressure is high".to_string());
    }

    if vitals.cholesterol > HIGH_CHOLESTEROL_THRESHOLD {
        notes.push("High cholesterol detected, reduce fatty foods".to_string());
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(bmi: f64, bp: u32, glucose: u32, cholesterol: u32) -> PatientVitals {
        PatientVitals {
            age: 30,
            bmi,
            blood_pressure: bp,
            glucose,
            cholesterol,
        }
    }

    #[test]
    fn test_all_normal_gives_two_notes() {
        let notes = explain(&vitals(23.0, 120, 120, 180));
        assert_eq!(
            notes,
            vec!["BMI is normal".to_string(), "Glucose level is normal".to_string()]
        );
    }

    #[test]
    fn test_high_glucose_notes_follow_bmi_note_in_order() {
        let notes = explain(&vitals(23.0, 120, 150, 180));
        assert_eq!(notes[0], "BMI is normal");
        assert_eq!(notes[1], "High glucose detected");
        assert_eq!(notes[2], "Reduced carbohydrate intake recommended");
        assert_eq!(notes.len(), 3);
    }

    #[test]
    fn test_bp_note_only_above_threshold() {
        assert!(!explain(&vitals(23.0, 130, 120, 180))
            .iter()
            .any(|n| n.contains("Blood pressure")));
        assert!(explain(&vitals(23.0, 131, 120, 180))
            .iter()
            .any(|n| n == "Blood pressure is high"));
    }

    #[test]
    fn test_everything_elevated_gives_five_notes_in_fixed_order() {
        let notes = explain(&vitals(27.0, 140, 150, 210));
        assert_eq!(
            notes,
            vec![
                "BMI is elevated".to_string(),
                "High glucose detected".to_string(),
                "Reduced carbohydrate intake recommended".to_string(),
                "Blood pressure is high".to_string(),
                "High cholesterol detected, reduce fatty foods".to_string(),
            ]
        );
    }
}
