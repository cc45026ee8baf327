//! Report service: Renders a recommendation bundle to prose and writes it.
//!
//! No business logic beyond formatting; every value comes straight from
//! the bundle, so the report always reflects one vitals snapshot.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::domain::Recommendation;
use crate::ports::ReportSink;
use crate::NutriplanError;

/// Service for generating downloadable diet reports.
pub struct ReportService<W>
where
    W: ReportSink,
{
    sink: W,
}

impl<W> ReportService<W>
where
    W: ReportSink,
    W::Error: Into<crate::adapters::ReportError>,
{
    /// Create a new report service.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Render and write the report, returning the destination path.
    ///
    /// # Errors
    /// Returns error if the destination is unwritable. Not retried.
    pub fn write_report(&self, recommendation: &Recommendation) -> Result<PathBuf, NutriplanError> {
        let contents = Self::render(recommendation);
        self.sink
            .write(&contents)
            .map_err(|e| NutriplanError::Report(e.into()))
    }

    /// Render the report document as prose.
    #[must_use]
    pub fn render(rec: &Recommendation) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Nutriplan Diet Report");
        let _ = writeln!(
            out,
            "Generated: {}",
            rec.created_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Patient Vitals");
        let _ = writeln!(out, "  Age: {}", rec.vitals.age);
        let _ = writeln!(out, "  BMI: {:.1} ({})", rec.vitals.bmi, rec.bmi_category);
        let _ = writeln!(out, "  Glucose: {} mg/dL", rec.vitals.glucose);
        let _ = writeln!(out, "  Blood Pressure: {} mmHg", rec.vitals.blood_pressure);
        let _ = writeln!(out, "  Cholesterol: {} mg/dL", rec.vitals.cholesterol);
        let _ = writeln!(out);

        let _ = writeln!(out, "Recommended Diet: {} ({})", rec.diet, rec.label);
        let _ = writeln!(out);

        let _ = writeln!(out, "Nutrient Distribution");
        for (nutrient, pct) in rec.nutrients.entries() {
            let _ = writeln!(out, "  {nutrient}: {pct}%");
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Why This Recommendation");
        for note in &rec.explanation {
            let _ = writeln!(out, "  - {note}");
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Sample Weekly Meal Plan");
        for slot in rec.meal_plan.slots() {
            let _ = writeln!(out, "  {} - {}: {}", slot.day, slot.meal, slot.food);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Foods to Favor (protein / fiber)");
        for (i, food) in rec.recommended_foods.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} (protein {:.1}, fiber {:.1})",
                i + 1,
                food.name,
                food.protein,
                food.fiber
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Foods to Avoid (carbohydrates / glycemic index)");
        for (i, food) in rec.foods_to_avoid.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} (carbs {:.1}, GI {:.0})",
                i + 1,
                food.name,
                food.carbohydrates,
                food.glycemic_index
            );
        }

        out
    }
}
