//! Patient vitals entry form.
//!
//! Fields are prefilled with the standard defaults and behave like
//! sliders: Left/Right steps the value within its range, digits overwrite
//! it directly.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::PatientVitals;
use crate::tui::styles::DietTheme;

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub decimals: usize,
}

impl FormField {
    fn set(&mut self, value: f64) {
        self.value = format!("{:.*}", self.decimals, value);
    }

    fn parsed(&self) -> Option<f64> {
        self.value.parse().ok()
    }

    /// Step the value by `direction` (+1/-1), clamped to the range.
    fn nudge(&mut self, direction: f64) {
        let current = self.parsed().unwrap_or(self.min);
        let next = (current + direction * self.step).clamp(self.min, self.max);
        self.set(next);
    }
}

/// Patient form state
pub struct PatientFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for PatientFormState {
    fn default() -> Self {
        let defaults = PatientVitals::default();
        let mut fields = vec![
            FormField {
                label: "Age",
                hint: "years (18-80)",
                value: String::new(),
                min: 18.0,
                max: 80.0,
                step: 1.0,
                decimals: 0,
            },
            FormField {
                label: "BMI",
                hint: "kg/m2 (15.0-40.0)",
                value: String::new(),
                min: 15.0,
                max: 40.0,
                step: 0.1,
                decimals: 1,
            },
            FormField {
                label: "Blood Pressure",
                hint: "mmHg (90-180)",
                value: String::new(),
                min: 90.0,
                max: 180.0,
                step: 1.0,
                decimals: 0,
            },
            FormField {
                label: "Glucose",
                hint: "mg/dL (70-300)",
                value: String::new(),
                min: 70.0,
                max: 300.0,
                step: 1.0,
                decimals: 0,
            },
            FormField {
                label: "Cholesterol",
                hint: "mg/dL (100-300)",
                value: String::new(),
                min: 100.0,
                max: 300.0,
                step: 1.0,
                decimals: 0,
            },
        ];

        // Prefill the slider defaults.
        fields[0].set(f64::from(defaults.age));
        fields[1].set(defaults.bmi);
        fields[2].set(f64::from(defaults.blood_pressure));
        fields[3].set(f64::from(defaults.glucose));
        fields[4].set(f64::from(defaults.cholesterol));

        Self {
            fields,
            selected_field: 0,
            error_message: None,
        }
    }
}

impl PatientFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Step the selected field up or down within its range.
    pub fn nudge_field(&mut self, direction: f64) {
        self.fields[self.selected_field].nudge(direction);
        self.error_message = None;
    }

    /// Add a character to the current field
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.fields[self.selected_field].value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Wipe all field buffers and restore the defaults.
    ///
    /// Called after a submission so raw vitals do not linger in the form
    /// buffers.
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.zeroize();
        }
        *self = Self::default();
    }

    /// Validate and convert to a vitals snapshot.
    pub fn to_vitals(&self) -> Result<PatientVitals, String> {
        let mut values = Vec::with_capacity(self.fields.len());

        for field in self.fields.iter() {
            let value: f64 = field
                .value
                .parse()
                .map_err(|_| format!("{}: Invalid number", field.label))?;

            if value < field.min || value > field.max {
                return Err(format!(
                    "{}: Value must be between {} and {}",
                    field.label, field.min, field.max
                ));
            }

            values.push(value);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let vitals = PatientVitals {
            age: values[0].round() as u32,
            bmi: values[1],
            blood_pressure: values[2].round() as u32,
            glucose: values[3].round() as u32,
            cholesterol: values[4].round() as u32,
        };

        Ok(vitals)
    }
}

/// Render the patient vitals entry form
pub fn render_patient_form(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", DietTheme::text()),
        Span::styled("Patient Vitals", DietTheme::title()),
        Span::styled(" │ Diet Prediction Inputs", DietTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(DietTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let field_height = 3;
    let constraints: Vec<Constraint> = state
        .fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (i, field) in state.fields.iter().enumerate() {
        let is_selected = i == state.selected_field;
        let border_style = if is_selected {
            DietTheme::border_focused()
        } else {
            DietTheme::border()
        };

        let title_style = if is_selected {
            DietTheme::focused()
        } else {
            DietTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(field.hint, DietTheme::text_muted())
        } else {
            Span::styled(&field.value, DietTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            Span::raw("  "),
            Span::styled(field.hint, DietTheme::text_muted()),
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", DietTheme::danger()),
            Span::styled(err.clone(), DietTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", DietTheme::key_hint()),
            Span::styled("Field ", DietTheme::key_desc()),
            Span::styled("[←→] ", DietTheme::key_hint()),
            Span::styled("Adjust ", DietTheme::key_desc()),
            Span::styled("[Enter] ", DietTheme::key_hint()),
            Span::styled("Predict ", DietTheme::key_desc()),
            Span::styled("[Esc] ", DietTheme::key_hint()),
            Span::styled("Cancel", DietTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(DietTheme::border()),
    );

    f.render_widget(footer, area);
}
