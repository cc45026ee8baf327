//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration
//!
//! The prediction pipeline runs synchronously on the UI thread: one
//! submit triggers one full encode/classify/plan cycle before the next
//! frame is drawn.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::catalog::CsvCatalogSource;
use crate::adapters::model::LinearModel;
use crate::adapters::report::TextReportWriter;
use crate::application::{RecommendationService, ReportService};
use crate::ports::CatalogSource;

use super::ui::{
    dashboard::{render_dashboard, DashboardState},
    patient::{render_patient_form, PatientFormState},
    render_disclaimer,
    results::{render_results, ReportStatus, ResultsOutcome, ResultsState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    PatientForm,
    Results,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Recommendation pipeline service
    recommendation_service: RecommendationService<LinearModel>,

    /// Report writer service
    report_service: ReportService<TextReportWriter>,

    /// Dashboard state
    dashboard_state: DashboardState,

    /// Patient form state
    patient_form_state: PatientFormState,

    /// Results state
    results_state: ResultsState,
}

impl App {
    /// Create a new application instance using default adapters.
    ///
    /// Loads every startup artifact; refuses to start if any is missing
    /// or corrupt, so no interaction can begin against a broken setup.
    ///
    /// # Errors
    /// Returns error if artifacts cannot be loaded.
    pub fn new() -> Result<Self> {
        let model_path = std::env::var("NUTRIPLAN_MODEL_PATH")
            .unwrap_or_else(|_| "models".to_string());
        let model_dir = std::path::Path::new(&model_path);
        if !model_dir.exists() {
            return Err(anyhow!(
                "Model path not found at {:?}. Set NUTRIPLAN_MODEL_PATH to a directory containing diet_model.json, label_classes.json and model_features.json.",
                model_dir
            ));
        }
        let classifier = LinearModel::load(model_dir)
            .map_err(|e| anyhow!("Failed to load model from {:?}: {e}", model_dir))?;

        let catalog_path = std::env::var("NUTRIPLAN_FOOD_CSV")
            .unwrap_or_else(|_| "data/food_catalog.csv".to_string());
        let catalog = CsvCatalogSource::new(&catalog_path)
            .load()
            .map_err(|e| anyhow!("Failed to load food catalog from {catalog_path:?}: {e}"))?;

        let report_path = std::env::var("NUTRIPLAN_REPORT_PATH")
            .unwrap_or_else(|_| "diet_report.txt".to_string());

        let recommendation_service =
            RecommendationService::new(Arc::new(classifier), Arc::new(catalog));
        let report_service = ReportService::new(TextReportWriter::new(&report_path));

        Self::with_dependencies(recommendation_service, report_service, report_path)
    }

    /// Create application with injected services (Composition Root pattern).
    ///
    /// # Errors
    /// Returns error if initialization fails.
    pub fn with_dependencies(
        recommendation_service: RecommendationService<LinearModel>,
        report_service: ReportService<TextReportWriter>,
        report_path: String,
    ) -> Result<Self> {
        let dashboard_state = DashboardState {
            model_loaded: true,
            label_count: recommendation_service.classifier().labels().len(),
            catalog_size: recommendation_service.catalog().len(),
            report_path,
            ..DashboardState::default()
        };

        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            recommendation_service,
            report_service,
            dashboard_state,
            patient_form_state: PatientFormState::default(),
            results_state: ResultsState::default(),
        })
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => render_dashboard(f, content_area, &self.dashboard_state),
                    Screen::PatientForm => {
                        render_patient_form(f, content_area, &self.patient_form_state)
                    }
                    Screen::Results => render_results(f, content_area, &self.results_state),
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::PatientForm => self.handle_patient_form_key(key),
            Screen::Results => self.handle_results_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.patient_form_state = PatientFormState::default();
                self.screen = Screen::PatientForm;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.results_state.outcome.is_some() {
                    self.screen = Screen::Results;
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_patient_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up => {
                self.patient_form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.patient_form_state.next_field();
            }
            KeyCode::Left => {
                self.patient_form_state.nudge_field(-1.0);
            }
            KeyCode::Right => {
                self.patient_form_state.nudge_field(1.0);
            }
            KeyCode::Char(c) => {
                self.patient_form_state.input_char(c);
            }
            KeyCode::Backspace => {
                self.patient_form_state.delete_char();
            }
            KeyCode::Delete => {
                self.patient_form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_patient_form();
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        if matches!(
            self.results_state.outcome,
            Some(ResultsOutcome::Error { .. })
        ) {
            match key {
                KeyCode::Enter => {
                    self.screen = Screen::PatientForm;
                }
                KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Tab => {
                self.results_state.tab = self.results_state.tab.next();
            }
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(tab) = super::ui::results::ResultsTab::from_digit(c) {
                    self.results_state.tab = tab;
                }
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.write_report();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.patient_form_state = PatientFormState::default();
                self.screen = Screen::PatientForm;
            }
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            _ => {}
        }
    }

    fn submit_patient_form(&mut self) {
        let vitals = match self.patient_form_state.to_vitals() {
            Ok(vitals) => vitals,
            Err(e) => {
                self.patient_form_state.error_message = Some(e);
                return;
            }
        };

        if let Err(errors) = vitals.validate() {
            self.patient_form_state.error_message = Some(errors.join(", "));
            return;
        }

        // One synchronous pipeline run per submit. On failure no stale
        // output remains: the previous outcome is replaced by the error.
        match self.recommendation_service.predict(vitals) {
            Ok(recommendation) => {
                self.dashboard_state.prediction_count += 1;
                self.dashboard_state.last_diet = Some(recommendation.diet);
                self.results_state.set_complete(recommendation);
            }
            Err(e) => {
                tracing::error!("Prediction failed: {e}");
                self.results_state.set_error(e.to_string());
            }
        }

        // Clear input buffers from the UI immediately.
        self.patient_form_state.clear_sensitive();
        self.screen = Screen::Results;
    }

    fn write_report(&mut self) {
        let Some(recommendation) = self.results_state.recommendation() else {
            return;
        };

        match self.report_service.write_report(recommendation) {
            Ok(path) => {
                self.results_state.report = ReportStatus::Written(path);
            }
            Err(e) => {
                tracing::error!("Report write failed: {e}");
                self.results_state.report = ReportStatus::Failed(e.to_string());
            }
        }
    }
}
