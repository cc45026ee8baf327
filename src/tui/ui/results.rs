//! Tabbed results view for one prediction.
//!
//! All four tabs render from the same recommendation bundle, so a user can
//! never see views built from different vitals snapshots.

use std::path::PathBuf;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::domain::Recommendation;
use crate::tui::styles::DietTheme;
use crate::tui::ui::mealplan::render_meal_plan;

/// Results tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsTab {
    Summary,
    Analysis,
    MealPlan,
    Report,
}

impl ResultsTab {
    const ALL: [Self; 4] = [Self::Summary, Self::Analysis, Self::MealPlan, Self::Report];

    fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Analysis => "Analysis",
            Self::MealPlan => "Meal Plan",
            Self::Report => "Report",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next tab, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Tab for a number key (1-4).
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Summary),
            '2' => Some(Self::Analysis),
            '3' => Some(Self::MealPlan),
            '4' => Some(Self::Report),
            _ => None,
        }
    }
}

/// Report generation status for the Report tab.
#[derive(Debug, Clone)]
pub enum ReportStatus {
    NotWritten,
    Written(PathBuf),
    Failed(String),
}

/// Outcome of the last prediction action.
#[derive(Debug, Clone)]
pub enum ResultsOutcome {
    Complete { recommendation: Box<Recommendation> },
    Error { message: String },
}

/// Results screen state.
pub struct ResultsState {
    pub outcome: Option<ResultsOutcome>,
    pub tab: ResultsTab,
    pub report: ReportStatus,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            outcome: None,
            tab: ResultsTab::Summary,
            report: ReportStatus::NotWritten,
        }
    }
}

impl ResultsState {
    /// Install a fresh successful prediction, resetting tab and report
    /// status.
    pub fn set_complete(&mut self, recommendation: Recommendation) {
        self.outcome = Some(ResultsOutcome::Complete {
            recommendation: Box::new(recommendation),
        });
        self.tab = ResultsTab::Summary;
        self.report = ReportStatus::NotWritten;
    }

    /// Install a failed prediction; no stale output is kept.
    pub fn set_error(&mut self, message: String) {
        self.outcome = Some(ResultsOutcome::Error { message });
        self.tab = ResultsTab::Summary;
        self.report = ReportStatus::NotWritten;
    }

    /// The recommendation, if the last prediction succeeded.
    #[must_use]
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.outcome {
            Some(ResultsOutcome::Complete { recommendation }) => Some(recommendation),
            _ => None,
        }
    }
}

/// Render the results view.
pub fn render_results(f: &mut Frame, area: Rect, state: &ResultsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_tabs(f, chunks[0], state);
    render_content(f, chunks[1], state);
    render_footer(f, chunks[2], state);
}

fn render_tabs(f: &mut Frame, area: Rect, state: &ResultsState) {
    let titles: Vec<Line> = ResultsTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), DietTheme::key_hint()),
                Span::styled(tab.title(), DietTheme::text_secondary()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .highlight_style(DietTheme::tab_selected())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(DietTheme::border()),
        );

    f.render_widget(tabs, area);
}

fn render_content(f: &mut Frame, area: Rect, state: &ResultsState) {
    match &state.outcome {
        None => render_placeholder(f, area),
        Some(ResultsOutcome::Error { message }) => render_error(f, area, message),
        Some(ResultsOutcome::Complete { recommendation }) => match state.tab {
            ResultsTab::Summary => render_summary(f, area, recommendation),
            ResultsTab::Analysis => render_analysis(f, area, recommendation),
            ResultsTab::MealPlan => render_meal_plan(f, area, recommendation),
            ResultsTab::Report => render_report(f, area, &state.report),
        },
    }
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No prediction yet",
            DietTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter patient vitals to begin",
            DietTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(DietTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Prediction Failed", DietTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, DietTheme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(DietTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_summary(f: &mut Frame, area: Rect, rec: &Recommendation) {
    let block = Block::default()
        .title(Span::styled(" Prediction Summary ", DietTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(DietTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Diet label
            Constraint::Length(2), // Vitals recap
            Constraint::Min(0),    // Explanation
        ])
        .margin(1)
        .split(inner);

    let diet_style = DietTheme::diet(rec.diet);
    let diet_display = Paragraph::new(vec![
        Line::from(Span::styled(
            rec.diet.to_string(),
            diet_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            rec.diet.description(),
            DietTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(diet_display, chunks[0]);

    let recap = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(
                "Age {}  BMI {:.1} ({})  BP {}  Glucose {}  Cholesterol {}",
                rec.vitals.age,
                rec.vitals.bmi,
                rec.bmi_category,
                rec.vitals.blood_pressure,
                rec.vitals.glucose,
                rec.vitals.cholesterol
            ),
            DietTheme::text_muted(),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(recap, chunks[1]);

    let mut lines = vec![Line::from(Span::styled(
        "Explanation",
        DietTheme::subtitle(),
    ))];
    for note in &rec.explanation {
        lines.push(Line::from(vec![
            Span::styled("  • ", DietTheme::text_secondary()),
            Span::styled(note.clone(), DietTheme::text()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), chunks[2]);
}

fn render_analysis(f: &mut Frame, area: Rect, rec: &Recommendation) {
    let block = Block::default()
        .title(Span::styled(" Nutrient Distribution ", DietTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(DietTheme::border());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    for (i, (nutrient, pct)) in rec.nutrients.entries().iter().enumerate() {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {nutrient} "),
                        DietTheme::text_secondary(),
                    ))
                    .borders(Borders::ALL)
                    .border_style(DietTheme::border()),
            )
            .gauge_style(DietTheme::nutrient_gauge(i))
            .percent(u16::from(*pct))
            .label(format!("{pct}%"));
        f.render_widget(gauge, chunks[i]);
    }

    let note = Paragraph::new(Line::from(Span::styled(
        format!("Daily macro targets for a {}", rec.diet.to_string().to_lowercase()),
        DietTheme::text_muted(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(note, chunks[3]);
}

fn render_report(f: &mut Frame, area: Rect, status: &ReportStatus) {
    let (lines, border) = match status {
        ReportStatus::NotWritten => (
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Report not written yet",
                    DietTheme::text_secondary(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press [W] to write the full diet report",
                    DietTheme::text_muted(),
                )),
            ],
            DietTheme::border(),
        ),
        ReportStatus::Written(path) => (
            vec![
                Line::from(""),
                Line::from(Span::styled("Report written", DietTheme::success())),
                Line::from(""),
                Line::from(Span::styled(
                    path.display().to_string(),
                    DietTheme::text(),
                )),
            ],
            DietTheme::border(),
        ),
        ReportStatus::Failed(message) => (
            vec![
                Line::from(""),
                Line::from(Span::styled("! Report Failed", DietTheme::danger())),
                Line::from(""),
                Line::from(Span::styled(message.clone(), DietTheme::text())),
            ],
            DietTheme::danger(),
        ),
    };

    let content = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled(" Diet Report ", DietTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(border),
    );

    f.render_widget(content, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &ResultsState) {
    let content = match &state.outcome {
        Some(ResultsOutcome::Error { .. }) => Line::from(vec![
            Span::styled("[Enter] ", DietTheme::key_hint()),
            Span::styled("Back to Form ", DietTheme::key_desc()),
            Span::styled("[Esc] ", DietTheme::key_hint()),
            Span::styled("Dashboard", DietTheme::key_desc()),
        ]),
        _ => Line::from(vec![
            Span::styled("[Tab/1-4] ", DietTheme::key_hint()),
            Span::styled("Switch View ", DietTheme::key_desc()),
            Span::styled("[W] ", DietTheme::key_hint()),
            Span::styled("Write Report ", DietTheme::key_desc()),
            Span::styled("[N] ", DietTheme::key_hint()),
            Span::styled("New Prediction ", DietTheme::key_desc()),
            Span::styled("[Esc] ", DietTheme::key_hint()),
            Span::styled("Dashboard", DietTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(DietTheme::border()),
    );

    f.render_widget(footer, area);
}
