//! Dashboard view: Main overview screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::DietRecommendation;
use crate::tui::styles::DietTheme;

/// Dashboard state for rendering.
#[derive(Default)]
pub struct DashboardState {
    pub model_loaded: bool,
    pub label_count: usize,
    pub catalog_size: usize,
    pub prediction_count: usize,
    pub report_path: String,
    pub last_diet: Option<DietRecommendation>,
}

/// Render the main dashboard view.
pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", DietTheme::text()),
        Span::styled("Nutriplan", DietTheme::title()),
        Span::styled(" │ ", DietTheme::text_muted()),
        Span::styled(
            "Diet Recommendations for Diabetes Care",
            DietTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(DietTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Status panels
            Constraint::Percentage(50), // Session summary
        ])
        .split(area);

    render_status_panels(f, chunks[0], state);
    render_session_summary(f, chunks[1], state);
}

fn render_status_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Artifact status
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    let status_items = vec![
        format_status_item(
            &format!("Model loaded ({} diet classes)", state.label_count),
            state.model_loaded,
        ),
        format_status_item(
            &format!("Food catalog ({} distinct foods)", state.catalog_size),
            state.catalog_size >= crate::domain::PLAN_SLOTS,
        ),
        Line::from(vec![
            Span::styled("  Report path: ", DietTheme::text_secondary()),
            Span::styled(state.report_path.clone(), DietTheme::text_muted()),
        ]),
    ];

    let status_block = Block::default()
        .title(Span::styled(" Startup Artifacts ", DietTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(DietTheme::border());

    f.render_widget(Paragraph::new(status_items).block(status_block), chunks[0]);

    let actions = vec![
        Line::from(vec![
            Span::styled("[N] ", DietTheme::key_hint()),
            Span::styled("New Prediction", DietTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[R] ", DietTheme::key_hint()),
            Span::styled("Review Last Result", DietTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", DietTheme::key_hint()),
            Span::styled("Quit", DietTheme::key_desc()),
        ]),
    ];

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", DietTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(DietTheme::border());

    f.render_widget(Paragraph::new(actions).block(actions_block), chunks[1]);
}

fn format_status_item(label: &str, ok: bool) -> Line<'static> {
    let (icon, style) = if ok {
        ("OK", DietTheme::success())
    } else {
        ("FAIL", DietTheme::danger())
    };

    Line::from(vec![
        Span::styled(format!("  {icon} "), style),
        Span::styled(label.to_string(), DietTheme::text()),
    ])
}

fn render_session_summary(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(" This Session ", DietTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(DietTheme::border());

    if state.prediction_count == 0 {
        let empty_msg = Paragraph::new(Line::from(vec![Span::styled(
            "No predictions yet. Press [N] to start.",
            DietTheme::text_muted(),
        )]))
        .block(block);
        f.render_widget(empty_msg, area);
        return;
    }

    let mut lines = vec![Line::from(vec![
        Span::styled("Predictions: ", DietTheme::text_secondary()),
        Span::styled(state.prediction_count.to_string(), DietTheme::text()),
    ])];

    if let Some(diet) = state.last_diet {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Last recommendation: ", DietTheme::text_secondary()),
            Span::styled(diet.to_string(), DietTheme::diet(diet)),
        ]));
        lines.push(Line::from(vec![Span::styled(
            diet.description(),
            DietTheme::text_muted(),
        )]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Results are not stored; each prediction starts from a fresh snapshot.",
        DietTheme::text_muted(),
    )]));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
