//! Meal plan view: weekly grid plus the favor/avoid food tables.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::domain::{FoodItem, Recommendation};
use crate::tui::styles::DietTheme;

/// Render the meal plan tab.
pub fn render_meal_plan(f: &mut Frame, area: Rect, rec: &Recommendation) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Weekly grid
            Constraint::Percentage(45), // Food tables
        ])
        .split(area);

    render_week_grid(f, chunks[0], rec);
    render_food_tables(f, chunks[1], rec);
}

fn render_week_grid(f: &mut Frame, area: Rect, rec: &Recommendation) {
    let rows: Vec<Row> = rec
        .meal_plan
        .slots()
        .iter()
        .map(|slot| {
            Row::new(vec![
                Span::styled(slot.day, DietTheme::text_secondary()),
                Span::styled(slot.meal, DietTheme::text_secondary()),
                Span::styled(slot.food.clone(), DietTheme::text()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Day", "Meal", "Food"])
            .style(DietTheme::subtitle())
            .bottom_margin(1),
    )
    .block(
        Block::default()
            .title(Span::styled(" Sample Weekly Meal Plan ", DietTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(DietTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_food_tables(f: &mut Frame, area: Rect, rec: &Recommendation) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_ranked_table(
        f,
        chunks[0],
        " Recommended Foods ",
        &rec.recommended_foods,
        |item| (format!("{:.1}", item.protein), format!("{:.1}", item.fiber)),
        ["Food", "Protein", "Fiber"],
        DietTheme::success(),
    );

    render_ranked_table(
        f,
        chunks[1],
        " Foods to Avoid ",
        &rec.foods_to_avoid,
        |item| {
            (
                format!("{:.1}", item.carbohydrates),
                format!("{:.0}", item.glycemic_index),
            )
        },
        ["Food", "Carbs", "GI"],
        DietTheme::danger(),
    );
}

fn render_ranked_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: &[FoodItem],
    metrics: impl Fn(&FoodItem) -> (String, String),
    header: [&'static str; 3],
    accent: ratatui::style::Style,
) {
    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            let (a, b) = metrics(item);
            Row::new(vec![
                Span::styled(item.name.clone(), DietTheme::text()),
                Span::styled(a, DietTheme::text_secondary()),
                Span::styled(b, DietTheme::text_secondary()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(Row::new(header.to_vec()).style(DietTheme::text_secondary()))
    .block(
        Block::default()
            .title(Span::styled(title, accent))
            .borders(Borders::ALL)
            .border_style(DietTheme::border()),
    );

    f.render_widget(table, area);
}
