//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a medical-themed interface for:
//! - Dashboard with artifact status
//! - Patient vitals entry
//! - Tabbed results (summary, analysis, meal plan, report)

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::DietTheme;
