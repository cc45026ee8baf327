//! # Nutriplan
#![allow(non_snake_case)]
//!
//! Diet recommendation terminal application for diabetes care.
//!
//! This crate provides:
//! - Feature encoding of patient vitals into the classifier's input schema
//! - Diet classification via a pre-trained model artifact
//! - Weekly meal planning from a reference food catalog
//! - Terminal UI and a downloadable prose report
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (vitals, features, recommendation, meal plan)
//! - `ports`: Trait definitions for external collaborators
//! - `adapters`: Concrete implementations (JSON model, CSV catalog, text report)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{DietRecommendation, PatientVitals, Recommendation};

/// Result type for Nutriplan operations
pub type Result<T> = std::result::Result<T, NutriplanError>;

/// Main error type for Nutriplan
#[derive(Debug, thiserror::Error)]
pub enum NutriplanError {
    #[error("Model artifact error: {0}")]
    Model(#[from] adapters::ModelError),

    #[error("Food catalog error: {0}")]
    Catalog(#[from] adapters::CatalogError),

    #[error("Report error: {0}")]
    Report(#[from] adapters::ReportError),

    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("Insufficient catalog: need {needed} distinct foods, have {available}")]
    InsufficientCatalog { needed: usize, available: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
