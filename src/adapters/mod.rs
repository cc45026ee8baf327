//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external artifacts:
//! - `model`: JSON linear-model artifacts exported by the training pipeline
//! - `catalog`: CSV food catalog
//! - `report`: plain-text report file

pub mod catalog;
pub mod model;
pub mod report;

pub use catalog::CatalogError;
pub use model::ModelError;
pub use report::ReportError;
