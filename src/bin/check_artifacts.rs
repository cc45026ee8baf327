//! Artifact checker for Nutriplan deployments.
//!
//! Loads every startup artifact the application needs (model weights,
//! label decoder, feature columns, food catalog) and prints a summary.
//! Exits nonzero if anything is missing or inconsistent, so it can gate
//! a deployment before users ever see a broken setup.
//!
//! Usage:
//!   cargo run --bin check_artifacts
//!   NUTRIPLAN_MODEL_PATH=/srv/models cargo run --bin check_artifacts

#![allow(non_snake_case)]

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use Nutriplan::adapters::catalog::CsvCatalogSource;
use Nutriplan::adapters::model::LinearModel;
use Nutriplan::domain::PLAN_SLOTS;
use Nutriplan::ports::{CatalogSource, Classifier};

fn main() -> Result<()> {
    let model_path =
        std::env::var("NUTRIPLAN_MODEL_PATH").unwrap_or_else(|_| "models".to_string());
    let catalog_path = std::env::var("NUTRIPLAN_FOOD_CSV")
        .unwrap_or_else(|_| "data/food_catalog.csv".to_string());

    println!("Checking Nutriplan startup artifacts");
    println!("  model dir:    {model_path}");
    println!("  food catalog: {catalog_path}");
    println!();

    let model = LinearModel::load(Path::new(&model_path))
        .with_context(|| format!("model artifacts in {model_path}"))?;
    println!(
        "OK   model: {} feature columns, {} labels ({})",
        model.expected_columns().len(),
        model.labels().len(),
        model.labels().join(", ")
    );

    let catalog = CsvCatalogSource::new(&catalog_path)
        .load()
        .with_context(|| format!("food catalog at {catalog_path}"))?;
    println!("OK   catalog: {} distinct foods", catalog.len());

    if catalog.len() < PLAN_SLOTS {
        return Err(anyhow!(
            "catalog has {} distinct foods; meal planning needs at least {PLAN_SLOTS}",
            catalog.len()
        ));
    }
    println!("OK   catalog large enough for weekly meal plans");

    println!();
    println!("All artifacts check out.");
    Ok(())
}
