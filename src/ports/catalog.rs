//! Catalog port: Trait for loading the reference food table.

use crate::domain::FoodCatalog;

/// Trait for sourcing the food catalog.
///
/// The catalog is loaded once at startup and treated as read-only for the
/// process lifetime.
pub trait CatalogSource {
    /// Error type for catalog operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and deduplicate the catalog.
    ///
    /// # Errors
    /// Returns error if the source is missing or malformed.
    fn load(&self) -> Result<FoodCatalog, Self::Error>;
}
