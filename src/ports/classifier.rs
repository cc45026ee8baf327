//! Classifier port: Trait for the pre-trained diet model.
//!
//! The model is an opaque external collaborator: the application's only
//! contract with it is that the input vector matches the training-time
//! column schema exactly.

/// Trait for diet classification over an encoded feature vector.
pub trait Classifier: Send + Sync {
    /// Error type for classifier operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The expected input columns, in training order.
    ///
    /// The feature encoder reindexes every input against this list.
    fn expected_columns(&self) -> &[String];

    /// Predict a label index for an encoded feature vector.
    ///
    /// # Errors
    /// Returns error if the input length does not match the expected
    /// column schema.
    fn predict(&self, features: &[f64]) -> Result<usize, Self::Error>;

    /// Decode a label index back to its category string.
    ///
    /// # Errors
    /// Returns error if the index is outside the label set.
    fn decode_label(&self, index: usize) -> Result<&str, Self::Error>;
}
