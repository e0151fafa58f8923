//! Error types for restoplan-models

use thiserror::Error;

/// Errors raised while loading or evaluating scoring models
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file could not be parsed
    #[error("Failed to parse model artifact for '{component}': {source}")]
    Parse {
        component: String,
        #[source]
        source: serde_json::Error,
    },

    /// Model weight vector does not match the preprocessor's feature count
    #[error("Model shape mismatch for '{component}': {expected} features, {got} weights")]
    ShapeMismatch {
        component: String,
        expected: usize,
        got: usize,
    },

    /// Preprocessor references an attribute the job record does not have
    #[error("Unknown job attribute '{field}' referenced by preprocessor")]
    UnknownAttribute { field: String },

    /// Preprocessor scale must be non-zero for standardization
    #[error("Invalid scale for feature '{field}': must be non-zero")]
    InvalidScale { field: String },
}
