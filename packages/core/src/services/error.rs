//! Service Layer Error Types
//!
//! Error types for the hydration service, chaining up from the model and
//! store layers.

use crate::models::ValidationError;
use crate::store::StoreError;
use thiserror::Error;

/// Hydration service errors
#[derive(Error, Debug)]
pub enum ModelServiceError {
    /// A registered factory failed to construct its model around a record
    /// of the type it was registered for. This is a misregistration, not a
    /// runtime condition, so it propagates instead of degrading to
    /// pass-through.
    #[error("Model construction failed for record type '{record_type}': {source}")]
    ModelConstruction {
        record_type: String,
        #[source]
        source: ValidationError,
    },

    /// Record validation failed
    #[error("Record validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// The external store failed
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),
}

impl ModelServiceError {
    /// Create a model construction error
    pub fn model_construction(record_type: impl Into<String>, source: ValidationError) -> Self {
        Self::ModelConstruction {
            record_type: record_type.into(),
            source,
        }
    }
}
