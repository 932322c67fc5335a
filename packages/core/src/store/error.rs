//! Store Error Types
//!
//! Error types for the external-collaborator seams: query execution and
//! metadata retrieval. Service-layer errors wrap these.

use thiserror::Error;

/// Errors surfaced by record store and metadata provider implementations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query execution failed in the external engine
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Metadata source could not be reached for a record
    #[error("Metadata unavailable for record {id}: {reason}")]
    MetadataUnavailable { id: String, reason: String },
}

impl StoreError {
    /// Create a query failed error
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::QueryFailed(msg.into())
    }

    /// Create a metadata unavailable error
    pub fn metadata_unavailable(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MetadataUnavailable {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
