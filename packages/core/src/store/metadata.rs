//! Metadata Provider Seam
//!
//! Derived data for models (currently file dimensions) comes from an
//! external metadata source. Models fetch it lazily, at most once per
//! instance, through the [`MetadataProvider`] trait.

use crate::store::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Derived metadata blob for one file record
///
/// A zero-valued blob is the legitimate "nothing known" result; callers
/// check emptiness through the model's paired `has_` accessors rather than
/// through errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Width in pixels, 0 when unknown
    pub width: u32,

    /// Height in pixels, 0 when unknown
    pub height: u32,
}

/// Source of derived metadata for records
///
/// Implementations must be `Send + Sync`; the fetch is the one expensive
/// lookup in the hydration path, which is why models cache its result per
/// instance.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the metadata blob for one record
    ///
    /// Returns `Ok(None)` when the record has no metadata (e.g. the
    /// underlying file is absent on storage); that is a normal result, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MetadataUnavailable` when the source itself
    /// cannot be reached.
    async fn file_metadata(&self, record_id: &str) -> Result<Option<FileMetadata>, StoreError>;
}
