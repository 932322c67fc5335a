//! External Store Seams
//!
//! This crate decorates query results; it never owns storage or query
//! execution. The traits here are the seams to those external
//! collaborators:
//!
//! - `RecordStore` - query engine yielding raw records
//! - `MetadataProvider` - source of derived metadata for models
//! - `MemoryStore` - in-memory implementation of both, used by tests
//!
//! Shared shapes (`QueryArgs`, `ResultSet`, `FileMetadata`) live here too.

mod error;
mod memory;
mod metadata;
mod record_store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use metadata::{FileMetadata, MetadataProvider};
pub use record_store::{FilterOperator, QueryArgs, QueryFilter, RecordStore, ResultSet};
