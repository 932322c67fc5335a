//! Data Models
//!
//! This module contains the core data structures of the hydration layer:
//!
//! - `Record` - universal record wrapper for all content types
//! - `FromRecord` / `RecordModel` - the contract specialized models satisfy
//! - `Hydrated` - record-or-model element of a transformed result set
//! - `FileModel` - specialized model for file/attachment records
//!
//! All type-specific record data lives in the open JSON `fields` object of
//! the universal `Record`; models are thin typed shells around it.

mod file_model;
mod model;
mod record;

#[cfg(test)]
mod file_model_test;

pub use file_model::{FileKind, FileModel};
pub use model::{FromRecord, Hydrated, RecordModel};
pub use record::{Record, ValidationError};
