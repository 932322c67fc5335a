//! Model Base Contract
//!
//! The two traits every specialized model implements, plus `Hydrated`, the
//! record-or-model element type that transformed result sets are made of.
//!
//! # Architecture
//!
//! - **Universal Storage**: the store only ever deals in generic [`Record`]s
//! - **Typed Wrappers**: a model wraps exactly one record and adds
//!   type-specific accessors on top; wrapping never copies or mutates the
//!   record
//! - **Split Contract**: construction ([`FromRecord`], compile-time checked)
//!   is separate from uniform access ([`RecordModel`], object-safe) so that
//!   factories can be stored as trait objects while registration stays typed
//!
//! # Examples
//!
//! ```rust
//! use modelkit_core::models::{FileModel, FromRecord, Hydrated, Record};
//! use serde_json::json;
//!
//! let record = Record::new(
//!     "file".to_string(),
//!     "Photo".to_string(),
//!     json!({"mime_type": "image/jpeg"}),
//! );
//! let id = record.id.clone();
//!
//! let model = FileModel::from_record(record).unwrap();
//! let element = Hydrated::Model(Box::new(model));
//!
//! // Uniform access works the same on raw and modeled elements
//! assert_eq!(element.id(), id);
//! assert_eq!(element.record_type(), "file");
//! assert!(element.is_model());
//! ```

use crate::models::{Record, ValidationError};
use std::any::Any;
use std::fmt;

/// Construction half of the model contract
///
/// Every specialized model declares the record type it is responsible for
/// and a constructor taking exactly one record. The constructor must reject
/// records of any other type; the resolver relies on this to uphold the
/// invariant that a model's wrapped record always matches the type that
/// selected the model.
pub trait FromRecord: Sized {
    /// The record type this model wraps (e.g., "file")
    const RECORD_TYPE: &'static str;

    /// Wrap a record, validating its type
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRecordType` when the record's type
    /// does not match [`Self::RECORD_TYPE`].
    fn from_record(record: Record) -> Result<Self, ValidationError>;
}

/// Object-safe half of the model contract
///
/// Exposes the wrapped record and read-through field access so callers can
/// treat raw records and models uniformly. Field lookups on absent fields
/// yield `None`, never an error.
pub trait RecordModel: Send + Sync {
    /// The wrapped record
    fn record(&self) -> &Record;

    /// Convert back to the wrapped record (consumes the model)
    fn into_record(self: Box<Self>) -> Record;

    /// Upcast for checked downcasting to the concrete model type
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for checked downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The wrapped record's identifier
    fn id(&self) -> &str {
        &self.record().id
    }

    /// The wrapped record's type
    fn record_type(&self) -> &str {
        &self.record().record_type
    }

    /// Read-through access to one field of the wrapped record
    fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.record().field(name)
    }

    /// Read-through string access, empty treated as absent
    fn field_str(&self, name: &str) -> Option<&str> {
        self.record().field_str(name)
    }
}

/// One element of a transformed result set: the original raw record, or the
/// specialized model the resolver wrapped it in.
pub enum Hydrated {
    /// Record whose type has no registered model (pass-through)
    Record(Record),
    /// Record wrapped in its registered model
    Model(Box<dyn RecordModel>),
}

impl Hydrated {
    /// The underlying record, regardless of variant
    pub fn record(&self) -> &Record {
        match self {
            Hydrated::Record(record) => record,
            Hydrated::Model(model) => model.record(),
        }
    }

    /// The underlying record's identifier
    pub fn id(&self) -> &str {
        &self.record().id
    }

    /// The underlying record's type
    pub fn record_type(&self) -> &str {
        &self.record().record_type
    }

    /// Read-through access to one field of the underlying record
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.record().field(name)
    }

    /// Whether this element was wrapped in a specialized model
    pub fn is_model(&self) -> bool {
        matches!(self, Hydrated::Model(_))
    }

    /// Downcast to a concrete model type
    ///
    /// Returns `None` for raw elements and for models of a different
    /// concrete type.
    pub fn downcast_ref<M: RecordModel + 'static>(&self) -> Option<&M> {
        match self {
            Hydrated::Record(_) => None,
            Hydrated::Model(model) => model.as_any().downcast_ref::<M>(),
        }
    }

    /// Mutable downcast to a concrete model type
    pub fn downcast_mut<M: RecordModel + 'static>(&mut self) -> Option<&mut M> {
        match self {
            Hydrated::Record(_) => None,
            Hydrated::Model(model) => model.as_any_mut().downcast_mut::<M>(),
        }
    }

    /// Unwrap back to the raw record, discarding any model shell
    pub fn into_record(self) -> Record {
        match self {
            Hydrated::Record(record) => record,
            Hydrated::Model(model) => model.into_record(),
        }
    }
}

impl fmt::Debug for Hydrated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hydrated::Record(record) => f
                .debug_tuple("Hydrated::Record")
                .field(&record.id)
                .field(&record.record_type)
                .finish(),
            Hydrated::Model(model) => f
                .debug_tuple("Hydrated::Model")
                .field(&model.id())
                .field(&model.record_type())
                .finish(),
        }
    }
}

impl From<Record> for Hydrated {
    fn from(record: Record) -> Self {
        Hydrated::Record(record)
    }
}
