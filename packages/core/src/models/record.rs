//! Record Data Structures
//!
//! This module defines the core `Record` struct: the universal, generic
//! wrapper for one content record as materialized by the external store.
//!
//! # Architecture
//!
//! - **Universal Record**: a single struct represents all record types
//! - **Open JSON Fields**: all type-specific data lives in the `fields` object
//! - **Read-Only From Here**: the hydration layer wraps records, it never
//!   mutates them
//!
//! # Examples
//!
//! ```rust
//! use modelkit_core::models::Record;
//! use serde_json::json;
//!
//! // A generic record with no specialized model
//! let page = Record::new(
//!     "page".to_string(),
//!     "About us".to_string(),
//!     json!({}),
//! );
//!
//! // A file record carrying attachment data in its fields
//! let file = Record::new(
//!     "file".to_string(),
//!     "Quarterly report".to_string(),
//!     json!({
//!         "mime_type": "application/pdf",
//!         "file_name": "report-q3.pdf",
//!         "file_size": 184_320,
//!     }),
//! );
//! assert_eq!(file.field_str("mime_type"), Some("application/pdf"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for records and model construction
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid record ID: {0}")]
    InvalidId(String),

    #[error("Fields validation failed: {0}")]
    InvalidFields(String),
}

/// Universal record structure for all content types.
///
/// # Fields
///
/// - `id`: Unique identifier (UUID unless the store assigned its own)
/// - `record_type`: Type identifier (e.g., "page", "file"); an empty string
///   means the record carries no type and always resolves generically
/// - `title`: Primary title/text of the record
/// - `created_at` / `modified_at`: Store-assigned timestamps
/// - `fields`: JSON object containing all type-specific data
///
/// All type-specific data is stored in the `fields` object, so a record of
/// any type round-trips through the same struct and the same store table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier
    pub id: String,

    /// Record type (e.g., "page", "file"); empty means untyped
    pub record_type: String,

    /// Primary title of the record
    pub title: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,

    /// All type-specific fields as an open JSON object
    pub fields: serde_json::Value,
}

impl Record {
    /// Create a new Record with an auto-generated UUID
    ///
    /// # Arguments
    ///
    /// * `record_type` - Type identifier (e.g., "file")
    /// * `title` - Primary title
    /// * `fields` - JSON object with type-specific data
    pub fn new(record_type: String, title: String, fields: serde_json::Value) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            record_type,
            title,
            created_at: now,
            modified_at: now,
            fields,
        }
    }

    /// Create a new Record with an explicit identifier
    ///
    /// Use this when the external store owns ID assignment.
    pub fn new_with_id(
        id: String,
        record_type: String,
        title: String,
        fields: serde_json::Value,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            record_type,
            title,
            created_at: now,
            modified_at: now,
            fields,
        }
    }

    /// Whether the record carries a record type at all
    ///
    /// Records without a type can never resolve to a specialized model.
    pub fn has_record_type(&self) -> bool {
        !self.record_type.is_empty()
    }

    /// Read one field from the open `fields` object
    ///
    /// Returns `None` for absent fields; a missing optional field is never
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modelkit_core::models::Record;
    /// use serde_json::json;
    ///
    /// let record = Record::new(
    ///     "file".to_string(),
    ///     "Photo".to_string(),
    ///     json!({"mime_type": "image/jpeg"}),
    /// );
    /// assert!(record.field("mime_type").is_some());
    /// assert!(record.field("no_such_field").is_none());
    /// ```
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    /// Read one field as a string
    ///
    /// An empty string is treated as absent, matching the `has_x` pairing
    /// rule on models ("present" means non-empty).
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Read one field as an unsigned integer
    pub fn field_u64(&self, name: &str) -> Option<u64> {
        self.field(name).and_then(|v| v.as_u64())
    }

    /// Validate structural invariants of the record
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the ID is empty or `fields` is not a
    /// JSON object.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::InvalidId(
                "record ID must not be empty".to_string(),
            ));
        }

        match &self.fields {
            serde_json::Value::Object(_) => Ok(()),
            other => Err(ValidationError::InvalidFields(format!(
                "fields must be a JSON object, got {other}"
            ))),
        }
    }
}
