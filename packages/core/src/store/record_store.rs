//! Record Store Seam - Query Execution
//!
//! The query engine is an external collaborator: this crate never executes
//! queries itself, it decorates the result sets an engine already produced.
//! [`RecordStore`] is the seam, [`QueryArgs`] the structured query shape it
//! accepts, and [`ResultSet`] the ordered output both sides share.

use crate::models::{Hydrated, Record};
use crate::store::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::slice;

/// Comparison operator for query filters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Equals,
    Contains,
}

/// One filter condition against a record field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    /// Field name inside the record's open `fields` object
    pub field: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Expected value
    pub value: serde_json::Value,
}

/// Structured query arguments passed to the record store
///
/// # Examples
///
/// ```rust
/// use modelkit_core::store::QueryArgs;
///
/// // All file records, capped at 20 results
/// let args = QueryArgs {
///     record_type: Some("file".to_string()),
///     filters: vec![],
///     limit: Some(20),
/// };
/// # let _ = args;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryArgs {
    /// Target record type; `None` or `"*"` matches all types
    pub record_type: Option<String>,
    /// Filter conditions, all of which must match
    pub filters: Vec<QueryFilter>,
    /// Optional result cap
    pub limit: Option<usize>,
}

impl QueryArgs {
    /// Query for all records of one type
    pub fn for_record_type(record_type: impl Into<String>) -> Self {
        Self {
            record_type: Some(record_type.into()),
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Whether the given type matches this query's target
    pub fn matches_record_type(&self, record_type: &str) -> bool {
        match self.record_type.as_deref() {
            None | Some("*") => true,
            Some(target) => target == record_type,
        }
    }
}

/// Ordered output of one query, before or after hydration
///
/// Holds record-or-model elements; the batch transformer replaces raw
/// elements in place, preserving order and count.
#[derive(Debug, Default)]
pub struct ResultSet {
    items: Vec<Hydrated>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw records fresh from the query engine
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            items: records.into_iter().map(Hydrated::Record).collect(),
        }
    }

    /// Build a result set from already-resolved elements
    pub fn from_items(items: Vec<Hydrated>) -> Self {
        Self { items }
    }

    /// Whether the query produced at least one record
    pub fn has_results(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at position `i`
    pub fn get(&self, index: usize) -> Option<&Hydrated> {
        self.items.get(index)
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> slice::Iter<'_, Hydrated> {
        self.items.iter()
    }

    /// Consume into the ordered element vector
    pub fn into_items(self) -> Vec<Hydrated> {
        self.items
    }
}

impl IntoIterator for ResultSet {
    type Item = Hydrated;
    type IntoIter = std::vec::IntoIter<Hydrated>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Hydrated;
    type IntoIter = slice::Iter<'a, Hydrated>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Abstraction over the external query engine
///
/// Implementations must be `Send + Sync` so futures can move between
/// threads. Query execution semantics (filter evaluation, ordering, limits)
/// belong entirely to the implementation; the hydration layer only consumes
/// the ordered output.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Execute a query and return the matching raw records, in engine order
    ///
    /// An empty result set is a normal terminal state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::QueryFailed` when the engine cannot execute the
    /// query.
    async fn execute_query(&self, args: &QueryArgs) -> Result<ResultSet, StoreError>;
}
