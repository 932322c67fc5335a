//! In-Memory Store
//!
//! A small `RecordStore` + `MetadataProvider` implementation over plain
//! vectors and maps. Used by the test suite and by embedders that want the
//! hydration layer without an external engine. The metadata fetch counter
//! exists so tests can observe lazy-load idempotence.

use crate::models::Record;
use crate::store::{
    FileMetadata, FilterOperator, MetadataProvider, QueryArgs, QueryFilter, RecordStore, ResultSet,
    StoreError,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// In-memory record store with insertion-order query results
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
    metadata: Mutex<HashMap<String, FileMetadata>>,
    metadata_fetches: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            metadata: Mutex::new(HashMap::new()),
            metadata_fetches: AtomicUsize::new(0),
        }
    }

    /// Append one record
    pub fn insert_record(&self, record: Record) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Attach a metadata blob to a record ID
    pub fn set_metadata(&self, record_id: &str, metadata: FileMetadata) {
        self.metadata
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record_id.to_string(), metadata);
    }

    /// How many times the metadata provider has been hit
    pub fn metadata_fetch_count(&self) -> usize {
        self.metadata_fetches.load(Ordering::SeqCst)
    }

    fn filter_matches(record: &Record, filter: &QueryFilter) -> bool {
        let Some(value) = record.field(&filter.field) else {
            return false;
        };

        match filter.operator {
            FilterOperator::Equals => value == &filter.value,
            FilterOperator::Contains => match (value.as_str(), filter.value.as_str()) {
                (Some(haystack), Some(needle)) => haystack.contains(needle),
                _ => false,
            },
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn execute_query(&self, args: &QueryArgs) -> Result<ResultSet, StoreError> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let matching: Vec<Record> = records
            .iter()
            .filter(|record| args.matches_record_type(&record.record_type))
            .filter(|record| {
                args.filters
                    .iter()
                    .all(|filter| Self::filter_matches(record, filter))
            })
            .take(args.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(ResultSet::from_records(matching))
    }
}

#[async_trait]
impl MetadataProvider for MemoryStore {
    async fn file_metadata(&self, record_id: &str) -> Result<Option<FileMetadata>, StoreError> {
        self.metadata_fetches.fetch_add(1, Ordering::SeqCst);

        let metadata = self
            .metadata
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        Ok(metadata.get(record_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded_store() -> MemoryStore {
        MemoryStore::with_records(vec![
            Record::new_with_id(
                "a".to_string(),
                "file".to_string(),
                "First".to_string(),
                json!({"mime_type": "image/png"}),
            ),
            Record::new_with_id(
                "b".to_string(),
                "page".to_string(),
                "Second".to_string(),
                json!({"slug": "about"}),
            ),
            Record::new_with_id(
                "c".to_string(),
                "file".to_string(),
                "Third".to_string(),
                json!({"mime_type": "application/pdf"}),
            ),
        ])
    }

    #[tokio::test]
    async fn test_query_by_record_type_preserves_order() {
        let store = seeded_store();
        let results = store
            .execute_query(&QueryArgs::for_record_type("file"))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results.get(0).unwrap().id(), "a");
        assert_eq!(results.get(1).unwrap().id(), "c");
    }

    #[tokio::test]
    async fn test_query_all_types() {
        let store = seeded_store();
        let results = store.execute_query(&QueryArgs::default()).await.unwrap();
        assert_eq!(results.len(), 3);

        let starred = store
            .execute_query(&QueryArgs::for_record_type("*"))
            .await
            .unwrap();
        assert_eq!(starred.len(), 3);
    }

    #[tokio::test]
    async fn test_query_filters_and_limit() {
        let store = seeded_store();
        let args = QueryArgs {
            record_type: Some("file".to_string()),
            filters: vec![QueryFilter {
                field: "mime_type".to_string(),
                operator: FilterOperator::Contains,
                value: json!("pdf"),
            }],
            limit: None,
        };
        let results = store.execute_query(&args).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.get(0).unwrap().id(), "c");

        let limited = store
            .execute_query(&QueryArgs {
                limit: Some(1),
                ..QueryArgs::default()
            })
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_query_result() {
        let store = seeded_store();
        let results = store
            .execute_query(&QueryArgs::for_record_type("unknown"))
            .await
            .unwrap();
        assert!(!results.has_results());
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_metadata_counter() {
        let store = MemoryStore::new();
        store.set_metadata(
            "a",
            FileMetadata {
                width: 10,
                height: 20,
            },
        );

        assert_eq!(store.metadata_fetch_count(), 0);
        let found = store.file_metadata("a").await.unwrap();
        assert_eq!(
            found,
            Some(FileMetadata {
                width: 10,
                height: 20,
            })
        );
        let missing = store.file_metadata("zzz").await.unwrap();
        assert_eq!(missing, None);
        assert_eq!(store.metadata_fetch_count(), 2);
    }
}
