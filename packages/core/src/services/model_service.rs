//! Model Service - Record Resolution and Result-Set Hydration
//!
//! The service that upgrades generic records into their registered models:
//! per-record resolution against the type registry, element-wise result-set
//! transformation, and a convenience composition over the external query
//! engine.
//!
//! # Architecture
//!
//! - **Pass-Through Default**: records whose type has no registered model
//!   come back unchanged; that is the common case, not an error
//! - **Fatal Misregistration**: a factory that cannot construct its model
//!   around a record of its own type surfaces immediately instead of being
//!   masked by a fallback
//! - **Order-Preserving Batches**: transformation is an element-wise map;
//!   it never reorders, deduplicates, or drops
//!
//! # Examples
//!
//! ```rust
//! use modelkit_core::models::FileModel;
//! use modelkit_core::registry::{RecordTypeDescriptor, RecordTypeSet, TypeRegistry};
//! use modelkit_core::services::ModelService;
//! use modelkit_core::store::{MemoryStore, QueryArgs};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let types = RecordTypeSet::new();
//! types.register(RecordTypeDescriptor::new("file", "File").with_model::<FileModel>());
//!
//! let registry = Arc::new(TypeRegistry::new(Arc::new(types)));
//! let store = Arc::new(MemoryStore::new());
//! let service = ModelService::new(registry, store);
//!
//! let results = service
//!     .query_with_models(&QueryArgs::for_record_type("file"))
//!     .await?;
//! for element in &results {
//!     // File records are FileModel here, everything else stayed raw
//!     println!("{} -> model: {}", element.id(), element.is_model());
//! }
//! # Ok(())
//! # }
//! ```

use crate::models::{Hydrated, Record};
use crate::registry::TypeRegistry;
use crate::services::ModelServiceError;
use crate::store::{QueryArgs, RecordStore, ResultSet};
use std::sync::Arc;

/// Service for resolving records into their registered models
pub struct ModelService {
    registry: Arc<TypeRegistry>,
    store: Arc<dyn RecordStore>,
}

impl ModelService {
    /// Create a new ModelService
    ///
    /// # Arguments
    ///
    /// * `registry` - type-to-factory registry to resolve against
    /// * `store` - external query engine for `query_with_models`
    pub fn new(registry: Arc<TypeRegistry>, store: Arc<dyn RecordStore>) -> Self {
        Self { registry, store }
    }

    /// The registry this service resolves against
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Resolve one record into its registered model, or pass it through
    ///
    /// A record whose type is unregistered, carries no model, or is missing
    /// entirely (empty type) comes back as `Hydrated::Record`, unchanged.
    /// A registered type is wrapped by its factory, with the record as the
    /// sole constructor argument.
    ///
    /// # Errors
    ///
    /// Returns `ModelServiceError::ModelConstruction` when the registered
    /// factory rejects the record. Since factories are keyed by the
    /// record's own type, this only happens on misregistration and is
    /// deliberately not degraded to pass-through.
    pub fn resolve(&self, record: Record) -> Result<Hydrated, ModelServiceError> {
        let Some(factory) = self.registry.mapping_model(&record.record_type) else {
            return Ok(Hydrated::Record(record));
        };

        let record_type = record.record_type.clone();
        let model = factory
            .build(record)
            .map_err(|source| ModelServiceError::model_construction(&record_type, source))?;

        tracing::debug!(
            record_id = model.id(),
            record_type = %record_type,
            model = factory.model_name(),
            "record resolved to model"
        );

        Ok(Hydrated::Model(model))
    }

    /// Replace every raw element of a result set with its resolved form
    ///
    /// Element-wise and in place: order and count are preserved, and
    /// elements that are already models pass through untouched. An empty
    /// result set is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the first `ModelConstruction` failure.
    pub fn add_models(&self, result_set: ResultSet) -> Result<ResultSet, ModelServiceError> {
        if !result_set.has_results() {
            return Ok(result_set);
        }

        let items = result_set
            .into_items()
            .into_iter()
            .map(|element| match element {
                Hydrated::Record(record) => self.resolve(record),
                modeled @ Hydrated::Model(_) => Ok(modeled),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResultSet::from_items(items))
    }

    /// Query the store and hydrate the result set
    ///
    /// Runs the external engine with `args`; when it produced at least one
    /// record the batch transformation is applied, otherwise the empty
    /// result comes back as-is.
    ///
    /// # Errors
    ///
    /// Returns store failures and construction failures from the
    /// transformation.
    pub async fn query_with_models(
        &self,
        args: &QueryArgs,
    ) -> Result<ResultSet, ModelServiceError> {
        let result_set = self.store.execute_query(args).await?;
        if !result_set.has_results() {
            return Ok(result_set);
        }

        self.add_models(result_set)
    }
}
