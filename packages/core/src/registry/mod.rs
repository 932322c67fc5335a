//! Record-Type Registry
//!
//! Maps record-type names to model factories. Record types are registered
//! with the external registration system as [`RecordTypeDescriptor`]s; a
//! descriptor may carry an optional model factory, and that attachment is
//! the sole configuration channel for hydration.
//!
//! # Architecture
//!
//! - **Typed Factories**: registration stores a factory closure checked at
//!   compile time against the model contract, not a class-name string
//! - **Explicit Snapshot**: [`TypeRegistry`] is constructed over a
//!   [`RecordTypeSource`] and holds a mapping snapshot; `refresh()`
//!   re-enumerates the source and replaces the snapshot wholesale, so
//!   concurrent readers never observe a partially built mapping
//!
//! # Examples
//!
//! ```rust
//! use modelkit_core::models::FileModel;
//! use modelkit_core::registry::{RecordTypeDescriptor, RecordTypeSet, TypeRegistry};
//! use std::sync::Arc;
//!
//! let types = RecordTypeSet::new();
//! types.register(RecordTypeDescriptor::new("page", "Page"));
//! types.register(RecordTypeDescriptor::new("file", "File").with_model::<FileModel>());
//!
//! let registry = TypeRegistry::new(Arc::new(types));
//! assert!(registry.mapping_model("file").is_some());
//! assert!(registry.mapping_model("page").is_none());
//! ```

use crate::models::{FromRecord, Record, RecordModel, ValidationError};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type FactoryFn = dyn Fn(Record) -> Result<Box<dyn RecordModel>, ValidationError> + Send + Sync;

/// Cloneable handle to a model constructor
///
/// Wraps the record-to-model closure registered for one record type. The
/// normal way to obtain one is [`ModelFactory::of`], which ties the closure
/// to a concrete model type at compile time.
#[derive(Clone)]
pub struct ModelFactory {
    model_name: &'static str,
    build: Arc<FactoryFn>,
}

impl ModelFactory {
    /// Factory for a concrete model type
    pub fn of<M>() -> Self
    where
        M: FromRecord + RecordModel + 'static,
    {
        Self {
            model_name: std::any::type_name::<M>(),
            build: Arc::new(|record| {
                M::from_record(record).map(|model| Box::new(model) as Box<dyn RecordModel>)
            }),
        }
    }

    /// Factory from an arbitrary closure
    ///
    /// Escape hatch for models that need construction context beyond the
    /// record itself; the closure still receives the record as its sole
    /// argument.
    pub fn from_fn<F>(model_name: &'static str, build: F) -> Self
    where
        F: Fn(Record) -> Result<Box<dyn RecordModel>, ValidationError> + Send + Sync + 'static,
    {
        Self {
            model_name,
            build: Arc::new(build),
        }
    }

    /// Name of the model type this factory constructs
    pub fn model_name(&self) -> &'static str {
        self.model_name
    }

    /// Construct a model around the record
    ///
    /// # Errors
    ///
    /// Returns the model's `ValidationError` when construction fails. For a
    /// factory registered under the record's own type this indicates a
    /// misregistration, which callers treat as fatal.
    pub fn build(&self, record: Record) -> Result<Box<dyn RecordModel>, ValidationError> {
        (self.build)(record)
    }
}

impl fmt::Debug for ModelFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelFactory")
            .field("model", &self.model_name)
            .finish()
    }
}

/// One registered record type
///
/// The `model` attachment is optional; most record types resolve
/// generically and never carry one.
#[derive(Debug, Clone)]
pub struct RecordTypeDescriptor {
    /// Unique record-type name (e.g. "file")
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// Optional model factory for this type
    pub model: Option<ModelFactory>,
}

impl RecordTypeDescriptor {
    /// Descriptor with no model attachment
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            model: None,
        }
    }

    /// Attach a model type, checked against the model contract
    pub fn with_model<M>(mut self) -> Self
    where
        M: FromRecord + RecordModel + 'static,
    {
        self.model = Some(ModelFactory::of::<M>());
        self
    }

    /// Attach a prebuilt factory
    pub fn with_factory(mut self, factory: ModelFactory) -> Self {
        self.model = Some(factory);
        self
    }

    /// Whether this type carries a model attachment
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }
}

/// Enumeration side of the external registration system
///
/// The registry scans all descriptors, unfiltered, every time it rebuilds
/// its mapping.
pub trait RecordTypeSource: Send + Sync {
    /// All currently registered record types
    fn list_record_types(&self) -> Vec<RecordTypeDescriptor>;
}

/// In-memory registration surface
///
/// The bundled [`RecordTypeSource`] for embedders without an external
/// registration system, and for tests. Registering a name twice replaces
/// the earlier descriptor.
#[derive(Default)]
pub struct RecordTypeSet {
    types: RwLock<Vec<RecordTypeDescriptor>>,
}

impl RecordTypeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one record type; last registration for a name wins
    pub fn register(&self, descriptor: RecordTypeDescriptor) {
        let mut types = self
            .types
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        types.retain(|existing| existing.name != descriptor.name);
        types.push(descriptor);
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordTypeSource for RecordTypeSet {
    fn list_record_types(&self) -> Vec<RecordTypeDescriptor> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Type-to-factory mapping with an explicit refresh cycle
///
/// Holds a snapshot of the mapping derived from the source. Keys are
/// exactly the registered type names that carry a model attachment; no key
/// maps to "no factory". `refresh()` must be called after registration
/// changes; construction performs the initial build.
pub struct TypeRegistry {
    source: Arc<dyn RecordTypeSource>,
    mapping: RwLock<HashMap<String, ModelFactory>>,
}

impl TypeRegistry {
    /// Build a registry over a registration source
    pub fn new(source: Arc<dyn RecordTypeSource>) -> Self {
        let mapping = Self::build_mapping(source.as_ref());
        tracing::debug!(model_types = mapping.len(), "type registry built");

        Self {
            source,
            mapping: RwLock::new(mapping),
        }
    }

    /// Re-enumerate the source and replace the mapping snapshot
    ///
    /// Compute-and-replace: the fresh mapping is built outside the lock and
    /// swapped in whole.
    pub fn refresh(&self) {
        let fresh = Self::build_mapping(self.source.as_ref());
        tracing::debug!(model_types = fresh.len(), "type registry refreshed");

        *self
            .mapping
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    /// Current record-type to factory mapping
    ///
    /// Empty when no registered type carries a model. Factory handles are
    /// Arc-backed, so the clone is cheap.
    pub fn mapping_models(&self) -> HashMap<String, ModelFactory> {
        self.mapping
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Factory registered for one record type
    ///
    /// `None` for unregistered types and for types without a model
    /// attachment; never an error.
    pub fn mapping_model(&self, record_type: &str) -> Option<ModelFactory> {
        self.mapping
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(record_type)
            .cloned()
    }

    fn build_mapping(source: &dyn RecordTypeSource) -> HashMap<String, ModelFactory> {
        source
            .list_record_types()
            .into_iter()
            .filter(|descriptor| !descriptor.name.is_empty())
            .filter_map(|descriptor| {
                let RecordTypeDescriptor { name, model, .. } = descriptor;
                model.map(|factory| (name, factory))
            })
            .collect()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mapping = self
            .mapping
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        f.debug_struct("TypeRegistry")
            .field("model_types", &mapping.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod registry_test;
