//! ModelKit Core - Typed Model Hydration for Content Records
//!
//! This crate upgrades generic content records into type-specific models.
//! Records carry a `record_type` identifier; record types registered with a
//! model factory have their records transparently wrapped in the registered
//! model, while everything else passes through unchanged. Calling code gets
//! type-specific behavior (a file record exposing size, classification, and
//! dimensions) without the retrieval layer knowing about those types.
//!
//! # Architecture
//!
//! - **Universal Record**: one struct for all content types, with
//!   type-specific data in an open JSON `fields` object
//! - **Typed Factories**: record types register a compile-time-checked
//!   factory, not a class-name string
//! - **Decorator, Not Engine**: storage and query execution belong to
//!   external collaborators behind the `store` seams
//!
//! # Modules
//!
//! - [`models`] - `Record`, the model contract, and the file model
//! - [`registry`] - record-type registration and the type-to-factory map
//! - [`services`] - resolution, batch hydration, and query composition
//! - [`store`] - external query-engine and metadata-provider seams

pub mod models;
pub mod registry;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use models::*;
pub use registry::*;
pub use services::*;
pub use store::*;
