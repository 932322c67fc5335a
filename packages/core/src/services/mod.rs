//! Hydration Services
//!
//! This module contains the service layer of the crate:
//!
//! - `ModelService` - per-record resolution, batch transformation, and
//!   query composition over the external store
//!
//! Services coordinate between the type registry and the store seams; all
//! business rules about when a record becomes a model live here.

pub mod error;
pub mod model_service;


pub use error::ModelServiceError;
pub use model_service::ModelService;
