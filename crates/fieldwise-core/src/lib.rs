//! Fieldwise Core - record introspection model
//!
//! This crate provides the foundational pieces of Fieldwise, the
//! property-by-property record comparer:
//! - The `Record` trait and `TypeKey` runtime type identity
//! - Dynamic `Value` representation with string coercion
//! - Property and type descriptors with per-destination mapping tables
//! - The lazily populated, thread-safe `DescriptorCache`
//! - The `Comparer` extension trait and the process-wide `ComparerRegistry`
//! - The error taxonomy and the logging facility
//!
//! The comparison engine itself lives in `fieldwise-engine`.

pub mod cache;
pub mod errors;
pub mod logging;
pub mod model;
pub mod record;
pub mod registry;

// Re-export commonly used types
pub use cache::DescriptorCache;
pub use errors::{CompareError, CompareFailure, Result};
pub use model::{DeclaredMapping, IntoValue, PropertyDescriptor, PropertyMap, PropertySpec, TypeDescriptor, Value};
pub use record::{Record, TypeKey};
pub use registry::{Comparer, ComparerRegistry, OrdComparer};
