//! Fieldwise Engine - the property-by-property comparison layer
//!
//! Compares two record instances (possibly of different record types)
//! property by property, producing a per-property [`Verdict`] and an overall
//! "are these different" summary. Built on the descriptors, cache, and
//! comparer registry from `fieldwise-core`:
//! - [`configure`] starts a chainable [`ComparerConfiguration`] for a type
//!   pair (renames, ignores, coercion control, session comparers)
//! - [`CompareSession`] is the immutable, reusable product; its shortcut
//!   constructors cover the no-overrides case
//! - `compare(a, b)` walks the source descriptor and returns a
//!   [`ComparisonResults`] collection
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fieldwise_core::model::PropertySpec;
//! use fieldwise_core::record::Record;
//! use fieldwise_core::registry::ComparerRegistry;
//! use fieldwise_core::DescriptorCache;
//! use fieldwise_engine::{CompareSession, Verdict};
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! impl Record for Person {
//!     fn properties() -> Vec<PropertySpec> {
//!         vec![
//!             PropertySpec::of("Name", |p: &Person| p.name.clone()),
//!             PropertySpec::of("Age", |p: &Person| p.age),
//!         ]
//!     }
//! }
//!
//! let cache = DescriptorCache::new();
//! let globals = Arc::new(ComparerRegistry::with_defaults());
//! let session = CompareSession::create::<Person, Person>(&cache, &globals);
//!
//! let ann = Person { name: "Ann".into(), age: 30 };
//! let older_ann = Person { name: "Ann".into(), age: 31 };
//! let results = session.compare(&ann, &older_ann).unwrap();
//!
//! assert!(results.is_different());
//! assert_eq!(results.get("Age").unwrap().verdict(), Some(Verdict::LessThan));
//! ```

pub mod configuration;
mod engine;
pub mod results;
pub mod session;

// Re-export commonly used types
pub use configuration::{configure, ComparerConfiguration};
pub use results::{ComparisonResults, PropertyComparisonResult, Verdict};
pub use session::CompareSession;
