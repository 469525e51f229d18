//! Comparison sessions.
//!
//! A session binds a source descriptor, a destination descriptor, the frozen
//! session-scoped comparers, and a shared global registry. Once built it is
//! immutable: `compare` writes no session state, so one session can serve
//! concurrent callers on separate threads.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use fieldwise_core::cache::DescriptorCache;
use fieldwise_core::errors::{CompareError, Result};
use fieldwise_core::model::TypeDescriptor;
use fieldwise_core::record::{Record, TypeKey};
use fieldwise_core::registry::{Comparer, ComparerRegistry};

use crate::engine;
use crate::results::ComparisonResults;

/// An immutable, reusable comparison session for one type pair
///
/// Obtained from [`ComparerConfiguration::build`](crate::ComparerConfiguration::build)
/// when overrides are needed, or from the shortcut constructors here for the
/// plain case. `A == B` is a valid self-comparison configuration (two
/// distinct instances of one type).
pub struct CompareSession {
    source: Arc<TypeDescriptor>,
    destination: Arc<TypeDescriptor>,
    comparers: HashMap<TypeId, Arc<dyn Comparer>>,
    globals: Arc<ComparerRegistry>,
}

impl CompareSession {
    pub(crate) fn new(
        source: Arc<TypeDescriptor>,
        destination: Arc<TypeDescriptor>,
        comparers: HashMap<TypeId, Arc<dyn Comparer>>,
        globals: Arc<ComparerRegistry>,
    ) -> Self {
        Self {
            source,
            destination,
            comparers,
            globals,
        }
    }

    /// Create a session with no overrides, scanning both types on first use
    ///
    /// Declared mappings are excluded, matching the default of
    /// [`configure`](crate::configure).
    pub fn create<A: Record, B: Record>(
        cache: &DescriptorCache,
        globals: &Arc<ComparerRegistry>,
    ) -> Self {
        Self::create_with::<A, B>(cache, globals, HashMap::new())
    }

    /// Create a session with no overrides but session-scoped comparers
    pub fn create_with<A: Record, B: Record>(
        cache: &DescriptorCache,
        globals: &Arc<ComparerRegistry>,
        comparers: HashMap<TypeId, Arc<dyn Comparer>>,
    ) -> Self {
        Self::new(
            cache.get_or_scan::<A>(false),
            cache.get_or_scan::<B>(false),
            comparers,
            Arc::clone(globals),
        )
    }

    /// Create a session from already-scanned types, without scanning
    ///
    /// # Errors
    ///
    /// Returns `NoTypeInformation` when either type was never scanned into
    /// the cache.
    pub fn from_cached(
        cache: &DescriptorCache,
        source: TypeKey,
        destination: TypeKey,
        globals: &Arc<ComparerRegistry>,
    ) -> Result<Self> {
        Ok(Self::new(
            cache.get(source, false)?,
            cache.get(destination, false)?,
            HashMap::new(),
            Arc::clone(globals),
        ))
    }

    /// The source type descriptor this session is bound to
    pub fn source(&self) -> &TypeDescriptor {
        &self.source
    }

    /// The destination type descriptor this session is bound to
    pub fn destination(&self) -> &TypeDescriptor {
        &self.destination
    }

    pub(crate) fn resolve_comparer(&self, value_type: TypeId) -> Option<Arc<dyn Comparer>> {
        self.comparers
            .get(&value_type)
            .map(Arc::clone)
            .or_else(|| self.globals.get(value_type))
    }

    /// Compare two record instances property by property
    ///
    /// Returns the ordered result collection with its difference summary, or
    /// a single named error raised before any property was processed; a
    /// partially filled result set is never observable.
    ///
    /// # Errors
    ///
    /// - `TypeMismatch` — either argument's runtime type does not exactly
    ///   match the session's descriptor for that side
    /// - `SameInstance` — both arguments are the identical instance
    pub fn compare<A: Record, B: Record>(&self, a: &A, b: &B) -> Result<ComparisonResults> {
        if TypeId::of::<A>() != self.source.key().id() {
            return Err(CompareError::TypeMismatch {
                side: "source",
                expected: self.source.key().name().to_string(),
                actual: std::any::type_name::<A>().to_string(),
            });
        }
        if TypeId::of::<B>() != self.destination.key().id() {
            return Err(CompareError::TypeMismatch {
                side: "destination",
                expected: self.destination.key().name().to_string(),
                actual: std::any::type_name::<B>().to_string(),
            });
        }
        // Self-comparison of one instance is always vacuous; reject it rather
        // than report equality.
        if TypeId::of::<A>() == TypeId::of::<B>()
            && std::ptr::eq(a as *const A as *const (), b as *const B as *const ())
        {
            return Err(CompareError::SameInstance {
                type_name: self.source.key().name().to_string(),
            });
        }

        Ok(engine::walk(self, a as &dyn Any, b as &dyn Any))
    }
}

impl std::fmt::Debug for CompareSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompareSession")
            .field("source", &self.source.key().name())
            .field("destination", &self.destination.key().name())
            .field("session_comparers", &self.comparers.len())
            .finish()
    }
}
