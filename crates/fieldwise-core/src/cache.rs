//! The process-wide type descriptor cache.
//!
//! Scans a record type once per `(type, declared-mapping-inclusion)` pair and
//! hands out shared `Arc` descriptors from then on. The cache is an explicit
//! service object: construct one, share it by reference with whatever needs
//! it. Nothing here is an ambient singleton, so tests can isolate their own
//! cache instances.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::{CompareError, Result};
use crate::model::TypeDescriptor;
use crate::record::{Record, TypeKey};

/// Lazily populated store of scanned type descriptors
///
/// Thread-safe for concurrent first-use: the check-then-insert sequence runs
/// under a single mutex, while scanning itself (pure introspection) runs
/// outside it. Racing scanners converge on whichever entry lands first, so
/// every caller observes the same shared descriptor. Entries are never
/// evicted.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: Mutex<HashMap<(TypeId, bool), Arc<TypeDescriptor>>>,
}

impl DescriptorCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the descriptor for `T`, scanning it on first use
    ///
    /// `include_declared_mappings` selects which variant of the descriptor is
    /// wanted; the two variants of one type may coexist in the cache. A
    /// request with declared mappings excluded also accepts an existing
    /// included-variant entry rather than scanning a second time, so such a
    /// caller can observe declared mappings it did not ask for.
    pub fn get_or_scan<T: Record>(&self, include_declared_mappings: bool) -> Arc<TypeDescriptor> {
        let key = (TypeId::of::<T>(), include_declared_mappings);

        if let Some(existing) = self.lookup(TypeId::of::<T>(), include_declared_mappings) {
            return existing;
        }

        // Scan outside the lock; re-check before insert so racers converge.
        let scanned = Arc::new(Self::scan::<T>(include_declared_mappings));
        let mut entries = self.lock();
        if let Some(existing) = entries.get(&key) {
            return Arc::clone(existing);
        }
        tracing::debug!(
            record_type = %T::type_key(),
            include_declared_mappings,
            properties = scanned.len(),
            "scanned record type"
        );
        entries.insert(key, Arc::clone(&scanned));
        scanned
    }

    /// Get the descriptor for an already-scanned type, without scanning
    ///
    /// The lookup-only path for callers that hold a `TypeKey` but not the
    /// concrete type. Follows the same excluded-request reuse rule as
    /// [`get_or_scan`](Self::get_or_scan).
    ///
    /// # Errors
    ///
    /// Returns `NoTypeInformation` naming the type when no matching variant
    /// was ever scanned.
    pub fn get(
        &self,
        key: TypeKey,
        include_declared_mappings: bool,
    ) -> Result<Arc<TypeDescriptor>> {
        self.lookup(key.id(), include_declared_mappings)
            .ok_or_else(|| CompareError::NoTypeInformation {
                type_name: key.name().to_string(),
            })
    }

    /// Get a private deep copy of `T`'s descriptor for configuration overrides
    ///
    /// The clone's mapping tables are independent of the cached entry, so
    /// overrides layered onto it never leak into the shared descriptor.
    pub fn clone_for_configuration<T: Record>(
        &self,
        include_declared_mappings: bool,
    ) -> TypeDescriptor {
        (*self.get_or_scan::<T>(include_declared_mappings)).clone()
    }

    fn lookup(
        &self,
        type_id: TypeId,
        include_declared_mappings: bool,
    ) -> Option<Arc<TypeDescriptor>> {
        let entries = self.lock();
        if let Some(existing) = entries.get(&(type_id, include_declared_mappings)) {
            return Some(Arc::clone(existing));
        }
        if !include_declared_mappings {
            // Excluded-request reuse: an included-variant entry satisfies a
            // request that merely does not insist on declared mappings.
            if let Some(existing) = entries.get(&(type_id, true)) {
                return Some(Arc::clone(existing));
            }
        }
        None
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(TypeId, bool), Arc<TypeDescriptor>>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Pure introspection of `T`; holds no lock and touches no shared state
    fn scan<T: Record>(include_declared_mappings: bool) -> TypeDescriptor {
        TypeDescriptor::build(
            T::type_key(),
            T::properties(),
            T::declared_mappings(),
            include_declared_mappings,
        )
    }
}
