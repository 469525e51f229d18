//! Comparers and the process-wide comparer registry.
//!
//! A [`Comparer`] is the sole extension interface into the comparison engine:
//! a three-way ordering function over dynamic values. The
//! [`ComparerRegistry`] holds the process-wide defaults, keyed by the
//! declared value type; session-scoped comparers (registered on a
//! configuration builder) shadow it per type.

use std::any::TypeId;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::CompareFailure;
use crate::model::Value;
use crate::record::TypeKey;

/// Three-way ordering over dynamic property values
///
/// Implementations receive the two values after any string coercion has been
/// applied. Returning `Err` marks the property's result as failed without
/// aborting the walk, standing in for a comparator that threw.
pub trait Comparer: Send + Sync {
    /// Compare two values, returning their ordering
    ///
    /// # Errors
    ///
    /// Returns a `CompareFailure` when the two values cannot be ordered.
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, CompareFailure>;
}

/// Default comparer over same-kind values
///
/// Orders via [`Value::partial_cmp_same_kind`]; kind mismatches and
/// incomparable floats (NaN) fail rather than guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdComparer;

impl Comparer for OrdComparer {
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, CompareFailure> {
        a.partial_cmp_same_kind(b).ok_or_else(|| {
            CompareFailure::new(format!("values are not comparable: {} vs {}", a, b))
        })
    }
}

/// Process-wide registry of default comparers, keyed by value type
///
/// Shared mutable state with explicit ownership: construct one (usually via
/// [`with_defaults`](Self::with_defaults)), wrap it in an `Arc`, and pass it
/// to session construction. Registration is last-write-wins per value type
/// and is expected to be rare and administrative; reads during comparison
/// take the read lock only.
#[derive(Default)]
pub struct ComparerRegistry {
    comparers: RwLock<HashMap<TypeId, Arc<dyn Comparer>>>,
}

impl ComparerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with defaults for the primitive value types
    ///
    /// Covers the integer and float primitives, `bool`, `char`, `String`,
    /// and `Option<T>` of each, all using [`OrdComparer`]. String coercion
    /// resolves against the `String` entry.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let default: Arc<dyn Comparer> = Arc::new(OrdComparer);

        macro_rules! seed {
            ($($t:ty),*) => {
                $(
                    registry.register_keyed(TypeKey::of::<$t>(), Arc::clone(&default));
                    registry.register_keyed(TypeKey::of::<Option<$t>>(), Arc::clone(&default));
                )*
            };
        }

        seed!(
            i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, String
        );
        registry
    }

    /// Register a comparer for value type `T` (last write wins)
    pub fn register<T: 'static>(&self, comparer: Arc<dyn Comparer>) {
        self.register_keyed(TypeKey::of::<T>(), comparer);
    }

    /// Register a comparer under an explicit type key (last write wins)
    pub fn register_keyed(&self, key: TypeKey, comparer: Arc<dyn Comparer>) {
        self.comparers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.id(), comparer);
    }

    /// Look up the comparer registered for a value type
    pub fn get(&self, value_type: TypeId) -> Option<Arc<dyn Comparer>> {
        self.comparers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&value_type)
            .map(Arc::clone)
    }
}

impl fmt::Debug for ComparerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .comparers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("ComparerRegistry")
            .field("comparers", &len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_comparer_orders_ints() {
        assert_eq!(
            OrdComparer.compare(&Value::Int(1), &Value::Int(2)),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn test_ord_comparer_fails_on_kind_mismatch() {
        let err = OrdComparer
            .compare(&Value::Int(1), &Value::Str("1".to_string()))
            .unwrap_err();
        assert!(err.message().contains("not comparable"));
    }
}
