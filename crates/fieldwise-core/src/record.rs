//! The `Record` trait and runtime type identity.
//!
//! `Record` is the introspection seam of Fieldwise: a type implements it to
//! describe its comparable properties (name, declared value type, accessor)
//! and, optionally, the mapping directives it declares against other record
//! types. The descriptor cache reads this description exactly once per
//! `(type, inclusion-flag)` pair.

use std::any::{Any, TypeId};
use std::fmt;

use crate::model::{DeclaredMapping, PropertySpec};

/// Runtime identity of a record or field type
///
/// Wraps `TypeId` for exact-match comparison (no subtype leniency) together
/// with the type's name for error messages and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Get the key for a concrete type
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name, as reported by `std::any::type_name`
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A record type whose instances can be compared property by property
///
/// `properties()` must return one [`PropertySpec`] per comparable property,
/// in declaration order; property names must be unique within the type.
/// `declared_mappings()` is the declarative counterpart of configuration-time
/// overrides: directives returned here are seeded into the descriptor during
/// scanning, when the caller asks for them to be included.
///
/// # Example
///
/// ```
/// use fieldwise_core::model::PropertySpec;
/// use fieldwise_core::record::Record;
///
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// impl Record for Person {
///     fn properties() -> Vec<PropertySpec> {
///         vec![
///             PropertySpec::of("Name", |p: &Person| p.name.clone()),
///             PropertySpec::of("Age", |p: &Person| p.age),
///         ]
///     }
/// }
/// ```
pub trait Record: Any {
    /// Runtime identity of this record type
    fn type_key() -> TypeKey
    where
        Self: Sized,
    {
        TypeKey::of::<Self>()
    }

    /// The comparable properties of this type, in declaration order
    fn properties() -> Vec<PropertySpec>
    where
        Self: Sized;

    /// Mapping directives declared on this type against other record types
    ///
    /// Honoured during scanning only when the caller requests declared
    /// mappings to be included.
    fn declared_mappings() -> Vec<DeclaredMapping>
    where
        Self: Sized,
    {
        Vec::new()
    }
}
