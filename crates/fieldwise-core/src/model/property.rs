//! Property specifications and scanned property descriptors.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::mapping::PropertyMap;
use crate::model::value::{IntoValue, Value};
use crate::record::TypeKey;

/// Type-erased reader for one property of one record type
///
/// Wraps a closure that downcasts the instance back to its concrete type and
/// reads the field. The engine verifies the instance's `TypeId` before any
/// accessor runs; a failed downcast therefore reads as `Null` rather than
/// panicking.
#[derive(Clone)]
pub struct Accessor {
    read: Arc<dyn Fn(&dyn Any) -> Value + Send + Sync>,
}

impl Accessor {
    /// Wrap a typed field reader
    pub fn new<R, V, F>(read: F) -> Self
    where
        R: 'static,
        V: IntoValue,
        F: Fn(&R) -> V + Send + Sync + 'static,
    {
        Self {
            read: Arc::new(move |instance: &dyn Any| {
                instance
                    .downcast_ref::<R>()
                    .map(|r| read(r).into_value())
                    .unwrap_or(Value::Null)
            }),
        }
    }

    /// Read the property value off an instance
    pub fn read(&self, instance: &dyn Any) -> Value {
        (self.read)(instance)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor(..)")
    }
}

/// Declaration of one comparable property, as supplied by a `Record` impl
///
/// Raw input to the scanner; the scan turns each spec into a
/// [`PropertyDescriptor`] with an (initially empty or attribute-seeded)
/// mapping table.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    name: String,
    value_type: TypeKey,
    accessor: Accessor,
}

impl PropertySpec {
    /// Declare a property with its name and a field reader
    ///
    /// The declared value type is taken from the reader's return type, so
    /// `|p: &Person| p.age` declares an `i32` property.
    pub fn of<R, V, F>(name: impl Into<String>, read: F) -> Self
    where
        R: 'static,
        V: IntoValue + 'static,
        F: Fn(&R) -> V + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            value_type: TypeKey::of::<V>(),
            accessor: Accessor::new(read),
        }
    }

    /// The property's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property's declared value type
    pub fn value_type(&self) -> TypeKey {
        self.value_type
    }
}

/// One scanned property of a record type
///
/// Carries the property's identity, its value accessor, and the active
/// mapping directives keyed by destination type. Cloning deep-copies the
/// mapping table (the accessor is shared; it is immutable), so a
/// configuration-time clone can take private overrides without touching the
/// cached original.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    name: String,
    value_type: TypeKey,
    accessor: Accessor,
    mappings: HashMap<TypeId, PropertyMap>,
}

impl PropertyDescriptor {
    pub(crate) fn from_spec(spec: PropertySpec) -> Self {
        Self {
            name: spec.name,
            value_type: spec.value_type,
            accessor: spec.accessor,
            mappings: HashMap::new(),
        }
    }

    /// The property's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property's declared value type
    pub fn value_type(&self) -> TypeKey {
        self.value_type
    }

    /// Read this property's value off an instance
    pub fn read(&self, instance: &dyn Any) -> Value {
        self.accessor.read(instance)
    }

    /// The active mapping directive against the given destination type
    pub fn mapping_for(&self, destination: TypeId) -> Option<&PropertyMap> {
        self.mappings.get(&destination)
    }

    /// Install or replace the mapping directive for a destination type
    ///
    /// Last write wins: at most one directive is active per destination type.
    pub fn set_mapping(&mut self, destination: TypeId, map: PropertyMap) {
        self.mappings.insert(destination, map);
    }

    /// Number of destination types this property carries directives for
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }
}
