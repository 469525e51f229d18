//! Scanned type descriptors.

use std::collections::HashMap;

use crate::model::mapping::DeclaredMapping;
use crate::model::property::{PropertyDescriptor, PropertySpec};
use crate::record::TypeKey;

/// Scanned metadata for one record type
///
/// Built once per `(type, declared-mapping-inclusion)` pair by the descriptor
/// cache and shared immutably from then on. Properties keep their declaration
/// order; names are unique within a descriptor. Cloning deep-copies every
/// property's mapping table, which is what lets configuration builders layer
/// private overrides without polluting the shared cache entry.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    properties: Vec<PropertyDescriptor>,
    index: HashMap<String, usize>,
    includes_declared_mappings: bool,
}

impl TypeDescriptor {
    /// Build a descriptor from a type's property specs and declared mappings
    ///
    /// `declared` is applied only when `include_declared_mappings` is true;
    /// entries naming an unknown property are skipped. Duplicate property
    /// names keep the first spec.
    pub(crate) fn build(
        key: TypeKey,
        specs: Vec<PropertySpec>,
        declared: Vec<DeclaredMapping>,
        include_declared_mappings: bool,
    ) -> Self {
        let mut properties: Vec<PropertyDescriptor> = Vec::with_capacity(specs.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(specs.len());

        for spec in specs {
            if index.contains_key(spec.name()) {
                continue;
            }
            index.insert(spec.name().to_string(), properties.len());
            properties.push(PropertyDescriptor::from_spec(spec));
        }

        if include_declared_mappings {
            for mapping in declared {
                if let Some(&slot) = index.get(mapping.property.as_str()) {
                    properties[slot].set_mapping(mapping.destination.id(), mapping.map);
                }
            }
        }

        Self {
            key,
            properties,
            index,
            includes_declared_mappings: include_declared_mappings,
        }
    }

    /// The record type this descriptor describes
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Whether declared mappings were honoured during the scan
    pub fn includes_declared_mappings(&self) -> bool {
        self.includes_declared_mappings
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.index.get(name).map(|&slot| &self.properties[slot])
    }

    /// Mutable lookup, used by configuration builders on private clones
    pub fn property_mut(&mut self, name: &str) -> Option<&mut PropertyDescriptor> {
        let slot = *self.index.get(name)?;
        Some(&mut self.properties[slot])
    }

    /// The properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter()
    }

    /// Number of scanned properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check whether the type has no comparable properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
