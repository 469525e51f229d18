//! Mapping directives attached to source properties.

use serde::{Deserialize, Serialize};

use crate::record::TypeKey;

/// A mapping directive for one source property against one destination type
///
/// At most one directive is active per `(property, destination type)` pair;
/// installing a new one replaces the previous one (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyMap {
    /// Compare this property against a named destination property
    ToProperty {
        /// Name of the destination property to compare against
        target: String,
        /// Force string coercion even when both value types agree
        force_string: bool,
        /// `{}`-placeholder format applied to the source value when coercing
        source_format: Option<String>,
        /// `{}`-placeholder format applied to the target value when coercing
        target_format: Option<String>,
    },
    /// Skip this property entirely when comparing against the destination
    /// type (no result is emitted for it)
    Ignore,
}

impl PropertyMap {
    /// Plain rename directive with no coercion or formats
    pub fn to_property(target: impl Into<String>) -> Self {
        PropertyMap::ToProperty {
            target: target.into(),
            force_string: false,
            source_format: None,
            target_format: None,
        }
    }

    /// Check whether this directive masks the property
    pub fn is_ignore(&self) -> bool {
        matches!(self, PropertyMap::Ignore)
    }
}

/// A mapping directive declared on a record type itself
///
/// The declarative counterpart of configuration-time overrides: one entry of
/// the side-table returned by `Record::declared_mappings()`, consumed at scan
/// time when declared mappings are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredMapping {
    /// Name of the source property the directive applies to
    pub property: String,
    /// The destination type the directive targets
    pub destination: TypeKey,
    /// The directive itself
    pub map: PropertyMap,
}

impl DeclaredMapping {
    /// Declare that `property` maps onto `target` when compared against `D`
    pub fn to_property<D: 'static>(property: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            destination: TypeKey::of::<D>(),
            map: PropertyMap::to_property(target),
        }
    }

    /// Declare that `property` is skipped when compared against `D`
    pub fn ignore<D: 'static>(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            destination: TypeKey::of::<D>(),
            map: PropertyMap::Ignore,
        }
    }
}
