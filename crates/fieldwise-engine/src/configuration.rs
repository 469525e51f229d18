//! The configuration builder for one (source, destination) type pair.
//!
//! Layers fluent overrides onto a private clone of the source descriptor and
//! accumulates session-scoped comparers, then freezes both into a
//! [`CompareSession`]. The builder exists only during configuration and is
//! consumed by `build`.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use fieldwise_core::cache::DescriptorCache;
use fieldwise_core::errors::{CompareError, Result};
use fieldwise_core::model::{PropertyMap, TypeDescriptor};
use fieldwise_core::record::{Record, TypeKey};
use fieldwise_core::registry::{Comparer, ComparerRegistry};

use crate::session::CompareSession;

/// Begin building overrides for comparing `S` against `D`
///
/// Scans both types through the cache on first use.
/// `include_declared_mappings` controls whether `S`'s declared mappings seed
/// the working descriptor; the convenience default is to exclude them.
pub fn configure<S: Record, D: Record>(
    cache: &DescriptorCache,
    globals: &Arc<ComparerRegistry>,
    include_declared_mappings: bool,
) -> ComparerConfiguration {
    ComparerConfiguration {
        source: cache.clone_for_configuration::<S>(include_declared_mappings),
        destination: cache.get_or_scan::<D>(false),
        destination_key: TypeKey::of::<D>(),
        comparers: HashMap::new(),
        globals: Arc::clone(globals),
    }
}

/// Builder scoped to one (source, destination) type pair
///
/// Owns a private clone of the source descriptor, so overrides installed
/// here never reach the shared cache entry. All mapping methods are
/// chainable and validate their property names eagerly.
pub struct ComparerConfiguration {
    source: TypeDescriptor,
    destination: Arc<TypeDescriptor>,
    destination_key: TypeKey,
    comparers: HashMap<TypeId, Arc<dyn Comparer>>,
    globals: Arc<ComparerRegistry>,
}

impl ComparerConfiguration {
    /// Map a source property onto a differently named destination property
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` for an empty name and `InvalidProperty` when
    /// either name does not resolve on its type.
    pub fn map_property(self, source: &str, target: &str) -> Result<Self> {
        self.map_property_with(source, target, false, None, None)
    }

    /// Map a source property with full coercion control
    ///
    /// `force_string` coerces both values to strings even when the value
    /// types agree; the formats are `{}`-placeholder patterns applied during
    /// coercion. Installing a second mapping for the same property replaces
    /// the first.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` for an empty name and `InvalidProperty` when
    /// either name does not resolve on its type.
    pub fn map_property_with(
        mut self,
        source: &str,
        target: &str,
        force_string: bool,
        source_format: Option<&str>,
        target_format: Option<&str>,
    ) -> Result<Self> {
        Self::require_name(source, "source property")?;
        Self::require_name(target, "target property")?;
        if self.destination.property(target).is_none() {
            return Err(CompareError::InvalidProperty {
                property: target.to_string(),
                type_name: self.destination.key().name().to_string(),
            });
        }

        let map = PropertyMap::ToProperty {
            target: target.to_string(),
            force_string,
            source_format: source_format.map(str::to_string),
            target_format: target_format.map(str::to_string),
        };
        self.install(source, map)?;
        Ok(self)
    }

    /// Skip a source property entirely against this destination type
    ///
    /// Masks any target name resolution for the property; no result is
    /// emitted for it.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` for an empty name and `InvalidProperty` when
    /// the name does not resolve on the source type.
    pub fn ignore_property(mut self, source: &str) -> Result<Self> {
        Self::require_name(source, "source property")?;
        self.install(source, PropertyMap::Ignore)?;
        Ok(self)
    }

    /// Register a session-scoped comparer for value type `T`
    ///
    /// Overrides the global default for `T` for the lifetime of the session
    /// to be built.
    pub fn with_comparer<T: 'static>(mut self, comparer: Arc<dyn Comparer>) -> Self {
        self.comparers.insert(TypeId::of::<T>(), comparer);
        self
    }

    /// Freeze the accumulated state into an immutable session
    pub fn build(self) -> CompareSession {
        CompareSession::new(
            Arc::new(self.source),
            self.destination,
            self.comparers,
            self.globals,
        )
    }

    fn require_name(name: &str, what: &str) -> Result<()> {
        if name.is_empty() {
            return Err(CompareError::NullArgument {
                name: what.to_string(),
            });
        }
        Ok(())
    }

    fn install(&mut self, source: &str, map: PropertyMap) -> Result<()> {
        let destination = self.destination_key.id();
        let source_type = self.source.key().name();
        let property =
            self.source
                .property_mut(source)
                .ok_or_else(|| CompareError::InvalidProperty {
                    property: source.to_string(),
                    type_name: source_type.to_string(),
                })?;
        property.set_mapping(destination, map);
        Ok(())
    }
}

impl std::fmt::Debug for ComparerConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparerConfiguration")
            .field("source", &self.source.key().name())
            .field("destination", &self.destination.key().name())
            .field("session_comparers", &self.comparers.len())
            .finish()
    }
}
