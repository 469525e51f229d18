//! Per-property comparison results and the ordered result collection.

use std::collections::HashMap;

use fieldwise_core::errors::CompareFailure;
use fieldwise_core::model::{PropertyDescriptor, PropertyMap, Value};
use serde::{Deserialize, Serialize};

/// Primary outcome of one property's comparison
///
/// At most one verdict is set per result; it is absent only when a failure
/// fired before an ordering could be produced. Note that `NotFound` (and a
/// failed property) marks the property as incomparable, not as different:
/// neither contributes to the overall difference flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The source value orders before the target value
    LessThan,
    /// The two values order equal
    Equal,
    /// The source value orders after the target value
    GreaterThan,
    /// The destination type has no property under the resolved name
    NotFound,
}

/// Immutable record of one property's comparison outcome
///
/// Created once per compared property per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct PropertyComparisonResult {
    source_property: PropertyDescriptor,
    source_value: Value,
    target_property: Option<PropertyDescriptor>,
    target_value: Option<Value>,
    mapping: Option<PropertyMap>,
    verdict: Option<Verdict>,
    coerced: bool,
    failure: Option<CompareFailure>,
}

impl PropertyComparisonResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        source_property: PropertyDescriptor,
        source_value: Value,
        target_property: Option<PropertyDescriptor>,
        target_value: Option<Value>,
        mapping: Option<PropertyMap>,
        verdict: Option<Verdict>,
        coerced: bool,
        failure: Option<CompareFailure>,
    ) -> Self {
        Self {
            source_property,
            source_value,
            target_property,
            target_value,
            mapping,
            verdict,
            coerced,
            failure,
        }
    }

    /// The source property this result describes
    pub fn source_property(&self) -> &PropertyDescriptor {
        &self.source_property
    }

    /// The value read from the source object
    pub fn source_value(&self) -> &Value {
        &self.source_value
    }

    /// The matched destination property, if the resolved name existed
    pub fn target_property(&self) -> Option<&PropertyDescriptor> {
        self.target_property.as_ref()
    }

    /// The value read from the destination object, if a property matched
    pub fn target_value(&self) -> Option<&Value> {
        self.target_value.as_ref()
    }

    /// The mapping override that was in effect, if any
    pub fn mapping(&self) -> Option<&PropertyMap> {
        self.mapping.as_ref()
    }

    /// The primary verdict; absent when a failure fired first
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Whether both values were coerced to strings before comparing
    pub fn coerced(&self) -> bool {
        self.coerced
    }

    /// The captured per-property failure, if the comparer failed
    pub fn failure(&self) -> Option<&CompareFailure> {
        self.failure.as_ref()
    }

    /// The name this result is keyed under
    ///
    /// The target property's name when one matched, else the source name.
    pub fn key(&self) -> &str {
        self.target_property
            .as_ref()
            .map(|p| p.name())
            .unwrap_or_else(|| self.source_property.name())
    }

    /// Whether this result marks the two objects as different
    ///
    /// True only for ordering verdicts; `NotFound` and failed properties are
    /// incomparable, not different.
    pub fn is_difference(&self) -> bool {
        matches!(self.verdict, Some(Verdict::LessThan) | Some(Verdict::GreaterThan))
    }
}

/// Ordered collection of per-property results with name-keyed lookup
///
/// Entries keep the source descriptor's property order; `get` resolves by
/// each entry's [`key`](PropertyComparisonResult::key).
#[derive(Debug, Clone, Default)]
pub struct ComparisonResults {
    entries: Vec<PropertyComparisonResult>,
    index: HashMap<String, usize>,
    different: bool,
}

impl ComparisonResults {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, result: PropertyComparisonResult) {
        self.different |= result.is_difference();
        self.index.insert(result.key().to_string(), self.entries.len());
        self.entries.push(result);
    }

    /// Whether any property compared as less-than or greater-than
    pub fn is_different(&self) -> bool {
        self.different
    }

    /// Look up a result by its key name
    pub fn get(&self, name: &str) -> Option<&PropertyComparisonResult> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Iterate results in source property order
    pub fn iter(&self) -> impl Iterator<Item = &PropertyComparisonResult> {
        self.entries.iter()
    }

    /// Number of emitted results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no results were emitted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComparisonResults {
    type Item = &'a PropertyComparisonResult;
    type IntoIter = std::slice::Iter<'a, PropertyComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
