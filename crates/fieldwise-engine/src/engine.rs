//! The property-walk comparison engine.
//!
//! Walks every property of the session's source descriptor in declaration
//! order and produces one result per property that is not masked by an
//! ignore directive. Per-property comparer failures are captured on the
//! result and never abort the walk; all fatal preconditions are checked by
//! the session before this module runs.

use std::any::TypeId;
use std::cmp::Ordering;

use fieldwise_core::errors::CompareFailure;
use fieldwise_core::model::{PropertyDescriptor, PropertyMap};
use fieldwise_core::record::TypeKey;

use crate::results::{ComparisonResults, PropertyComparisonResult, Verdict};
use crate::session::CompareSession;

/// Coercion decision for one property, derived from its mapping and the two
/// declared value types
struct CoercionPlan<'a> {
    coerce: bool,
    source_format: Option<&'a str>,
    target_format: Option<&'a str>,
}

fn plan_coercion<'a>(
    mapping: Option<&'a PropertyMap>,
    source: &PropertyDescriptor,
    target: &PropertyDescriptor,
) -> CoercionPlan<'a> {
    let (force_string, source_format, target_format) = match mapping {
        Some(PropertyMap::ToProperty {
            force_string,
            source_format,
            target_format,
            ..
        }) => (
            *force_string,
            source_format.as_deref(),
            target_format.as_deref(),
        ),
        _ => (false, None, None),
    };

    CoercionPlan {
        coerce: force_string || source.value_type() != target.value_type(),
        source_format,
        target_format,
    }
}

/// Map a comparer's ordering onto the primary verdict
fn verdict_for(ordering: Ordering) -> Verdict {
    match ordering {
        Ordering::Less => Verdict::LessThan,
        Ordering::Equal => Verdict::Equal,
        Ordering::Greater => Verdict::GreaterThan,
    }
}

/// Walk the source descriptor against the destination descriptor
pub(crate) fn walk(
    session: &CompareSession,
    a: &dyn std::any::Any,
    b: &dyn std::any::Any,
) -> ComparisonResults {
    let destination = session.destination();
    let destination_id = destination.key().id();
    let mut results = ComparisonResults::new();

    for property in session.source().properties() {
        let mapping = property.mapping_for(destination_id);

        // 1. An ignore directive masks the property entirely: no result.
        if mapping.is_some_and(|m| m.is_ignore()) {
            tracing::trace!(property = property.name(), "property ignored by mapping");
            continue;
        }

        // 2. Resolve the target name: override, else same-name fallback.
        let target_name = match mapping {
            Some(PropertyMap::ToProperty { target, .. }) => target.as_str(),
            _ => property.name(),
        };

        // 3. Read the source value.
        let source_value = property.read(a);

        // 4. No destination property under the resolved name: non-fatal.
        let Some(target_property) = destination.property(target_name) else {
            tracing::trace!(
                property = property.name(),
                target = target_name,
                "destination property not found"
            );
            results.push(PropertyComparisonResult::new(
                property.clone(),
                source_value,
                None,
                None,
                mapping.cloned(),
                Some(Verdict::NotFound),
                false,
                None,
            ));
            continue;
        };

        // 5. Read the target value.
        let target_value = target_property.read(b);

        // 6–7. Decide coercion and the comparer key.
        let plan = plan_coercion(mapping, property, target_property);
        let (value_a, value_b, comparer_key) = if plan.coerce {
            (
                source_value.coerce_to_string(plan.source_format),
                target_value.coerce_to_string(plan.target_format),
                TypeId::of::<String>(),
            )
        } else {
            (
                source_value.clone(),
                target_value.clone(),
                property.value_type().id(),
            )
        };

        // 8. Resolve and invoke, capturing failure on the result.
        let (verdict, failure) = match session.resolve_comparer(comparer_key) {
            Some(comparer) => match comparer.compare(&value_a, &value_b) {
                Ok(ordering) => (Some(verdict_for(ordering)), None),
                Err(failure) => (None, Some(failure)),
            },
            None => {
                let value_type = if plan.coerce {
                    TypeKey::of::<String>()
                } else {
                    property.value_type()
                };
                (
                    None,
                    Some(CompareFailure::new(format!(
                        "no comparer registered for value type {}",
                        value_type
                    ))),
                )
            }
        };

        // 9. Record the outcome. The coerced values are the compared ones.
        let (source_value, target_value) = if plan.coerce {
            (value_a, value_b)
        } else {
            (source_value, target_value)
        };
        results.push(PropertyComparisonResult::new(
            property.clone(),
            source_value,
            Some(target_property.clone()),
            Some(target_value),
            mapping.cloned(),
            verdict,
            plan.coerce,
            failure,
        ));
    }

    tracing::debug!(
        source = session.source().key().name(),
        destination = destination.key().name(),
        results = results.len(),
        different = results.is_different(),
        "comparison complete"
    );

    results
}
