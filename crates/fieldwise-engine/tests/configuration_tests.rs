//! Configuration builder scenarios — validation, override replacement,
//! declared mappings, and comparer resolution precedence.

mod common;

use std::cmp::Ordering;
use std::sync::Arc;

use common::{AgeDto, Measurement, Person, Reading, TaggedDest, TaggedSource, Temperature};
use fieldwise_core::cache::DescriptorCache;
use fieldwise_core::errors::{CompareError, CompareFailure};
use fieldwise_core::model::Value;
use fieldwise_core::registry::{Comparer, ComparerRegistry};
use fieldwise_engine::{configure, CompareSession, Verdict};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn setup() -> (DescriptorCache, Arc<ComparerRegistry>) {
    (DescriptorCache::new(), Arc::new(ComparerRegistry::with_defaults()))
}

/// Comparer that reports every pair with a fixed ordering
struct Fixed(Ordering);

impl Comparer for Fixed {
    fn compare(&self, _a: &Value, _b: &Value) -> Result<Ordering, CompareFailure> {
        Ok(self.0)
    }
}

/// Comparer that always fails
struct Failing;

impl Comparer for Failing {
    fn compare(&self, _a: &Value, _b: &Value) -> Result<Ordering, CompareFailure> {
        Err(CompareFailure::new("comparer exploded"))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_source_property_is_rejected() {
    let (cache, globals) = setup();
    let err = configure::<Person, Person>(&cache, &globals, false)
        .map_property("Height", "Age")
        .unwrap_err();

    assert_eq!(err.code(), "ERR_INVALID_PROPERTY");
    match err {
        CompareError::InvalidProperty { property, type_name } => {
            assert_eq!(property, "Height");
            assert!(type_name.contains("Person"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_target_property_is_rejected() {
    let (cache, globals) = setup();
    let err = configure::<Person, AgeDto>(&cache, &globals, false)
        .map_property("Age", "Height")
        .unwrap_err();

    assert_eq!(err.code(), "ERR_INVALID_PROPERTY");
    match err {
        CompareError::InvalidProperty { property, type_name } => {
            assert_eq!(property, "Height");
            assert!(type_name.contains("AgeDto"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_property_name_is_rejected() {
    let (cache, globals) = setup();
    let err = configure::<Person, Person>(&cache, &globals, false)
        .ignore_property("")
        .unwrap_err();
    assert_eq!(err.code(), "ERR_NULL_ARGUMENT");
}

#[test]
fn test_unknown_ignored_property_is_rejected() {
    let (cache, globals) = setup();
    let err = configure::<Person, Person>(&cache, &globals, false)
        .ignore_property("Height")
        .unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_PROPERTY");
}

// ---------------------------------------------------------------------------
// Override replacement
// ---------------------------------------------------------------------------

// The last directive installed for a property wins
#[test]
fn test_later_override_replaces_earlier() {
    let (cache, globals) = setup();
    let session = configure::<Person, AgeDto>(&cache, &globals, false)
        .map_property("Age", "YearsOld")
        .unwrap()
        .ignore_property("Age")
        .unwrap()
        .build();

    let results = session
        .compare(
            &Person::new("Ann", 30),
            &AgeDto {
                name: "Ann".to_string(),
                years_old: "31".to_string(),
            },
        )
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results.get("YearsOld").is_none());
}

// ---------------------------------------------------------------------------
// Declared mappings
// ---------------------------------------------------------------------------

// Declared mappings apply only when scanned in
#[test]
fn test_declared_mapping_honoured_when_included() {
    let (cache, globals) = setup();
    let session = configure::<TaggedSource, TaggedDest>(&cache, &globals, true).build();

    let results = session
        .compare(&TaggedSource { id: 7 }, &TaggedDest { ident: 7 })
        .unwrap();

    let id = results.get("Ident").unwrap();
    assert_eq!(id.verdict(), Some(Verdict::Equal));
    assert!(id.mapping().is_some());
}

#[test]
fn test_declared_mapping_skipped_when_excluded() {
    let (cache, globals) = setup();
    let session = configure::<TaggedSource, TaggedDest>(&cache, &globals, false).build();

    let results = session
        .compare(&TaggedSource { id: 7 }, &TaggedDest { ident: 7 })
        .unwrap();

    // Without the declared rename, "Id" falls back to its own name, which
    // the destination does not have.
    assert_eq!(results.get("Id").unwrap().verdict(), Some(Verdict::NotFound));
}

// ---------------------------------------------------------------------------
// Comparer resolution
// ---------------------------------------------------------------------------

// Session comparer > global comparer for the same value type
#[test]
fn test_session_comparer_shadows_global() {
    let (cache, globals) = setup();
    globals.register::<i32>(Arc::new(Fixed(Ordering::Equal)));

    let session = configure::<Person, Person>(&cache, &globals, false)
        .with_comparer::<i32>(Arc::new(Fixed(Ordering::Less)))
        .build();

    let results = session
        .compare(&Person::new("Ann", 30), &Person::new("Ann", 30))
        .unwrap();
    assert_eq!(results.get("Age").unwrap().verdict(), Some(Verdict::LessThan));
}

// A custom value type without any comparer yields a captured failure
#[test]
fn test_missing_comparer_is_captured_not_fatal() {
    let (cache, globals) = setup();
    let session = CompareSession::create::<Reading, Reading>(&cache, &globals);

    let results = session
        .compare(
            &Reading {
                celsius: Temperature(20.5),
            },
            &Reading {
                celsius: Temperature(21.0),
            },
        )
        .unwrap();

    let reading = results.get("Celsius").unwrap();
    assert_eq!(reading.verdict(), None);
    assert!(reading.failure().unwrap().message().contains("no comparer"));
    assert!(!results.is_different());
}

// Registering a session comparer for the custom type fixes the property
#[test]
fn test_session_comparer_for_custom_type() {
    let (cache, globals) = setup();
    let session = configure::<Reading, Reading>(&cache, &globals, false)
        .with_comparer::<Temperature>(Arc::new(Fixed(Ordering::Greater)))
        .build();

    let results = session
        .compare(
            &Reading {
                celsius: Temperature(21.0),
            },
            &Reading {
                celsius: Temperature(20.5),
            },
        )
        .unwrap();

    assert_eq!(
        results.get("Celsius").unwrap().verdict(),
        Some(Verdict::GreaterThan)
    );
    assert!(results.is_different());
}

// A comparer failure is attached to that property; the walk continues
#[test]
fn test_comparer_failure_does_not_abort_walk() {
    let (cache, globals) = setup();
    let session = configure::<Person, Person>(&cache, &globals, false)
        .with_comparer::<String>(Arc::new(Failing))
        .build();

    let results = session
        .compare(&Person::new("Ann", 30), &Person::new("Bob", 31))
        .unwrap();

    let name = results.get("Name").unwrap();
    assert_eq!(name.verdict(), None);
    assert_eq!(name.failure().unwrap().message(), "comparer exploded");

    // The walk continued past the failed property.
    assert_eq!(results.get("Age").unwrap().verdict(), Some(Verdict::LessThan));
    assert!(results.is_different());
}

// Incomparable floats (NaN) fail that property only
#[test]
fn test_nan_is_captured_as_failure() {
    let (cache, globals) = setup();
    let session = CompareSession::create::<Measurement, Measurement>(&cache, &globals);

    let results = session
        .compare(&Measurement { value: f64::NAN }, &Measurement { value: 1.0 })
        .unwrap();

    let value = results.get("Value").unwrap();
    assert_eq!(value.verdict(), None);
    assert!(value.failure().is_some());
    assert!(!results.is_different());
}
