//! Property-based tests — repeated comparison of the same object states
//! yields structurally identical result sets.

mod common;

use std::sync::Arc;

use common::Person;
use fieldwise_core::cache::DescriptorCache;
use fieldwise_core::model::Value;
use fieldwise_core::registry::ComparerRegistry;
use fieldwise_engine::{CompareSession, ComparisonResults, Verdict};

/// Structural projection of a result set for equality assertions
fn shape(results: &ComparisonResults) -> Vec<(String, Option<Verdict>, bool, Value)> {
    results
        .iter()
        .map(|r| {
            (
                r.key().to_string(),
                r.verdict(),
                r.coerced(),
                r.source_value().clone(),
            )
        })
        .collect()
}

proptest::proptest! {
    #[test]
    fn prop_compare_is_idempotent(
        name_a in "[a-zA-Z]{0,12}",
        name_b in "[a-zA-Z]{0,12}",
        age_a in proptest::num::i32::ANY,
        age_b in proptest::num::i32::ANY,
    ) {
        let cache = DescriptorCache::new();
        let globals = Arc::new(ComparerRegistry::with_defaults());
        let session = CompareSession::create::<Person, Person>(&cache, &globals);

        let a = Person::new(&name_a, age_a);
        let b = Person::new(&name_b, age_b);

        let first = session.compare(&a, &b).unwrap();
        let second = session.compare(&a, &b).unwrap();

        proptest::prop_assert_eq!(shape(&first), shape(&second));
        proptest::prop_assert_eq!(first.is_different(), second.is_different());
    }

    #[test]
    fn prop_difference_tracks_orderings(
        age_a in proptest::num::i32::ANY,
        age_b in proptest::num::i32::ANY,
    ) {
        let cache = DescriptorCache::new();
        let globals = Arc::new(ComparerRegistry::with_defaults());
        let session = CompareSession::create::<Person, Person>(&cache, &globals);

        let a = Person::new("Ann", age_a);
        let b = Person::new("Ann", age_b);
        let results = session.compare(&a, &b).unwrap();

        proptest::prop_assert_eq!(results.is_different(), age_a != age_b);
    }
}
