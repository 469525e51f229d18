//! Concurrency scenarios — one shared session serving parallel callers, and
//! parallel session construction over one cache.

mod common;

use std::sync::Arc;
use std::thread;

use common::Person;
use fieldwise_core::cache::DescriptorCache;
use fieldwise_core::registry::ComparerRegistry;
use fieldwise_engine::CompareSession;

// A built session is immutable; concurrent compare calls are safe
#[test]
fn test_shared_session_across_threads() {
    let cache = DescriptorCache::new();
    let globals = Arc::new(ComparerRegistry::with_defaults());
    let session = Arc::new(CompareSession::create::<Person, Person>(&cache, &globals));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let a = Person::new("Ann", 30);
                let b = Person::new("Ann", 30 + (i % 2));
                let results = session.compare(&a, &b).unwrap();
                (i % 2 == 1, results.is_different())
            })
        })
        .collect();

    for handle in handles {
        let (expected_different, actual_different) = handle.join().unwrap();
        assert_eq!(expected_different, actual_different);
    }
}

// Racing session construction shares one cache entry per type
#[test]
fn test_parallel_session_construction() {
    let cache = Arc::new(DescriptorCache::new());
    let globals = Arc::new(ComparerRegistry::with_defaults());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let globals = Arc::clone(&globals);
            thread::spawn(move || {
                let session = CompareSession::create::<Person, Person>(&cache, &globals);
                session
                    .compare(&Person::new("Ann", 30), &Person::new("Bob", 30))
                    .unwrap()
                    .is_different()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
