//! Tests for name resolution through the public API.

use lognest::factory::DelegateFactory;
use lognest::logger::downcast_ref;
use lognest::resolver::MatchStrategy;
use lognest::{
    Error, FactoryResolver, LoggerFactory, NamedFactoryResolver, NamedLoggerFactory, NullLogger,
    TestLogger,
};
use std::sync::Arc;
use std::thread;

fn test_factory() -> Arc<dyn LoggerFactory> {
    Arc::new(NamedLoggerFactory::test())
}

fn same(a: &Arc<dyn LoggerFactory>, b: &Arc<dyn LoggerFactory>) -> bool {
    Arc::ptr_eq(a, b)
}

#[test]
fn longest_prefix() {
    let resolver = NamedFactoryResolver::new();
    let a = test_factory();
    let ab = test_factory();
    resolver.register_factory("A", Arc::clone(&a)).unwrap();
    resolver.register_factory("A.B", Arc::clone(&ab)).unwrap();

    assert!(same(&resolver.get_factory("A.B.C").unwrap(), &ab));
    assert!(same(&resolver.get_factory("A.X").unwrap(), &a));
}

#[test]
fn default_fallback() {
    let resolver = NamedFactoryResolver::new();
    let default = test_factory();
    resolver.register_factory("", Arc::clone(&default)).unwrap();
    assert!(same(&resolver.get_factory("Unmatched").unwrap(), &default));

    assert!(resolver.deregister_factory(""));
    let logger = resolver.get_factory("Unmatched").unwrap().get_logger("Unmatched");
    assert!(downcast_ref::<NullLogger>(logger.as_ref()).is_some());
}

#[test]
fn duplicate_registration_keeps_first() {
    let resolver = NamedFactoryResolver::new();
    let first = test_factory();
    resolver.register_factory("Billing", Arc::clone(&first)).unwrap();

    let result = resolver.register_factory("billing", test_factory());
    assert!(matches!(result, Err(Error::DuplicateFactory(_))));
    assert_eq!(resolver.len(), 1);
    assert!(same(&resolver.get_factory("Billing").unwrap(), &first));
}

#[test]
fn deregistration_stops_resolving() {
    let resolver = NamedFactoryResolver::new();
    let billing = test_factory();
    resolver.register_factory("Billing", Arc::clone(&billing)).unwrap();

    assert!(resolver.deregister_factory("Billing"));
    assert!(!resolver.deregister_factory("Billing"));
    assert!(!same(&resolver.get_factory("Billing").unwrap(), &billing));
}

#[test]
fn string_prefix_quirk_is_kept_by_default() {
    let resolver = NamedFactoryResolver::new();
    resolver.register_factory("A", test_factory()).unwrap();
    resolver.register_factory("AB", test_factory()).unwrap();
    assert_eq!(resolver.resolve_name("ABC").as_deref(), Some("AB"));

    let segmented = NamedFactoryResolver::with_strategy(MatchStrategy::Segment);
    segmented.register_factory("A", test_factory()).unwrap();
    segmented.register_factory("AB", test_factory()).unwrap();
    assert_eq!(segmented.resolve_name("ABC"), None);
    assert_eq!(segmented.resolve_name("AB.C").as_deref(), Some("AB"));
}

#[test]
fn memoization_across_threads() {
    let resolver = Arc::new(NamedFactoryResolver::new());
    resolver.register_factory("", test_factory()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.get_factory("X").unwrap().get_logger("X"))
        })
        .collect();
    let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(loggers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert!(downcast_ref::<TestLogger>(loggers[0].as_ref()).is_some());
}

#[test]
fn concurrent_registration_and_lookup() {
    let resolver = Arc::new(NamedFactoryResolver::new());
    let writers: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                for j in 0..25 {
                    resolver
                        .register_factory(&format!("S{i}.M{j}"), test_factory())
                        .unwrap();
                    let _ = resolver.get_factory(&format!("S{i}.M{j}.Detail"));
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(resolver.len(), 100);
    let names = resolver.names();
    assert!(
        names
            .windows(2)
            .all(|w| w[0].chars().count() >= w[1].chars().count())
    );
}

#[test]
fn delegate_factory_behind_resolver() {
    let resolver = NamedFactoryResolver::new();
    let factory = DelegateFactory::new(|name| {
        (name == "Audit").then(|| Arc::new(TestLogger::named("Audit")) as Arc<dyn lognest::Logger>)
    });
    resolver.register_factory("Audit", Arc::new(factory)).unwrap();

    let logger = resolver.get_factory("Audit").unwrap().get_logger("Audit");
    assert!(downcast_ref::<TestLogger>(logger.as_ref()).is_some());
}
