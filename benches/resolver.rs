use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lognest::{
    FactoryResolver, LoggerFactory, LoggerService, MatchStrategy, NamedFactoryResolver,
    NamedLoggerFactory, NullLoggerFactory,
};
use std::hint::black_box;
use std::sync::Arc;

fn populated(strategy: MatchStrategy, entries: usize) -> NamedFactoryResolver {
    let resolver = NamedFactoryResolver::with_strategy(strategy);
    resolver
        .register_factory("", NullLoggerFactory::shared())
        .unwrap_or_default();
    for i in 0..entries {
        let name = format!("Service{}.Module{}", i % 10, i);
        let factory: Arc<dyn LoggerFactory> = Arc::new(NamedLoggerFactory::test());
        resolver.register_factory(&name, factory).unwrap_or_default();
    }
    resolver
}

fn bench_get_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("NamedFactoryResolver::get_factory");

    for entries in [10, 100, 1000] {
        let resolver = populated(MatchStrategy::Prefix, entries);
        group.bench_with_input(BenchmarkId::new("prefix_hit", entries), &resolver, |b, r| {
            b.iter(|| r.get_factory(black_box("Service3.Module3.Detail")));
        });
        group.bench_with_input(BenchmarkId::new("fallback", entries), &resolver, |b, r| {
            b.iter(|| r.get_factory(black_box("Unrelated.Name")));
        });

        let segmented = populated(MatchStrategy::Segment, entries);
        group.bench_with_input(BenchmarkId::new("segment_hit", entries), &segmented, |b, r| {
            b.iter(|| r.get_factory(black_box("Service3.Module3.Detail")));
        });
    }

    group.finish();
}

fn bench_service_get_logger(c: &mut Criterion) {
    let resolver = Arc::new(populated(MatchStrategy::Prefix, 100));
    let service = LoggerService::with_resolver(resolver);

    c.bench_function("LoggerService::get_logger (cached)", |b| {
        b.iter(|| service.get_logger(black_box("Service3.Module3")));
    });
}

criterion_group!(benches, bench_get_factory, bench_service_get_logger);
criterion_main!(benches);
