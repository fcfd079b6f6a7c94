#![no_main]
use libfuzzer_sys::fuzz_target;
use lognest::{FactoryResolver, MatchStrategy, NamedFactoryResolver, NullLoggerFactory};

fuzz_target!(|data: &str| {
    // Registered names and requested names are arbitrary text
    for strategy in [MatchStrategy::Prefix, MatchStrategy::Segment] {
        let resolver = NamedFactoryResolver::with_strategy(strategy);
        for name in data.split('\n') {
            let _ = resolver.register_factory(name, NullLoggerFactory::shared());
        }
        for name in data.split(['\n', '.']) {
            let _ = resolver.get_factory(name);
            let _ = resolver.resolve_name(name);
        }
    }
});
