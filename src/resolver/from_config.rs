//! Builds a [`NamedFactoryResolver`] from parsed configuration.
//!
//! Nothing here fails: every problem is reported to the diagnostic logger and
//! replaced with the null factory, so a broken configuration means silence,
//! not a crashed host.

use super::NamedFactoryResolver;
use crate::backend::BackendRegistry;
use crate::config::Config;
use crate::factory::{LoggerFactory, NullLoggerFactory};
use crate::logger::{DEFAULT_LOGGER_NAME, Logger};
use std::collections::HashMap;
use std::sync::Arc;

impl NamedFactoryResolver {
    /// Declared factories are built through `registry`; each logger declaration
    /// is registered against the factory it names.
    ///
    /// Without a `""` factory the default factory is the null one; without a
    /// `""` logger declaration the default name maps to the default factory.
    #[must_use]
    pub fn from_config(config: &Config, registry: &BackendRegistry, diagnostics: &dyn Logger) -> Self {
        let resolver = Self::with_strategy(config.matching());

        let mut factories: HashMap<String, Arc<dyn LoggerFactory>> = HashMap::new();
        for declaration in &config.factories {
            let key = declaration.name.to_lowercase();
            if factories.contains_key(&key) {
                report(
                    diagnostics.warn_format(
                        "There are duplicate factories with the name [{0}]",
                        &[&declaration.name],
                    ),
                );
                continue;
            }

            let factory = registry
                .create(&declaration.kind, declaration.data.as_deref())
                .unwrap_or_else(|e| {
                    report(diagnostics.error_format(
                        "Could not create factory '{0}' of type '{1}', using null factory: {2}",
                        &[&declaration.name, &declaration.kind, &e],
                    ));
                    NullLoggerFactory::shared()
                });
            factories.insert(key, factory);
        }

        let default_factory = factories
            .entry(DEFAULT_LOGGER_NAME.to_string())
            .or_insert_with(NullLoggerFactory::shared)
            .clone();

        let mut has_default_logger = false;
        for declaration in &config.loggers {
            has_default_logger |= declaration.name == DEFAULT_LOGGER_NAME;

            let factory = factories
                .get(&declaration.factory.to_lowercase())
                .cloned()
                .unwrap_or_else(|| {
                    report(diagnostics.error_format(
                        "Declared logger configuration '{0}' refers to undeclared logger factory '{1}'",
                        &[&declaration.name, &declaration.factory],
                    ));
                    NullLoggerFactory::shared()
                });

            if let Err(e) = resolver.register_factory(&declaration.name, factory) {
                report(diagnostics.error_format(
                    "Ignoring logger configuration '{0}': {1}",
                    &[&declaration.name, &e],
                ));
            }
        }

        if !has_default_logger
            && let Err(e) = resolver.register_factory(DEFAULT_LOGGER_NAME, default_factory)
        {
            report(diagnostics.error_format("Could not register default logger: {0}", &[&e]));
        }

        resolver
    }
}

// A diagnostics sink that itself fails has no one left to tell.
fn report(result: Result<(), crate::Error>) {
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::logger::{NullLogger, TestLogger, downcast_ref};
    use crate::resolver::FactoryResolver;

    fn load(text: &str) -> (NamedFactoryResolver, TestLogger) {
        let diagnostics = TestLogger::named("CONFIG");
        let config = Config::parse(text).unwrap();
        let resolver =
            NamedFactoryResolver::from_config(&config, &BackendRegistry::with_builtins(), &diagnostics);
        (resolver, diagnostics)
    }

    fn is_null(resolver: &NamedFactoryResolver, name: &str) -> bool {
        let logger = resolver.get_factory(name).unwrap().get_logger(name);
        downcast_ref::<NullLogger>(logger.as_ref()).is_some()
    }

    #[test]
    fn empty_config_registers_null_default() {
        let (resolver, diagnostics) = load("");
        assert_eq!(resolver.names(), vec![""]);
        assert!(is_null(&resolver, "Anything"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn loggers_map_to_declared_factories() {
        let (resolver, diagnostics) = load(
            r#"
[[factories]]
name = "F1"
type = "test"

[[factories]]
name = ""
type = "single"
data = 'logger = "test"'

[[loggers]]
name = "Billing"
factory = "F1"
"#,
        );
        assert!(diagnostics.is_empty());
        assert_eq!(resolver.names(), vec!["Billing", ""]);

        let billing = resolver.get_factory("Billing.Invoice").unwrap();
        let invoice = billing.get_logger("Billing.Invoice");
        assert_eq!(invoice.name(), "Billing.Invoice");
        assert!(downcast_ref::<TestLogger>(invoice.as_ref()).is_some());

        let other = resolver.get_factory("Shipping").unwrap().get_logger("Shipping");
        assert!(downcast_ref::<TestLogger>(other.as_ref()).is_some());
        assert_eq!(other.name(), "");
    }

    #[test]
    fn undeclared_factory_is_reported_and_nulled() {
        let (resolver, diagnostics) = load(
            r#"
[[loggers]]
name = "Billing"
factory = "Missing"
"#,
        );
        assert!(resolver.contains_factory("billing"));
        assert!(is_null(&resolver, "Billing"));

        let items = diagnostics.logged_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].level, Level::Error);
        assert!(items[0].message.contains("'Missing'"));
    }

    #[test]
    fn duplicate_factory_warns_and_keeps_first() {
        let (resolver, diagnostics) = load(
            r#"
[[factories]]
name = "F1"
type = "test"

[[factories]]
name = "F1"
type = "null"

[[loggers]]
name = "Billing"
factory = "F1"
"#,
        );
        assert!(!is_null(&resolver, "Billing"));
        let items = diagnostics.logged_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].level, Level::Warn);
        assert!(items[0].message.contains("[F1]"));
    }

    #[test]
    fn unknown_type_and_bad_data_fall_back_to_null() {
        let (resolver, diagnostics) = load(
            r#"
[[factories]]
name = "Files"
type = "rolling-file"

[[factories]]
name = "Broken"
type = "single"
data = "logger = "

[[loggers]]
name = "A"
factory = "Files"

[[loggers]]
name = "B"
factory = "Broken"
"#,
        );
        assert!(is_null(&resolver, "A"));
        assert!(is_null(&resolver, "B"));
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn duplicate_logger_keeps_first() {
        let (resolver, diagnostics) = load(
            r#"
[[factories]]
name = "T"
type = "test"

[[loggers]]
name = "Billing"
factory = "T"

[[loggers]]
name = "BILLING"
factory = "Missing"
"#,
        );
        assert_eq!(resolver.len(), 2);
        assert!(!is_null(&resolver, "Billing"));
        // One for the undeclared factory, one for the duplicate.
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn explicit_default_logger_is_respected() {
        let (resolver, _) = load(
            r#"
[[factories]]
name = "T"
type = "test"

[[loggers]]
name = ""
factory = "T"
"#,
        );
        assert_eq!(resolver.names(), vec![""]);
        assert!(!is_null(&resolver, "Anything"));
    }

    #[test]
    fn matching_strategy_is_applied() {
        let (resolver, _) = load("[resolver]\nmatching = \"segment\"");
        assert_eq!(resolver.strategy(), crate::resolver::MatchStrategy::Segment);
    }
}
