//! Factory logic supplied inline as a closure.

use super::LoggerFactory;
use crate::logger::{Logger, NullLogger};
use std::sync::{Arc, PoisonError, RwLock};

type RequestHandler = dyn Fn(&str) -> Option<Arc<dyn Logger>> + Send + Sync;

/// Asks a closure for each logger. No handler, or a handler returning
/// `None`, yields the [`NullLogger`].
#[derive(Default)]
pub struct DelegateFactory {
    handler: RwLock<Option<Arc<RequestHandler>>>,
}

impl DelegateFactory {
    #[must_use]
    pub fn new(handler: impl Fn(&str) -> Option<Arc<dyn Logger>> + Send + Sync + 'static) -> Self {
        Self {
            handler: RwLock::new(Some(Arc::new(handler))),
        }
    }

    /// Replaces (or with `None`, removes) the handler.
    pub fn set_handler(
        &self,
        handler: Option<impl Fn(&str) -> Option<Arc<dyn Logger>> + Send + Sync + 'static>,
    ) {
        let handler = handler.map(|h| Arc::new(h) as Arc<RequestHandler>);
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = handler;
    }
}

impl std::fmt::Debug for DelegateFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let has_handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("DelegateFactory")
            .field("has_handler", &has_handler)
            .finish()
    }
}

impl LoggerFactory for DelegateFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        // Cloned out so the handler runs without holding the lock.
        let handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        handler
            .and_then(|handler| handler(name))
            .unwrap_or_else(NullLogger::shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{TestLogger, downcast_ref};

    #[test]
    fn handler_decides_per_name() {
        let billing: Arc<dyn Logger> = Arc::new(TestLogger::named("Billing"));
        let target = Arc::clone(&billing);
        let factory = DelegateFactory::new(move |name| {
            name.starts_with("Billing").then(|| Arc::clone(&target))
        });

        assert!(Arc::ptr_eq(&factory.get_logger("Billing.Invoice"), &billing));
        let other = factory.get_logger("Shipping");
        assert!(downcast_ref::<NullLogger>(other.as_ref()).is_some());
    }

    #[test]
    fn missing_handler_yields_null() {
        let factory = DelegateFactory::default();
        let logger = factory.get_logger("x");
        assert!(downcast_ref::<NullLogger>(logger.as_ref()).is_some());

        factory.set_handler(Some(|_: &str| Some(Arc::new(TestLogger::new()) as Arc<dyn Logger>)));
        let logger = factory.get_logger("x");
        assert!(downcast_ref::<TestLogger>(logger.as_ref()).is_some());
    }
}
