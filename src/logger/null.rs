//! The inert fallback returned whenever nothing better can be resolved.

use super::Logger;
use crate::Error;
use crate::record::LogRecord;
use std::sync::{Arc, OnceLock};

/// Accepts everything, produces nothing; callers never need to null-check a logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// One stateless instance shared by the whole process.
    #[must_use]
    pub fn shared() -> Arc<dyn Logger> {
        static INSTANCE: OnceLock<Arc<NullLogger>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(Self)).clone()
    }
}

impl Logger for NullLogger {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_is_one_instance() {
        assert!(Arc::ptr_eq(&NullLogger::shared(), &NullLogger::shared()));
    }

    #[test]
    fn accepts_everything() {
        let logger = NullLogger::shared();
        assert_eq!(logger.name(), "");
        logger.info("ignored").unwrap();
        logger.fatal_format("{0}", &[&"ignored"]).unwrap();
    }
}
