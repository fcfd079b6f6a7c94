//! Console is the most common sink; immediate feedback on stdout without
//! configuring paths or services.

use super::{Formattable, FormatterSlot, Logger};
use crate::Error;
use crate::fmt::LogItemFormatter;
use crate::record::LogRecord;
use std::io::{self, Write};
use std::sync::Arc;

/// Writes formatted records to stdout, one `write` per record.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    name: String,
    formatter: FormatterSlot,
}

impl ConsoleLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formatter: FormatterSlot::default(),
        }
    }

    #[must_use]
    pub fn with_formatter(self, formatter: Arc<dyn LogItemFormatter>) -> Self {
        self.formatter.set(formatter);
        self
    }
}

impl Formattable for ConsoleLogger {
    fn formatter(&self) -> Arc<dyn LogItemFormatter> {
        self.formatter.get()
    }

    fn set_formatter(&self, formatter: Arc<dyn LogItemFormatter>) {
        self.formatter.set(formatter);
    }
}

impl Logger for ConsoleLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let line = self.format_item(record);
        // Lock once so concurrent records don't interleave mid-line.
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }
}
