//! Rendering concerns: record formatters for text sinks and the positional
//! message-template engine behind the `*_format` logging calls.

mod formatter;
mod json;
mod template;

pub use formatter::{DelegateFormatter, LogItemFormatter, SimpleFormatter, SingleLineFormatter};
pub use json::JsonFormatter;
pub use template::{MAX_ALIGNMENT, format_message};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Formatters selectable by name from backend init data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterKind {
    #[default]
    Simple,
    SingleLine,
    Json,
}

impl FormatterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::SingleLine => "single-line",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn build(self) -> Arc<dyn LogItemFormatter> {
        match self {
            Self::Simple => Arc::new(SimpleFormatter),
            Self::SingleLine => Arc::new(SingleLineFormatter),
            Self::Json => Arc::new(JsonFormatter),
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatterKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "single-line" | "single_line" | "singleline" => Ok(Self::SingleLine),
            "json" => Ok(Self::Json),
            _ => Err(crate::Error::Init(format!("unknown formatter: {s}"))),
        }
    }
}
