//! Structured logging and ndjson report lines.

mod format;

pub use format::{AnomalyLogEvent, StructuredLogger};
