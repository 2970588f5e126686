//! Structured logging for textlens.
//!
//! Handles credential redaction, console and NDJSON output, and scan
//! lifecycle events.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{EventLogEntry, EventLogger, ScanEvent};
pub use logger::init_logger;
pub use redact::redact_sensitive_data;
