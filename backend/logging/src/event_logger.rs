//! Scan Event Logger
//!
//! Structured lifecycle events of a scan (selection, annotation, failure)
//! emitted through `tracing`, so they land in the NDJSON file when one is
//! configured.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanEvent {
    Selected {
        file: String,
        mode: String,
    },
    Annotated {
        file: String,
        pages: usize,
        blocks: usize,
        latency_ms: u64,
    },
    Failed {
        stage: String,
        error_msg: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: ScanEvent,
}

impl EventLogEntry {
    /// Builds an entry with error text scrubbed of credentials.
    pub fn new(mut event: ScanEvent) -> Self {
        if let ScanEvent::Failed { error_msg, .. } = &mut event {
            *error_msg = redact_sensitive_data(error_msg);
        }
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

pub struct EventLogger;

impl EventLogger {
    pub fn log_event(event: ScanEvent) {
        let entry = EventLogEntry::new(event);
        let json = serde_json::to_string(&entry).unwrap_or_default();
        info!(target: "scan_events", event = %json, "Scan event");
    }
}
