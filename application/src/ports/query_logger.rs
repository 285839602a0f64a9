//! Port for structured query audit logging.
//!
//! Defines the [`QueryLogger`] trait for recording query run events
//! (start, missing documents, theme failures, completion) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! audit trail (JSONL).

use serde_json::Value;

/// A structured query event for logging.
pub struct QueryEvent {
    /// Event type identifier (e.g., "query_started", "themes_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl QueryEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging query events.
///
/// `log` is synchronous and infallible; an adapter that cannot write drops
/// the event.
pub trait QueryLogger: Send + Sync {
    fn log(&self, event: QueryEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoQueryLogger;

impl QueryLogger for NoQueryLogger {
    fn log(&self, _event: QueryEvent) {}
}
