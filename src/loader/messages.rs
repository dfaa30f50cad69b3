//! Loader message types.
//!
//! This module defines the request and response protocol between the component
//! and the [`UserLoader`](crate::loader::UserLoader). Messages are serializable so
//! a host may run the loader elsewhere and ship responses back, and they carry the
//! caller's trace context so the load span joins the caller's trace.

use crate::domain::UserRecord;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-boundary span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when the load runs outside the caller's span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the case
    /// whenever no OpenTelemetry layer is installed.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Messages sent from the component to the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoaderMessage {
    /// Fetch all active users from the source.
    LoadUsers {
        /// Trace context for linking spans.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl LoaderMessage {
    /// Create a `LoadUsers` message with the current trace context.
    #[must_use]
    pub fn load_users() -> Self {
        Self::LoadUsers {
            trace_context: TraceContext::from_current(),
        }
    }
}

/// Responses sent from the loader back to the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoaderResponse {
    /// Users were fetched and normalized.
    UsersLoaded {
        /// Users in upstream order, with permission-set summaries computed.
        users: Vec<UserRecord>,
    },

    /// The fetch failed.
    LoadFailed {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_users_without_otel_has_no_trace_context() {
        assert_eq!(
            LoaderMessage::load_users(),
            LoaderMessage::LoadUsers { trace_context: None }
        );
    }

    #[test]
    fn messages_serialize_without_empty_trace_context() {
        let json = serde_json::to_string(&LoaderMessage::LoadUsers { trace_context: None }).unwrap();
        assert_eq!(json, r#"{"LoadUsers":{}}"#);
        let back: LoaderMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LoaderMessage::LoadUsers { trace_context: None });
    }
}
