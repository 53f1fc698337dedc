//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one `resourceSpans` document:
//!
//! ```json
//! {
//!   "resourceSpans": [{
//!     "resource": { "attributes": [{"key": "service.name", "value": {"stringValue": "album-search"}}] },
//!     "scopeSpans": [{ "scope": {"name": "album-search"}, "spans": [...] }]
//!   }]
//! }
//! ```

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches under a fixed resource and scope.
pub struct SpanFormatter {
    resource: Resource,
    scope: String,
}

impl SpanFormatter {
    #[must_use]
    pub fn new(resource: Resource, scope: impl Into<String>) -> Self {
        Self {
            resource,
            scope: scope.into(),
        }
    }

    #[must_use]
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| json!({ "key": key.as_str(), "value": attribute_value(value) }))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(format_span).collect::<Vec<_>>(),
                }]
            }]
        })
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let (code, message) = status(&span.status);
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": span_kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(kvs: &[KeyValue]) -> Vec<JsonValue> {
    kvs.iter()
        .map(|kv| json!({ "key": kv.key.as_str(), "value": attribute_value(&kv.value) }))
        .collect()
}

/// OTLP encodes 64-bit integers as strings. Arrays fall back to their display form.
fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

const fn span_kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
