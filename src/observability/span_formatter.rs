//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one self-contained OTLP/JSON document
//! (`resourceSpans` → `scopeSpans` → `spans`), so the trace file can be fed
//! line by line to any OTLP-aware viewer.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, SystemTime};

/// Encodes span batches for a fixed resource and instrumentation scope.
pub struct OtlpEncoder {
    resource_attributes: Vec<JsonValue>,
    scope: &'static str,
}

impl OtlpEncoder {
    pub fn new(resource: &Resource, scope: &'static str) -> Self {
        Self {
            resource_attributes: resource
                .iter()
                .map(|(key, value)| json!({ "key": key.as_str(), "value": any_value(value) }))
                .collect(),
            scope,
        }
    }

    pub fn encode_batch(&self, batch: &[SpanData]) -> JsonValue {
        json!({
            "resourceSpans": [{
                "resource": { "attributes": self.resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
                }]
            }]
        })
    }
}

fn encode_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = status(&span.status);
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
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

fn encode_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| json!({ "key": kv.key.as_str(), "value": any_value(&kv.value) }))
        .collect()
}

/// OTLP `AnyValue`. 64-bit integers are strings per the OTLP JSON mapping.
fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch clamps to 0.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

const fn kind(kind: &SpanKind) -> u8 {
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

impl std::fmt::Debug for OtlpEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpEncoder").field("scope", &self.scope).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Menuboard")]);
        let doc = OtlpEncoder::new(&resource, "menuboard").encode_batch(&[]);

        let resource_spans = &doc["resourceSpans"][0];
        let attrs = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|attr| attr["key"] == "service.name"
            && attr["value"]["stringValue"] == "Menuboard"));
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "menuboard");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
    }

    #[test]
    fn timestamps_are_nanoseconds() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(time), "1500000000");
        assert_eq!(unix_nanos(SystemTime::UNIX_EPOCH), "0");
    }

    #[test]
    fn error_status_keeps_description() {
        let (code, message) = status(&Status::error("decode failed"));
        assert_eq!(code, 2);
        assert_eq!(message, "decode failed");
    }
}
