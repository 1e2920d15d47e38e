//! OTLP JSON documents for exported spans.
//!
//! Each export batch becomes one [`TraceDocument`], serialized with `serde_json`
//! into the OTLP/JSON shape (`resourceSpans` → `scopeSpans` → `spans`), so the
//! trace file can be fed to any OTLP-aware viewer.

use std::time::{Duration, SystemTime};

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;

/// Instrumentation scope recorded in every document.
const SCOPE_NAME: &str = "flagdial";

/// One export batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDocument {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceAttributes,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct ResourceAttributes {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<OtlpSpan>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpSpan {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<OtlpEvent>,
    status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpEvent {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct OtlpStatus {
    code: u8,
    message: String,
}

#[derive(Debug, Serialize)]
struct Attribute {
    key: String,
    value: AnyValue,
}

/// OTLP attribute value; serializes as e.g. `{"stringValue": "GB"}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
enum AnyValue {
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            Value::Array(_) => Self::StringValue(value.to_string()),
        }
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<Attribute> {
    pairs
        .iter()
        .map(|kv| Attribute {
            key: kv.key.to_string(),
            value: AnyValue::from(&kv.value),
        })
        .collect()
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> OtlpStatus {
    let (code, message) = match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };
    OtlpStatus { code, message }
}

/// Builds [`TraceDocument`]s carrying a fixed resource.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    /// Creates a formatter stamping `resource` on every document.
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Converts one export batch.
    pub fn format_batch(&self, batch: &[SpanData]) -> TraceDocument {
        let resource = ResourceAttributes {
            attributes: self
                .resource
                .iter()
                .map(|(key, value)| Attribute {
                    key: key.to_string(),
                    value: AnyValue::from(value),
                })
                .collect(),
        };

        TraceDocument {
            resource_spans: vec![ResourceSpans {
                resource,
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(Self::format_span).collect(),
                }],
            }],
        }
    }

    fn format_span(span: &SpanData) -> OtlpSpan {
        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };

        OtlpSpan {
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            kind: kind_code(&span.span_kind),
            start_time_unix_nano: unix_nanos(span.start_time),
            end_time_unix_nano: unix_nanos(span.end_time),
            attributes: attributes(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| OtlpEvent {
                    time_unix_nano: unix_nanos(event.timestamp),
                    name: event.name.to_string(),
                    attributes: attributes(&event.attributes),
                })
                .collect(),
            status: status(&span.status),
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_resource_and_scope() {
        let formatter = SpanFormatter::new(Resource::new(vec![KeyValue::new("service.name", "flagdial")]));
        let json = serde_json::to_value(formatter.format_batch(&[])).unwrap();

        assert_eq!(
            json["resourceSpans"][0]["resource"]["attributes"][0]["value"]["stringValue"],
            "flagdial"
        );
        assert_eq!(json["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert!(json["resourceSpans"][0]["scopeSpans"][0]["spans"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn attribute_values_use_otlp_tags() {
        let json = serde_json::to_value(AnyValue::from(&Value::I64(42))).unwrap();
        assert_eq!(json, serde_json::json!({ "intValue": "42" }));

        let json = serde_json::to_value(AnyValue::from(&Value::Bool(true))).unwrap();
        assert_eq!(json, serde_json::json!({ "boolValue": true }));
    }

    #[test]
    fn status_codes() {
        assert_eq!(status(&Status::Unset).code, 0);
        assert_eq!(status(&Status::Ok).code, 1);
        assert_eq!(status(&Status::error("boom")).message, "boom");
    }
}
