//! Tagged-record trace encoding
//!
//! | Trace | JSON |
//! |-------|------|
//! | `Empty` | `null` |
//! | `Cons` | `{"cons": "Cons", "num": "13", "trace": <rest>}` |
//! | `Union` | `{"cons": "Union", "trace1": <left>, "trace2": <right>}` |
//!
//! `{"cons": "Empty"}` is also accepted on decode. Step labels may arrive as
//! strings or numbers; they are always encoded as strings.
//!
//! Cons chains are walked iteratively in both directions, so long linear
//! traces do not deepen the call stack.

use serde_json::{json, Map, Number, Value};
use tracemark_core::{Side, StepLabel, TraceError, TraceKind, TraceTree};
use tracing::debug;

use super::error::DecodeError;

/// Key holding the variant tag
pub const TAG_KEY: &str = "cons";
/// Key holding a `Cons` step label
pub const LABEL_KEY: &str = "num";
/// Key holding a `Cons` remainder
pub const REST_KEY: &str = "trace";
/// Key holding a `Union`'s first branch
pub const LEFT_KEY: &str = "trace1";
/// Key holding a `Union`'s second branch
pub const RIGHT_KEY: &str = "trace2";

/// Decode a tagged trace
///
/// `side` is reported in [`TraceError::InvalidVariant`] when the value is one
/// side of a two-sided operation.
pub fn decode_trace(value: &Value, side: Option<Side>) -> Result<TraceTree, DecodeError> {
    let mut labels = Vec::new();
    let mut current = value;

    let base = loop {
        let Some(record) = as_record(current)? else {
            break TraceTree::Empty;
        };
        match kind_of(record, side)? {
            TraceKind::Empty => break TraceTree::Empty,
            TraceKind::Cons => {
                labels.push(decode_label(field(record, LABEL_KEY)?)?);
                current = field(record, REST_KEY)?;
            }
            TraceKind::Union => {
                let left = decode_trace(field(record, LEFT_KEY)?, side)?;
                let right = decode_trace(field(record, RIGHT_KEY)?, side)?;
                break TraceTree::fork(left, right);
            }
        }
    };

    // Labels were collected newest first; rebuild from the oldest outward.
    Ok(labels
        .into_iter()
        .rev()
        .fold(base, |rest, label| TraceTree::cons(label, rest)))
}

/// Encode a trace in tagged form
pub fn encode_trace(trace: &TraceTree) -> Value {
    let mut labels = Vec::new();
    let mut current = trace;
    while let TraceTree::Cons { label, rest } = current {
        labels.push(label);
        current = rest.as_ref();
    }

    let base = match current {
        TraceTree::Union { left, right } => json!({
            TAG_KEY: TraceKind::Union.as_str(),
            LEFT_KEY: encode_trace(left),
            RIGHT_KEY: encode_trace(right),
        }),
        _ => Value::Null,
    };

    labels.into_iter().rev().fold(base, |rest, label| {
        json!({
            TAG_KEY: TraceKind::Cons.as_str(),
            LABEL_KEY: label.as_str(),
            REST_KEY: rest,
        })
    })
}

/// Compare two raw tagged traces
///
/// Missing sides are reported first, the first side before the second. The
/// first side is then decoded in full before the second, so an unrecognized
/// tag on either side is an error even if the other side is `Empty`.
pub fn equals_tagged(first: Option<&Value>, second: Option<&Value>) -> Result<bool, DecodeError> {
    let first = first.ok_or_else(|| TraceError::undefined(Some(Side::First)))?;
    let second = second.ok_or_else(|| TraceError::undefined(Some(Side::Second)))?;

    let first = decode_trace(first, Some(Side::First))?;
    let second = decode_trace(second, Some(Side::Second))?;
    Ok(first == second)
}

fn as_record(value: &Value) -> Result<Option<&Map<String, Value>>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(record) => Ok(Some(record)),
        other => Err(DecodeError::MalformedTrace(format!(
            "expected a tagged record or null, found {}",
            json_type(other)
        ))),
    }
}

fn kind_of(record: &Map<String, Value>, side: Option<Side>) -> Result<TraceKind, DecodeError> {
    let tag = match record.get(TAG_KEY) {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => other.to_string(),
        None => {
            return Err(DecodeError::MalformedTrace(format!("missing '{}'", TAG_KEY)));
        }
    };
    match TraceKind::from_tag(&tag) {
        Some(kind) => Ok(kind),
        None => {
            debug!(tag = %tag, side = ?side, "unrecognized trace variant");
            Err(TraceError::InvalidVariant { side, tag }.into())
        }
    }
}

fn field<'a>(record: &'a Map<String, Value>, key: &str) -> Result<&'a Value, DecodeError> {
    record
        .get(key)
        .ok_or_else(|| DecodeError::MalformedTrace(format!("missing '{}'", key)))
}

fn decode_label(value: &Value) -> Result<StepLabel, DecodeError> {
    match value {
        Value::String(s) => Ok(StepLabel::new(s.as_str())),
        Value::Number(n) => Ok(StepLabel::new(number_label(n))),
        other => Err(DecodeError::MalformedTrace(format!(
            "step label must be a string or number, found {}",
            json_type(other)
        ))),
    }
}

/// Decimal form of a numeric step identifier
///
/// Integral floats drop their fraction so `1.0` and `1` name the same step.
pub(crate) fn number_label(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // f64 Display prints integral values without a fraction; -0 is 0.
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
