//! Program-tree encoding
//!
//! | Node | JSON |
//! |------|------|
//! | `Leaf(Null)` | `null` |
//! | `Leaf(Bool)` | `true`/`false` |
//! | `Leaf(Int)`, `Leaf(UInt)` | integer number |
//! | `Leaf(Float)` | number; non-finite values become `null` |
//! | `Leaf(String)` | `"..."` |
//! | `Sequence` | `[...]` |
//! | `Sequence` with annotations | `{"$seq": [...], "<name>": ...}` |
//! | `Record` | `{...}`, origin under `"tra"` |
//!
//! A record without a `"tra"` key has no origin. `"tra": null` is an
//! `Empty` origin.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use tracemark_decorate::{Node, Record, Scalar, Sequence};

use super::error::DecodeError;
use super::trace::{decode_trace, encode_trace};

/// Reserved record key carrying the origin trace
pub const ORIGIN_KEY: &str = "tra";
/// Wrapper key for a sequence that carries annotations
pub const SEQUENCE_KEY: &str = "$seq";

/// Decode a program tree
///
/// Fails only when a record's `"tra"` value is not a valid tagged trace.
pub fn decode_node(value: &Value) -> Result<Node, DecodeError> {
    Ok(match value {
        Value::Null => Node::null(),
        Value::Bool(b) => Node::from(*b),
        Value::Number(n) => Node::Leaf(decode_number(n)),
        Value::String(s) => Node::from(s.as_str()),
        Value::Array(items) => Node::Sequence(Sequence::new(decode_all(items)?)),
        Value::Object(map) => match map.get(SEQUENCE_KEY) {
            Some(Value::Array(items)) => Node::Sequence(Sequence {
                items: decode_all(items)?,
                annotations: decode_fields(map, SEQUENCE_KEY)?,
            }),
            _ => Node::Record(Record {
                fields: decode_fields(map, ORIGIN_KEY)?,
                origin: map
                    .get(ORIGIN_KEY)
                    .map(|origin| decode_trace(origin, None))
                    .transpose()?,
            }),
        },
    })
}

/// Encode a program tree
///
/// A record field literally named `"tra"` is shadowed by the origin slot
/// when the record has an origin.
pub fn encode_node(node: &Node) -> Value {
    match node {
        Node::Leaf(scalar) => encode_scalar(scalar),
        Node::Sequence(seq) => {
            let items = Value::Array(seq.items.iter().map(encode_node).collect());
            if seq.annotations.is_empty() {
                return items;
            }
            let mut map = encode_fields(&seq.annotations);
            map.insert(SEQUENCE_KEY.to_string(), items);
            Value::Object(map)
        }
        Node::Record(record) => {
            let mut map = encode_fields(&record.fields);
            if let Some(origin) = &record.origin {
                map.insert(ORIGIN_KEY.to_string(), encode_trace(origin));
            }
            Value::Object(map)
        }
    }
}

fn decode_number(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::UInt(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn decode_all(items: &[Value]) -> Result<Vec<Node>, DecodeError> {
    items.iter().map(decode_node).collect()
}

fn decode_fields(
    map: &Map<String, Value>,
    reserved: &str,
) -> Result<BTreeMap<String, Node>, DecodeError> {
    map.iter()
        .filter(|(name, _)| name.as_str() != reserved)
        .map(|(name, value)| Ok((name.clone(), decode_node(value)?)))
        .collect()
}

fn encode_fields<'a>(fields: impl IntoIterator<Item = (&'a String, &'a Node)>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name.clone(), encode_node(value)))
        .collect()
}

fn encode_scalar(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Int(i) => Value::Number((*i).into()),
        Scalar::UInt(u) => Value::Number((*u).into()),
        Scalar::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        Scalar::String(s) => Value::String(s.clone()),
    }
}
