//! Raw step arrays
//!
//! Steps arrive as JSON arrays of numbers or numeral strings. A JSON `null`
//! element is a null step. JSON has no undefined, so undefined elements only
//! arise from typed callers building [`RawStep`]s directly.

use serde_json::Value;
use tracemark_core::{step, Input, RawStep};

use super::error::DecodeError;
use super::trace::{json_type, number_label};

/// Decode a raw step array
///
/// `None` is an undefined array and `null` a null one; both are passed
/// through for the builder to reject with its own message.
pub fn decode_steps(value: Option<&Value>) -> Result<Input<Vec<RawStep>>, DecodeError> {
    let items = match value {
        None => return Ok(Input::Undefined),
        Some(Value::Null) => return Ok(Input::Null),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DecodeError::MalformedSteps(format!(
                "expected an array or null, found {}",
                json_type(other)
            )));
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Null => Ok(Input::Null),
            Value::Number(n) => Ok(step(number_label(n))),
            Value::String(s) => Ok(step(s.as_str())),
            other => Err(DecodeError::MalformedSteps(format!(
                "step {} must be a number, string or null, found {}",
                index,
                json_type(other)
            ))),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Input::Value)
}
