//! JSON interchange with the evaluator and view layer
//!
//! Traces travel as tagged records, program trees as plain JSON documents
//! with the origin trace under the reserved `"tra"` key, and step arrays as
//! arrays of numbers or numeral strings.

mod error;
mod node;
mod steps;
mod trace;

pub use error::{encode_error, DecodeError};
pub use node::{decode_node, encode_node, ORIGIN_KEY, SEQUENCE_KEY};
pub use steps::decode_steps;
pub use trace::{
    decode_trace, encode_trace, equals_tagged, LABEL_KEY, LEFT_KEY, REST_KEY, RIGHT_KEY, TAG_KEY,
};
