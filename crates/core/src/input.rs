//! Raw inputs delivered by external collaborators
//!
//! Recording and selection collaborators may hand over values that are
//! missing entirely (undefined) or explicitly null. The two are reported as
//! different failures, so they stay distinct here.

use crate::trace::StepLabel;

/// A possibly-missing argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Input<T> {
    /// Not supplied at all
    #[default]
    Undefined,
    /// Supplied as an explicit null
    Null,
    /// Supplied with a value
    Value(T),
}

impl<T> Input<T> {
    /// Check if the input is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Input::Undefined)
    }

    /// Check if the input is null
    pub fn is_null(&self) -> bool {
        matches!(self, Input::Null)
    }

    /// Borrow the contents
    pub fn as_ref(&self) -> Input<&T> {
        match self {
            Input::Undefined => Input::Undefined,
            Input::Null => Input::Null,
            Input::Value(value) => Input::Value(value),
        }
    }

    /// The value, if one was supplied
    pub fn value(self) -> Option<T> {
        match self {
            Input::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Map the contained value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Input<U> {
        match self {
            Input::Undefined => Input::Undefined,
            Input::Null => Input::Null,
            Input::Value(value) => Input::Value(f(value)),
        }
    }
}

impl<T> From<T> for Input<T> {
    fn from(value: T) -> Self {
        Input::Value(value)
    }
}

/// One element of a raw step sequence
pub type RawStep = Input<StepLabel>;

/// Build a present raw step from any step identifier
pub fn step(id: impl Into<StepLabel>) -> RawStep {
    Input::Value(id.into())
}

/// Convert plain step identifiers into raw steps
pub fn raw_steps<I, S>(ids: I) -> Vec<RawStep>
where
    I: IntoIterator<Item = S>,
    S: Into<StepLabel>,
{
    ids.into_iter().map(step).collect()
}
