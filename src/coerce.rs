//! Lenient guards: text is parsed, parsed URIs pass through.

use crate::assert::elements;
use crate::error::{AssertError, AssertErrorKind};
use crate::identifier::Identifier;
use crate::value::Value;

pub use crate::assert::{assert_uri_array_type, assert_uri_type};

/// Coerces text or an already-parsed URI into a URI.
///
/// Text goes through the host parser. A parsed URI is returned without being
/// re-validated.
///
/// # Errors
///
/// Returns `InvalidIdentifier` if the text does not parse, or if the value is
/// neither text nor a parsed URI.
pub fn coerce_into_uri<U: Identifier>(input: &Value<U>) -> Result<U, AssertError> {
    coerce(input).map_err(AssertError::traced)
}

/// Coerces every element of `input` into a URI.
///
/// A value that is not a sequence is treated as a sequence of one. Elements
/// are processed in order and the first failure aborts the call.
///
/// # Errors
///
/// Returns `InvalidIdentifier`, positioned at the failing element.
pub fn coerce_into_uri_array<U: Identifier>(input: &Value<U>) -> Result<Vec<U>, AssertError> {
    elements(input)
        .iter()
        .enumerate()
        .map(|(i, item)| coerce(item).map_err(|e| e.at(i)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AssertError::traced)
}

fn coerce<U: Identifier>(input: &Value<U>) -> Result<U, AssertError> {
    let coerced = match input {
        Value::Text(_) => U::from_value(input),
        Value::Identifier(uri) => Some(uri.clone()),
        _ => None,
    };
    coerced.ok_or_else(|| AssertError::new(input.describe(), AssertErrorKind::InvalidIdentifier))
}
