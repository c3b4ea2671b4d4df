//! Strict guards: every input goes through the host parser.

use crate::error::{AssertError, AssertErrorKind};
use crate::identifier::Identifier;
use crate::kind_spec::AllowedKinds;
use crate::value::Value;

/// Asserts that `input` is, or parses into, a URI.
///
/// # Errors
///
/// Returns `NotAnIdentifier` if the host cannot parse the value.
pub fn assert_uri<U: Identifier>(input: &Value<U>) -> Result<U, AssertError> {
    parse_strict(input).map_err(AssertError::traced)
}

/// Asserts that every element of `input` is, or parses into, a URI.
///
/// A value that is not a sequence is treated as a sequence of one. Elements
/// are processed in order and the first failure aborts the call.
///
/// # Errors
///
/// Returns `NotAnIdentifier`, positioned at the failing element.
pub fn assert_uri_array<U: Identifier>(input: &Value<U>) -> Result<Vec<U>, AssertError> {
    elements(input)
        .iter()
        .enumerate()
        .map(|(i, item)| parse_strict(item).map_err(|e| e.at(i)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AssertError::traced)
}

/// Asserts that `uri` holds a parsed URI whose type is allowed by `valid`.
///
/// Unlike [`assert_uri`], text is not parsed here: the value must already be
/// a URI.
///
/// # Errors
///
/// Returns `NotAnIdentifier` if `uri` is not a parsed URI, or `KindMismatch`
/// naming the allowed type(s).
pub fn assert_uri_type<U, A>(uri: &Value<U>, valid: &A) -> Result<U, AssertError>
where
    U: Identifier,
    A: AllowedKinds<U::Kind> + ?Sized,
{
    check_type(uri, valid).map_err(AssertError::traced)
}

/// Asserts that `uris` is a sequence of parsed URIs, each allowed by `valid`.
///
/// A lone value is not wrapped into a sequence here.
///
/// # Errors
///
/// Returns `NotASequence` if `uris` is not a sequence, otherwise the first
/// element failure of [`assert_uri_type`], positioned at that element.
pub fn assert_uri_array_type<U, A>(uris: &Value<U>, valid: &A) -> Result<Vec<U>, AssertError>
where
    U: Identifier,
    A: AllowedKinds<U::Kind> + ?Sized,
{
    let Value::Sequence(items) = uris else {
        return Err(AssertError::new(
            uris.describe(),
            AssertErrorKind::NotASequence {
                found: uris.type_name(),
            },
        )
        .traced());
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| check_type(item, valid).map_err(|e| e.at(i)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AssertError::traced)
}

/// Checks the type of a URI the caller already holds.
///
/// # Errors
///
/// Returns `KindMismatch` naming the allowed type(s).
pub fn assert_kind<'a, U, A>(uri: &'a U, valid: &A) -> Result<&'a U, AssertError>
where
    U: Identifier,
    A: AllowedKinds<U::Kind> + ?Sized,
{
    check_kind(uri, valid).map_err(AssertError::traced)
}

/// Views a value as a sequence, wrapping a lone value.
pub(crate) fn elements<U>(input: &Value<U>) -> &[Value<U>] {
    match input {
        Value::Sequence(items) => items,
        other => std::slice::from_ref(other),
    }
}

fn parse_strict<U: Identifier>(input: &Value<U>) -> Result<U, AssertError> {
    U::from_value(input)
        .ok_or_else(|| AssertError::new(input.describe(), AssertErrorKind::NotAnIdentifier))
}

fn check_type<U, A>(uri: &Value<U>, valid: &A) -> Result<U, AssertError>
where
    U: Identifier,
    A: AllowedKinds<U::Kind> + ?Sized,
{
    let Value::Identifier(uri) = uri else {
        return Err(AssertError::new(
            uri.describe(),
            AssertErrorKind::NotAnIdentifier,
        ));
    };
    check_kind(uri, valid).cloned()
}

fn check_kind<'a, U, A>(uri: &'a U, valid: &A) -> Result<&'a U, AssertError>
where
    U: Identifier,
    A: AllowedKinds<U::Kind> + ?Sized,
{
    let kind = uri.kind();
    if valid.admits(&kind) {
        Ok(uri)
    } else {
        Err(AssertError::new(
            uri.to_string(),
            AssertErrorKind::KindMismatch {
                found: kind.to_string(),
                expected: valid.expected(),
            },
        ))
    }
}
