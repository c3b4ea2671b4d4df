//! The host URI contract.

use std::fmt;
use std::str::FromStr;

use crate::value::Value;

/// Capabilities the guards need from a host-supplied URI type.
///
/// The host owns the URI grammar, the per-type constructors and the identity
/// rules. This crate only relies on what is listed here:
///
/// - `FromStr` parses a URI from its string form and fails on bad input.
/// - `Display` renders the canonical string form.
/// - [`Identifier::kind`] reads the URI's type.
/// - [`Identifier::from_value`] parses an arbitrary value without failing.
pub trait Identifier: FromStr + Clone + fmt::Display {
    /// The closed set of URI types.
    type Kind: Clone + PartialEq + fmt::Display + FromStr;

    /// Returns the type of this URI.
    fn kind(&self) -> Self::Kind;

    /// Parses an arbitrary value into a URI.
    ///
    /// An already-parsed URI is returned as is. `Null` yields `None`. Any
    /// other value is rendered to text and parsed, a parse failure also
    /// yielding `None`.
    fn from_value(value: &Value<Self>) -> Option<Self> {
        match value {
            Value::Identifier(uri) => Some(uri.clone()),
            other => other.as_text().and_then(|text| text.parse().ok()),
        }
    }

    /// Returns true if both URIs refer to the same resource, even when their
    /// string forms differ.
    fn is_same_identity(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
