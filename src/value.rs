//! Loosely-typed input values.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A loosely-typed value handed to the assertion and coercion guards.
///
/// Guards exist to turn untrusted input into validated URIs, so their inputs
/// can be anything: raw strings, URIs that were already parsed, sequences of
/// either, or values that make no sense at all.
///
/// # Examples
///
/// ```
/// use uri_assert::Value;
///
/// let text: Value<String> = Value::from("spotify:track:abc");
/// assert_eq!(text.as_text().as_deref(), Some("spotify:track:abc"));
///
/// let seq: Value<String> = vec![Value::from(1), Value::from(true), Value::Null].into();
/// assert_eq!(seq.as_text().as_deref(), Some("1,true,"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<U> {
    /// Absence of a value
    Null,
    /// A boolean
    Bool(bool),
    /// A number
    Number(f64),
    /// Raw text, typically an unparsed URI
    Text(String),
    /// A URI that was already parsed by the host
    Identifier(U),
    /// An ordered sequence of values
    Sequence(Vec<Value<U>>),
    /// A keyed record
    Object(BTreeMap<String, Value<U>>),
}

impl<U> Value<U> {
    /// Wraps an already-parsed URI.
    #[must_use]
    pub const fn identifier(uri: U) -> Self {
        Self::Identifier(uri)
    }

    /// Returns the name of this value's shape.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Identifier(_) => "identifier",
            Self::Sequence(_) => "sequence",
            Self::Object(_) => "object",
        }
    }

    /// Returns true if this value is a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the parsed URI, if this value holds one.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&U> {
        match self {
            Self::Identifier(uri) => Some(uri),
            _ => None,
        }
    }
}

impl<U: fmt::Display> Value<U> {
    /// Renders the value as text for parsing.
    ///
    /// Returns `None` for `Null`, which has no textual form. Sequences render
    /// as their elements joined with commas, null elements rendering empty.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Self::Number(n) => Some(Cow::Owned(render_number(*n))),
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Identifier(uri) => Some(Cow::Owned(uri.to_string())),
            Self::Sequence(items) => {
                let parts: Vec<Cow<'_, str>> = items
                    .iter()
                    .map(|item| item.as_text().unwrap_or(Cow::Borrowed("")))
                    .collect();
                Some(Cow::Owned(parts.join(",")))
            }
            Self::Object(_) => Some(Cow::Borrowed("[object Object]")),
        }
    }

    /// Renders the value for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.as_text()
            .map_or_else(|| "null".to_string(), Cow::into_owned)
    }
}

#[allow(clippy::float_cmp)]
fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n.is_sign_positive() { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

impl<U> From<&str> for Value<U> {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<U> From<String> for Value<U> {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<U> From<bool> for Value<U> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<U> From<f64> for Value<U> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl<U> From<i32> for Value<U> {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl<U> From<i64> for Value<U> {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl<U> From<Vec<Value<U>>> for Value<U> {
    fn from(items: Vec<Value<U>>) -> Self {
        Self::Sequence(items)
    }
}

impl<U, T: Into<Value<U>>> From<Option<T>> for Value<U> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<U, T: Into<Value<U>>> FromIterator<T> for Value<U> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "json")]
impl<U> From<serde_json::Value> for Value<U> {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type V = Value<String>;

    #[test]
    fn null_has_no_text() {
        assert_eq!(V::Null.as_text(), None);
        assert_eq!(V::Null.describe(), "null");
    }

    #[test]
    fn numbers_render_like_plain_integers() {
        assert_eq!(V::from(42).describe(), "42");
        assert_eq!(V::from(-7i64).describe(), "-7");
        assert_eq!(V::from(1.5).describe(), "1.5");
        assert_eq!(V::from(-0.0).describe(), "0");
        assert_eq!(V::from(f64::NAN).describe(), "NaN");
        assert_eq!(V::from(f64::NEG_INFINITY).describe(), "-Infinity");
    }

    #[test]
    fn sequences_join_with_commas() {
        let nested: V = vec![V::from("a"), vec![V::from("b"), V::from("c")].into()].into();
        assert_eq!(nested.describe(), "a,b,c");

        let single: V = vec![V::from("spotify:track:x")].into();
        assert_eq!(single.describe(), "spotify:track:x");
    }

    #[test]
    fn objects_render_opaquely() {
        let obj = V::Object(BTreeMap::new());
        assert_eq!(obj.describe(), "[object Object]");
        assert_eq!(obj.type_name(), "object");
    }

    #[test]
    fn identifiers_render_through_display() {
        let uri = V::identifier("spotify:album:1".to_string());
        assert_eq!(uri.describe(), "spotify:album:1");
        assert_eq!(uri.as_identifier().map(String::as_str), Some("spotify:album:1"));
    }

    #[test]
    fn option_and_iterator_conversions() {
        assert_eq!(V::from(None::<&str>), V::Null);
        assert_eq!(V::from(Some("x")), V::Text("x".to_string()));

        let seq: V = ["a", "b"].into_iter().collect();
        assert!(seq.is_sequence());
        assert_eq!(seq.describe(), "a,b");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_values_convert() {
        let json = serde_json::json!(["spotify:track:1", null, 3, {"a": 1}]);
        let value = V::from(json);
        assert_eq!(value.describe(), "spotify:track:1,,3,[object Object]");
    }
}
