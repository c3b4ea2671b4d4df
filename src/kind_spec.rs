//! Specifications of allowed URI types.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{AssertError, AssertErrorKind, ExpectedKinds};
use crate::uri_type::UriType;
use crate::value::Value;

/// The URI type(s) a kind assertion accepts.
///
/// Callers may name a single type, a set of types, or any sequence of types.
/// All three shapes reduce to one membership test; order and duplicates only
/// affect how the allowed types are listed in error messages.
///
/// # Examples
///
/// ```
/// use uri_assert::{KindSpec, UriType};
///
/// let spec = KindSpec::from([UriType::Track, UriType::Episode]);
/// assert!(spec.contains(&UriType::Episode));
/// assert!(!spec.contains(&UriType::Album));
/// assert_eq!(spec.expected().to_string(), "one of track, episode");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindSpec<K> {
    /// Exactly one allowed type
    Single(K),
    /// A set of allowed types, first-occurrence order, no duplicates
    SetOf(Vec<K>),
    /// Any sequence of allowed types, kept as given
    AnyOf(Vec<K>),
}

impl<K> KindSpec<K> {
    /// Allows exactly one type.
    #[must_use]
    pub const fn single(kind: K) -> Self {
        Self::Single(kind)
    }

    /// Allows any type yielded by `kinds`, kept in iteration order.
    #[must_use]
    pub fn any_of(kinds: impl IntoIterator<Item = K>) -> Self {
        Self::AnyOf(kinds.into_iter().collect())
    }

    /// Returns the allowed types as one collection.
    #[must_use]
    pub fn kinds(&self) -> &[K] {
        match self {
            Self::Single(kind) => std::slice::from_ref(kind),
            Self::SetOf(kinds) | Self::AnyOf(kinds) => kinds,
        }
    }
}

impl<K: PartialEq> KindSpec<K> {
    /// Allows any type in `kinds`, dropping duplicates.
    #[must_use]
    pub fn set(kinds: impl IntoIterator<Item = K>) -> Self {
        let mut unique: Vec<K> = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self::SetOf(unique)
    }

    /// Returns true if `kind` is allowed.
    #[must_use]
    pub fn contains(&self, kind: &K) -> bool {
        self.kinds().contains(kind)
    }
}

impl<K: fmt::Display> KindSpec<K> {
    /// Describes the allowed types for error messages.
    #[must_use]
    pub fn expected(&self) -> ExpectedKinds {
        match self {
            Self::Single(kind) => ExpectedKinds::One(kind.to_string()),
            Self::SetOf(kinds) | Self::AnyOf(kinds) => {
                ExpectedKinds::AnyOf(kinds.iter().map(ToString::to_string).collect())
            }
        }
    }
}

/// A set of allowed types that a kind assertion can test against.
pub trait AllowedKinds<K> {
    /// Returns true if `kind` is allowed.
    fn admits(&self, kind: &K) -> bool;

    /// Describes the allowed types for error messages.
    fn expected(&self) -> ExpectedKinds;
}

impl<K: PartialEq + fmt::Display> AllowedKinds<K> for KindSpec<K> {
    fn admits(&self, kind: &K) -> bool {
        self.contains(kind)
    }

    fn expected(&self) -> ExpectedKinds {
        KindSpec::expected(self)
    }
}

/// One entry of a loosely-typed specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindName<K> {
    /// A name of a known type
    Known(K),
    /// Anything else; kept for the error message, never matches
    Unknown(String),
}

impl<K: PartialEq> KindName<K> {
    /// Returns true if this entry names `kind`.
    #[must_use]
    pub fn matches(&self, kind: &K) -> bool {
        matches!(self, Self::Known(known) if known == kind)
    }
}

impl<K: fmt::Display> fmt::Display for KindName<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => write!(f, "{kind}"),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

/// An allowed-type specification built from a loosely-typed value.
///
/// Text is the single-type shape and a sequence is the collection shape.
/// Entries that name no known type are kept and simply never match, so a
/// URI checked against them fails with a type mismatch listing them.
///
/// # Examples
///
/// ```
/// use uri_assert::{AllowedKinds, LooseKindSpec, UriType, Value};
///
/// let value: Value<String> = vec![Value::from("album"), Value::from(1)].into();
/// let spec = LooseKindSpec::<UriType>::from_value(&value).unwrap();
/// assert!(spec.admits(&UriType::Album));
/// assert_eq!(spec.expected().to_string(), "one of album, 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseKindSpec<K>(KindSpec<KindName<K>>);

impl<K> LooseKindSpec<K> {
    /// Returns the entries, in iteration order.
    #[must_use]
    pub fn names(&self) -> &[KindName<K>] {
        self.0.kinds()
    }

    /// Returns the underlying specification.
    #[must_use]
    pub const fn spec(&self) -> &KindSpec<KindName<K>> {
        &self.0
    }
}

impl<K: FromStr> LooseKindSpec<K> {
    /// Builds a specification from a loosely-typed value.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidSpecification` error if the value is neither text
    /// nor a sequence.
    pub fn from_value<U: fmt::Display>(value: &Value<U>) -> Result<Self, AssertError> {
        let name = |text: &str| {
            text.parse::<K>()
                .map_or_else(|_| KindName::Unknown(text.to_string()), KindName::Known)
        };

        match value {
            Value::Text(text) => Ok(Self(KindSpec::Single(name(text.as_str())))),
            Value::Sequence(items) => Ok(Self(KindSpec::any_of(items.iter().map(
                |item| match item {
                    Value::Text(text) => name(text.as_str()),
                    other => KindName::Unknown(
                        other.as_text().map_or_else(String::new, Cow::into_owned),
                    ),
                },
            )))),
            other => Err(AssertError::new(
                value.describe(),
                AssertErrorKind::InvalidSpecification {
                    reason: format!("found {}", other.type_name()),
                },
            )),
        }
    }
}

impl<K: PartialEq + fmt::Display> AllowedKinds<K> for LooseKindSpec<K> {
    fn admits(&self, kind: &K) -> bool {
        self.names().iter().any(|name| name.matches(kind))
    }

    fn expected(&self) -> ExpectedKinds {
        self.0.expected()
    }
}

impl<K> FromIterator<K> for KindSpec<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::any_of(iter)
    }
}

impl From<UriType> for KindSpec<UriType> {
    fn from(kind: UriType) -> Self {
        Self::Single(kind)
    }
}

impl<const N: usize> From<[UriType; N]> for KindSpec<UriType> {
    fn from(kinds: [UriType; N]) -> Self {
        Self::any_of(kinds)
    }
}

impl From<&[UriType]> for KindSpec<UriType> {
    fn from(kinds: &[UriType]) -> Self {
        Self::any_of(kinds.iter().copied())
    }
}

impl From<Vec<UriType>> for KindSpec<UriType> {
    fn from(kinds: Vec<UriType>) -> Self {
        Self::AnyOf(kinds)
    }
}

impl<S: std::hash::BuildHasher> From<HashSet<UriType, S>> for KindSpec<UriType> {
    fn from(kinds: HashSet<UriType, S>) -> Self {
        Self::SetOf(kinds.into_iter().collect())
    }
}

impl From<BTreeSet<UriType>> for KindSpec<UriType> {
    fn from(kinds: BTreeSet<UriType>) -> Self {
        Self::SetOf(kinds.into_iter().collect())
    }
}
