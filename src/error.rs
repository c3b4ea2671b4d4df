//! Error types for URI assertion and coercion.

use std::fmt;

/// Errors raised when an input fails an assertion or coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertError {
    /// Rendering of the rejected input
    pub input: String,
    /// Zero-based element index when the failure happened inside a sequence
    pub position: Option<usize>,
    /// The specific failure
    pub kind: AssertErrorKind,
}

/// Specific assertion failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertErrorKind {
    /// Input did not parse into, or was not, a URI
    NotAnIdentifier,
    /// A sequence was required but something else was given
    NotASequence {
        /// Shape of the value that was found
        found: &'static str,
    },
    /// The lenient path hit the host's "unparseable" sentinel
    InvalidIdentifier,
    /// The URI parsed but its type is not allowed
    KindMismatch {
        /// The type the URI actually has
        found: String,
        /// The type(s) that were allowed
        expected: ExpectedKinds,
    },
    /// The allowed-type argument itself is malformed
    InvalidSpecification {
        /// What was wrong with it
        reason: String,
    },
}

/// The allowed URI type(s) named in a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpectedKinds {
    /// A single allowed type
    One(String),
    /// A collection of allowed types, in iteration order
    AnyOf(Vec<String>),
}

impl AssertError {
    pub(crate) fn new(input: impl Into<String>, kind: AssertErrorKind) -> Self {
        Self {
            input: input.into(),
            position: None,
            kind,
        }
    }

    /// Attaches the index of the failing element.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Emits the rejection as a debug event and hands the error back.
    pub(crate) fn traced(self) -> Self {
        match &self.kind {
            AssertErrorKind::KindMismatch { found, expected } => tracing::debug!(
                input = %self.input,
                position = ?self.position,
                found = %found,
                expected = %expected,
                "input rejected"
            ),
            AssertErrorKind::NotASequence { found } => tracing::debug!(
                input = %self.input,
                position = ?self.position,
                found = %found,
                error = %self,
                "input rejected"
            ),
            _ => tracing::debug!(
                input = %self.input,
                position = ?self.position,
                error = %self,
                "input rejected"
            ),
        }
        self
    }

    /// Returns true if the URI was valid but had a disallowed type.
    #[must_use]
    pub const fn is_kind_mismatch(&self) -> bool {
        matches!(self.kind, AssertErrorKind::KindMismatch { .. })
    }

    /// Returns true if the failure is a programming error of the caller
    /// rather than bad data.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self.kind, AssertErrorKind::InvalidSpecification { .. })
    }
}

impl fmt::Display for ExpectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(kind) => write!(f, "{kind}"),
            Self::AnyOf(kinds) => write!(f, "one of {}", kinds.join(", ")),
        }
    }
}

impl fmt::Display for AssertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(i) => write!(f, "rejected element {i} '{}': ", self.input)?,
            None => write!(f, "rejected '{}': ", self.input)?,
        }
        match &self.kind {
            AssertErrorKind::NotAnIdentifier => write!(f, "value is not a URI"),
            AssertErrorKind::NotASequence { found } => {
                write!(f, "expected a sequence of URIs, found {found}")
            }
            AssertErrorKind::InvalidIdentifier => {
                write!(f, "value cannot be coerced into a URI")
            }
            AssertErrorKind::KindMismatch { found, expected } => {
                write!(f, "invalid URI type '{found}'; expected {expected}")
            }
            AssertErrorKind::InvalidSpecification { reason } => {
                write!(
                    f,
                    "invalid allowed-type specification: {reason}; must be a type, a set of types, or a sequence of types"
                )
            }
        }
    }
}

impl std::error::Error for AssertError {}
