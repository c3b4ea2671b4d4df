//! Assertion and coercion guards for host-supplied typed URIs.
//!
//! The URI type itself belongs to a host runtime: the host owns the string
//! grammar, the per-type constructors and the identity rules. This crate
//! normalizes loosely-typed inputs (text, parsed URIs, sequences of either)
//! into validated URIs, and checks that their type belongs to an allowed set.
//!
//! # Overview
//!
//! | Guard | Accepts | Fails with |
//! |-------|---------|------------|
//! | [`assert_uri`] | anything the host can parse | `NotAnIdentifier` |
//! | [`assert_uri_array`] | a sequence, or a lone value | `NotAnIdentifier` |
//! | [`assert_uri_type`] | a parsed URI | `NotAnIdentifier`, `KindMismatch` |
//! | [`assert_uri_array_type`] | a sequence of parsed URIs | `NotASequence`, `NotAnIdentifier`, `KindMismatch` |
//! | [`coerce_into_uri`] | text or a parsed URI | `InvalidIdentifier` |
//! | [`coerce_into_uri_array`] | a sequence, or a lone value | `InvalidIdentifier` |
//!
//! Sequence guards process elements in order and stop at the first failure.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fmt;
//! use std::str::FromStr;
//!
//! use uri_assert::{assert_uri, assert_uri_type, Identifier, KindSpec, UriType, Value};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct HostUri {
//!     kind: UriType,
//!     id: String,
//! }
//!
//! impl FromStr for HostUri {
//!     type Err = String;
//!
//!     fn from_str(s: &str) -> Result<Self, Self::Err> {
//!         let rest = s.strip_prefix("spotify:").ok_or("bad scheme")?;
//!         let (kind, id) = rest.split_once(':').ok_or("missing id")?;
//!         let kind = kind.parse::<UriType>().map_err(|e| e.to_string())?;
//!         Ok(Self { kind, id: id.to_string() })
//!     }
//! }
//!
//! impl fmt::Display for HostUri {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "spotify:{}:{}", self.kind, self.id)
//!     }
//! }
//!
//! impl Identifier for HostUri {
//!     type Kind = UriType;
//!
//!     fn kind(&self) -> UriType {
//!         self.kind
//!     }
//! }
//!
//! let uri: HostUri = assert_uri(&Value::from("spotify:track:4uLU6hMCjMI75M1A2tKUQC")).unwrap();
//! assert_eq!(uri.kind(), UriType::Track);
//!
//! let playable = KindSpec::from([UriType::Track, UriType::Episode]);
//! assert!(assert_uri_type(&Value::identifier(uri), &playable).is_ok());
//! ```
//!
//! # Logging
//!
//! Every rejection is emitted as a `tracing` event at `debug` level. The
//! crate installs no subscriber.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`UriType`] and [`ExpectedKinds`]
//! - `json`: conversion from `serde_json::Value` into [`Value`]

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assert;
pub mod coerce;
mod error;
mod identifier;
mod kind_spec;
pub mod prelude;
#[cfg(test)]
mod test_support;
mod uri_type;
mod value;

pub use assert::{assert_kind, assert_uri, assert_uri_array, assert_uri_array_type, assert_uri_type};
pub use coerce::{coerce_into_uri, coerce_into_uri_array};
pub use error::{AssertError, AssertErrorKind, ExpectedKinds};
pub use identifier::Identifier;
pub use kind_spec::{AllowedKinds, KindName, KindSpec, LooseKindSpec};
pub use uri_type::UriType;
pub use value::Value;
