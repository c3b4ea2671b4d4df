//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_assert::prelude::*;
//!
//! let spec = KindSpec::single(UriType::Album);
//! assert!(spec.contains(&UriType::Album));
//! ```

pub use crate::{
    // Guards
    assert_kind, assert_uri, assert_uri_array, assert_uri_array_type, assert_uri_type,
    coerce_into_uri, coerce_into_uri_array,
    // Core types
    AllowedKinds, Identifier, KindName, KindSpec, LooseKindSpec, UriType, Value,
    // Errors
    AssertError, AssertErrorKind, ExpectedKinds,
};
