//! In-crate stand-in for the host URI type.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::{Identifier, UriType};

thread_local! {
    static PARSE_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// Number of string parses performed on this thread.
pub(crate) fn parse_calls() -> usize {
    PARSE_CALLS.with(Cell::get)
}

pub(crate) fn reset_parse_calls() {
    PARSE_CALLS.with(|calls| calls.set(0));
}

/// Parses `spotify:<type>:<id>` and the legacy `spotify:user:<name>:playlist:<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestUri {
    kind: UriType,
    id: String,
    user: Option<String>,
}

impl TestUri {
    pub(crate) fn new(kind: UriType, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            user: None,
        }
    }

    fn valid_id(id: &str) -> bool {
        !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl FromStr for TestUri {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PARSE_CALLS.with(|calls| calls.set(calls.get() + 1));

        let rest = s.strip_prefix("spotify:").ok_or("missing scheme")?;
        let parts: Vec<&str> = rest.split(':').collect();
        match parts.as_slice() {
            ["user", name, "playlist", id] if !name.is_empty() && Self::valid_id(id) => Ok(Self {
                kind: UriType::Playlist,
                id: (*id).to_string(),
                user: Some((*name).to_string()),
            }),
            [kind, id] if Self::valid_id(id) => {
                let kind = kind.parse::<UriType>().map_err(|_| "unknown type")?;
                Ok(Self::new(kind, id))
            }
            _ => Err("malformed uri"),
        }
    }
}

impl fmt::Display for TestUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) => write!(f, "spotify:user:{user}:{}:{}", self.kind, self.id),
            None => write!(f, "spotify:{}:{}", self.kind, self.id),
        }
    }
}

impl Identifier for TestUri {
    type Kind = UriType;

    fn kind(&self) -> UriType {
        self.kind
    }

    fn is_same_identity(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}
