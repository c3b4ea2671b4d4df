//! Host stand-in shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use uri_assert::{Identifier, UriType, Value};

thread_local! {
    static PARSE_CALLS: Cell<usize> = const { Cell::new(0) };
}

pub fn parse_calls() -> usize {
    PARSE_CALLS.with(Cell::get)
}

pub fn reset_parse_calls() {
    PARSE_CALLS.with(|calls| calls.set(0));
}

/// Routes rejection events to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("uri_assert=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Accepts `spotify:<type>:<base62 id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUri {
    pub kind: UriType,
    pub id: String,
}

impl HostUri {
    pub fn new(kind: UriType, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }

    pub fn value(kind: UriType, id: &str) -> Value<Self> {
        Value::identifier(Self::new(kind, id))
    }
}

impl FromStr for HostUri {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PARSE_CALLS.with(|calls| calls.set(calls.get() + 1));

        let rest = s
            .strip_prefix("spotify:")
            .ok_or_else(|| format!("'{s}' is not a spotify URI"))?;
        let (kind, id) = rest
            .split_once(':')
            .ok_or_else(|| format!("'{s}' has no id"))?;
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("'{id}' is not a base62 id"));
        }
        let kind = kind.parse::<UriType>().map_err(|e| e.to_string())?;
        Ok(Self::new(kind, id))
    }
}

impl fmt::Display for HostUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spotify:{}:{}", self.kind, self.id)
    }
}

impl Identifier for HostUri {
    type Kind = UriType;

    fn kind(&self) -> UriType {
        self.kind
    }
}
