//! Failure taxonomy shared by the webcam and trail sources.
//!
//! Source failures never escape a search: the record list is collapsed to
//! empty, but the [`SourceStatus`] reported next to it keeps the reason so a
//! caller can tell "nothing here" apart from "the upstream is down".

use std::fmt;

use serde::Serialize;

/// Why a source fetch (or a single record) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Unreachable host, connect failure, timeout, or a non-auth non-2xx status.
    Network,
    /// Missing or rejected API credentials.
    Auth,
    /// Malformed body or unexpected JSON shape.
    Decode,
    /// Unusable input or record (bad coordinates, missing required fields).
    Validation,
}

impl FailureKind {
    /// Classifies a non-success HTTP status code.
    ///
    /// 401 and 403 are credential problems; everything else is treated as a
    /// transport-level failure.
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Auth,
            _ => Self::Network,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Auth => write!(f, "auth"),
            Self::Decode => write!(f, "decode"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// Per-source result tag carried alongside the (possibly empty) record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SourceStatus {
    /// The fetch succeeded. `dropped` counts records rejected during normalization.
    Ok { count: usize, dropped: usize },
    /// The fetch failed and its records were replaced with an empty list.
    Failed { kind: FailureKind },
}

impl SourceStatus {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        match self {
            Self::Ok { .. } => None,
            Self::Failed { kind } => Some(*kind),
        }
    }
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok { count, dropped: 0 } => write!(f, "ok ({count} records)"),
            Self::Ok { count, dropped } => {
                write!(f, "ok ({count} records, {dropped} dropped)")
            }
            Self::Failed { kind } => write!(f, "failed ({kind})"),
        }
    }
}
