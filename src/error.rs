//! Error types for source operations.

use std::fmt;

use crate::source::SourceKind;

/// Errors raised by [`Source::join`](crate::source::Source::join).
///
/// Joining is the only fallible operation on a source; construction and
/// containment are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The two sources are of different kinds and cannot be joined
    KindMismatch {
        left: SourceKind,
        right: SourceKind,
    },
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::KindMismatch { left, right } => {
                write!(f, "cannot join a {} source to a {} source", left, right)
            }
        }
    }
}

impl std::error::Error for JoinError {}
