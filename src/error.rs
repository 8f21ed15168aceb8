//! Canonical error and result types for the crate.
//!
//! This module defines the single public [`MeasureError`] surface returned
//! by facade construction and event reporting.

use crate::{guard::GuardError, session::HandlerKind};

/// Top-level error type exposed by `admeasure`.
///
/// `MeasureError` distinguishes registration conflicts raised at facade
/// construction from the fail-fast argument and session-state checks made
/// before an event is forwarded. None of these are retried; the failed call
/// has no side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// An event argument failed validation; nothing was forwarded.
    Guard(GuardError),
    /// The session already has a handler of this kind registered.
    HandlerAlreadyRegistered(HandlerKind),
    /// The operation requires a session that has started.
    SessionNotRunning,
}

impl From<GuardError> for MeasureError {
    fn from(error: GuardError) -> Self { Self::Guard(error) }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guard(error) => write!(f, "invalid event argument: {error}"),
            Self::HandlerAlreadyRegistered(kind) => {
                write!(f, "session already has a registered {kind} events handler")
            }
            Self::SessionNotRunning => f.write_str("ad session is not running"),
        }
    }
}

impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Guard(error) => Some(error),
            Self::HandlerAlreadyRegistered(_) | Self::SessionNotRunning => None,
        }
    }
}

/// Canonical result alias used by `admeasure` public APIs.
pub type Result<T> = std::result::Result<T, MeasureError>;
