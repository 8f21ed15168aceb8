//! Metric helpers for `admeasure`.
//!
//! This module defines metric names and simple helper functions
//! wrapping the [`metrics`](https://docs.rs/metrics) crate.

use metrics::{counter, gauge};

/// Name of the gauge tracking live ad sessions.
pub const SESSIONS_ACTIVE: &str = "admeasure_sessions_active";
/// Name of the counter tracking messages forwarded to the host bridge.
pub const MESSAGES_FORWARDED: &str = "admeasure_messages_forwarded_total";
/// Name of the counter tracking messages dropped on queue overflow.
pub const MESSAGES_DROPPED: &str = "admeasure_messages_dropped_total";

/// Increment the live sessions gauge.
pub fn inc_sessions() { gauge!(SESSIONS_ACTIVE).increment(1.0); }

/// Decrement the live sessions gauge.
pub fn dec_sessions() { gauge!(SESSIONS_ACTIVE).decrement(1.0); }

/// Record a message forwarded to the bridge.
pub fn inc_forwarded(method: &'static str) {
    counter!(MESSAGES_FORWARDED, "method" => method).increment(1);
}

/// Record a message dropped on queue overflow.
pub fn inc_dropped() { counter!(MESSAGES_DROPPED).increment(1); }
