//! Shared argument assertions for event facades.
//!
//! The verification host rejects events carrying malformed numeric
//! arguments, so facades validate before anything reaches the outbound
//! queue. Failures carry the dotted parameter name the host echoes back in
//! its diagnostics, e.g. `MediaEvents.start.duration`.

/// Error raised when an event argument fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuardError {
    /// The value was NaN or infinite.
    #[error("{name}: expected a finite number, got {value}")]
    NotFinite {
        /// Dotted name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The value fell outside the closed range `[low, high]`.
    #[error("{name}: expected a number between {low} and {high}, got {value}")]
    OutOfRange {
        /// Dotted name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound, inclusive.
        low: f64,
        /// Upper bound, inclusive.
        high: f64,
    },
    /// The value was negative where only zero or more is meaningful.
    #[error("{name}: expected a non-negative number, got {value}")]
    Negative {
        /// Dotted name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Assert that `value` is a finite number.
///
/// # Errors
///
/// Returns [`GuardError::NotFinite`] for NaN and ±infinity.
pub fn expect_finite(name: &'static str, value: f64) -> Result<(), GuardError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GuardError::NotFinite { name, value })
    }
}

/// Assert that `value` is finite and within the closed range `[low, high]`.
///
/// # Errors
///
/// Returns [`GuardError::OutOfRange`] when the value is non-finite or falls
/// outside the range.
pub fn expect_between(
    name: &'static str,
    value: f64,
    low: f64,
    high: f64,
) -> Result<(), GuardError> {
    if value.is_finite() && (low..=high).contains(&value) {
        Ok(())
    } else {
        Err(GuardError::OutOfRange { name, value, low, high })
    }
}

/// Assert that `value` is finite and not negative.
///
/// # Errors
///
/// Returns [`GuardError::NotFinite`] for NaN and ±infinity, and
/// [`GuardError::Negative`] for values below zero.
pub fn expect_non_negative(name: &'static str, value: f64) -> Result<(), GuardError> {
    expect_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GuardError::Negative { name, value })
    }
}
