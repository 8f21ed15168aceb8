//! Tests for Display implementations on error types.

use admeasure::{GuardError, HandlerKind, MeasureError, SinkError};

#[test]
fn sink_error_messages() {
    assert_eq!(SinkError::QueueFull.to_string(), "outbound queue full");
    assert_eq!(SinkError::Closed.to_string(), "outbound queue closed");
}

#[test]
fn guard_error_messages() {
    let out_of_range = GuardError::OutOfRange {
        name: "MediaEvents.start.mediaPlayerVolume",
        value: 1.5,
        low: 0.0,
        high: 1.0,
    };
    assert_eq!(
        out_of_range.to_string(),
        "MediaEvents.start.mediaPlayerVolume: expected a number between 0 and 1, got 1.5"
    );

    let negative = GuardError::Negative { name: "VastProperties.skipOffset", value: -2.0 };
    assert_eq!(
        negative.to_string(),
        "VastProperties.skipOffset: expected a non-negative number, got -2"
    );
}

#[test]
fn measure_error_messages() {
    assert_eq!(MeasureError::SessionNotRunning.to_string(), "ad session is not running");
    assert_eq!(
        MeasureError::HandlerAlreadyRegistered(HandlerKind::Media).to_string(),
        "session already has a registered media events handler"
    );
    assert_eq!(
        MeasureError::HandlerAlreadyRegistered(HandlerKind::Ad).to_string(),
        "session already has a registered ad events handler"
    );

    let guard = GuardError::NotFinite { name: "MediaEvents.start.duration", value: f64::NAN };
    assert_eq!(
        MeasureError::from(guard).to_string(),
        "invalid event argument: MediaEvents.start.duration: expected a finite number, got NaN"
    );
}
