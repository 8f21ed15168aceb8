//! VAST creative properties reported with the `loaded` event.

use serde::Serialize;
use serde_json::Value;

use crate::{guard, guard::GuardError, types::VideoPosition};

/// Properties of the VAST creative, captured once at load time.
///
/// Construction is the validation seam: a value of this type always renders
/// to a mapping the verification host accepts, so `loaded` itself has
/// nothing left to check.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VastProperties {
    is_skippable: bool,
    skip_offset: f64,
    is_auto_play: bool,
    position: VideoPosition,
}

impl VastProperties {
    /// Create a new set of VAST properties.
    ///
    /// `skip_offset` is the number of seconds after which the creative may
    /// be skipped. The host ignores it when `is_skippable` is false, but it
    /// must still be a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns a [`GuardError`] if `skip_offset` is NaN, infinite, or
    /// negative.
    pub fn new(
        is_skippable: bool,
        skip_offset: f64,
        is_auto_play: bool,
        position: VideoPosition,
    ) -> Result<Self, GuardError> {
        guard::expect_non_negative("VastProperties.skipOffset", skip_offset)?;
        Ok(Self { is_skippable, skip_offset, is_auto_play, position })
    }

    /// Whether the creative can be skipped.
    #[must_use]
    pub fn is_skippable(&self) -> bool { self.is_skippable }

    /// Seconds until the creative becomes skippable.
    #[must_use]
    pub fn skip_offset(&self) -> f64 { self.skip_offset }

    /// Whether playback starts without a user gesture.
    #[must_use]
    pub fn is_auto_play(&self) -> bool { self.is_auto_play }

    /// Position of the ad relative to the content.
    #[must_use]
    pub fn position(&self) -> VideoPosition { self.position }

    /// Render to the flat wire mapping forwarded with the `loaded` event.
    ///
    /// The position enum is rendered as its lowercase tag, field names in
    /// camelCase.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        // Every field serializes to a primitive JSON value, so this cannot
        // fail; the fallback is unreachable.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_flat_wire_mapping() {
        let vast = VastProperties::new(true, 10.0, true, VideoPosition::PreRoll)
            .expect("valid properties");

        assert_eq!(
            vast.to_wire(),
            json!({
                "isSkippable": true,
                "skipOffset": 10.0,
                "isAutoPlay": true,
                "position": "preroll",
            })
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-1.0)]
    fn rejects_invalid_skip_offset(#[case] skip_offset: f64) {
        assert!(VastProperties::new(true, skip_offset, false, VideoPosition::MidRoll).is_err());
    }

    #[test]
    fn accessors_round_trip_construction() {
        let vast = VastProperties::new(false, 0.0, false, VideoPosition::PostRoll)
            .expect("valid properties");

        assert!(!vast.is_skippable());
        assert_eq!(vast.skip_offset(), 0.0);
        assert!(!vast.is_auto_play());
        assert_eq!(vast.position(), VideoPosition::PostRoll);
    }
}
