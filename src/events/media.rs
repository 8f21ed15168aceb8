//! Media playback lifecycle events.

use std::sync::Arc;

use serde_json::json;

use crate::{
    error::Result,
    guard,
    session::AdSession,
    types::{InteractionType, VideoPlayerState},
    vast::VastProperties,
};

/// Facade reporting media playback lifecycle to the verification host.
///
/// One instance may be registered per session. Every method validates its
/// arguments, then forwards exactly one one-way message named after the
/// event; methods without numeric arguments are infallible because the type
/// system already constrains them.
pub struct MediaEvents {
    session: Arc<AdSession>,
}

impl MediaEvents {
    /// Register a media-events handler with `session`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::HandlerAlreadyRegistered`](crate::MeasureError::HandlerAlreadyRegistered)
    /// if the session already has a media events handler.
    pub fn new(session: Arc<AdSession>) -> Result<Self> {
        session.register_media_events()?;
        Ok(Self { session })
    }

    /// Report that the creative loaded, with its VAST properties in their
    /// flat wire form.
    pub fn loaded(&self, vast_properties: &VastProperties) {
        self.session.send_one_way_message("loaded", vec![vast_properties.to_wire()]);
    }

    /// Report playback start.
    ///
    /// `duration` is the creative length in seconds and
    /// `media_player_volume` the player volume in `[0, 1]`, 0 being muted.
    ///
    /// # Errors
    ///
    /// Returns a guard error if `duration` is not finite or the volume is
    /// outside `[0, 1]`; nothing is forwarded on failure.
    pub fn start(&self, duration: f64, media_player_volume: f64) -> Result<()> {
        guard::expect_finite("MediaEvents.start.duration", duration)?;
        guard::expect_between(
            "MediaEvents.start.mediaPlayerVolume",
            media_player_volume,
            0.0,
            1.0,
        )?;
        self.session
            .send_one_way_message("start", vec![json!(duration), json!(media_player_volume)]);
        Ok(())
    }

    /// Report a player volume change.
    ///
    /// # Errors
    ///
    /// Returns a guard error if the volume is outside `[0, 1]`; nothing is
    /// forwarded on failure.
    pub fn volume_change(&self, media_player_volume: f64) -> Result<()> {
        guard::expect_between(
            "MediaEvents.volumeChange.mediaPlayerVolume",
            media_player_volume,
            0.0,
            1.0,
        )?;
        self.session
            .send_one_way_message("volumeChange", vec![json!(media_player_volume)]);
        Ok(())
    }

    /// Report a change of the player's presentation state.
    pub fn player_state_change(&self, player_state: VideoPlayerState) {
        self.session
            .send_one_way_message("playerStateChange", vec![json!(player_state)]);
    }

    /// Report a user interaction with the ad.
    pub fn ad_user_interaction(&self, interaction_type: InteractionType) {
        self.session
            .send_one_way_message("adUserInteraction", vec![json!(interaction_type)]);
    }

    /// Report that playback reached 25% of the creative.
    pub fn first_quartile(&self) { self.forward("firstQuartile"); }

    /// Report that playback reached 50% of the creative.
    pub fn midpoint(&self) { self.forward("midpoint"); }

    /// Report that playback reached 75% of the creative.
    pub fn third_quartile(&self) { self.forward("thirdQuartile"); }

    /// Report that playback reached the end of the creative.
    pub fn complete(&self) { self.forward("complete"); }

    /// Report that playback paused.
    pub fn pause(&self) { self.forward("pause"); }

    /// Report that playback resumed from a pause.
    pub fn resume(&self) { self.forward("resume"); }

    /// Report that playback stalled on an empty buffer.
    pub fn buffer_start(&self) { self.forward("bufferStart"); }

    /// Report that playback recovered from a buffer stall.
    pub fn buffer_finish(&self) { self.forward("bufferFinish"); }

    /// Report that the user skipped the creative.
    pub fn skipped(&self) { self.forward("skipped"); }

    fn forward(&self, method: &'static str) {
        self.session.send_one_way_message(method, Vec::new());
    }
}
