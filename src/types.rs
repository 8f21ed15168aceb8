//! Closed enumerations shared across event facades.
//!
//! Each enum serializes to the lowercase or camelCase tag the verification
//! host understands; [`as_str`](VideoPosition::as_str) exposes the same tag
//! for callers building wire values by hand.

use serde::Serialize;

/// Position of the ad relative to the publisher content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPosition {
    /// Before the content starts.
    PreRoll,
    /// During a content break.
    MidRoll,
    /// After the content finishes.
    PostRoll,
}

impl VideoPosition {
    /// Wire tag for this position.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreRoll => "preroll",
            Self::MidRoll => "midroll",
            Self::PostRoll => "postroll",
        }
    }
}

/// Presentation state of the media player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlayerState {
    /// Player occupies a minimized dock.
    Minimized,
    /// Player collapsed below its anchored size.
    Collapsed,
    /// Player at its anchored inline size.
    Normal,
    /// Player expanded beyond its anchored size.
    Expanded,
    /// Player covers the whole screen.
    Fullscreen,
}

impl VideoPlayerState {
    /// Wire tag for this player state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimized => "minimized",
            Self::Collapsed => "collapsed",
            Self::Normal => "normal",
            Self::Expanded => "expanded",
            Self::Fullscreen => "fullscreen",
        }
    }
}

/// Kind of user interaction reported with `adUserInteraction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionType {
    /// The user clicked through the ad.
    Click,
    /// The user accepted an invitation to engage.
    InvitationAccepted,
}

impl InteractionType {
    /// Wire tag for this interaction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::InvitationAccepted => "invitationAccepted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tags_match_as_str() {
        for (value, tag) in [
            (serde_json::json!(VideoPosition::PreRoll), VideoPosition::PreRoll.as_str()),
            (serde_json::json!(VideoPosition::MidRoll), VideoPosition::MidRoll.as_str()),
            (serde_json::json!(VideoPosition::PostRoll), VideoPosition::PostRoll.as_str()),
            (
                serde_json::json!(VideoPlayerState::Fullscreen),
                VideoPlayerState::Fullscreen.as_str(),
            ),
            (
                serde_json::json!(InteractionType::InvitationAccepted),
                InteractionType::InvitationAccepted.as_str(),
            ),
        ] {
            assert_eq!(value, serde_json::Value::String(tag.to_owned()));
        }
    }

    #[test]
    fn player_state_tags_are_lowercase() {
        assert_eq!(VideoPlayerState::Minimized.as_str(), "minimized");
        assert_eq!(VideoPlayerState::Collapsed.as_str(), "collapsed");
        assert_eq!(VideoPlayerState::Normal.as_str(), "normal");
        assert_eq!(VideoPlayerState::Expanded.as_str(), "expanded");
    }
}
