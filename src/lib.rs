#![doc(html_root_url = "https://docs.rs/admeasure/latest")]
//! Public API for the `admeasure` library.
//!
//! This crate provides the session-client half of an ad-viewability
//! measurement SDK: typed event facades that validate playback lifecycle
//! arguments and forward them as one-way, fire-and-forget messages to the
//! bridge speaking to the host verification service.
//!
//! ```
//! use std::sync::Arc;
//!
//! use admeasure::{AdSession, MediaEvents, OutboundQueue, VastProperties, VideoPosition};
//!
//! # fn main() -> admeasure::Result<()> {
//! let (queue, sink) = OutboundQueue::bounded(16);
//! let session = Arc::new(AdSession::new(sink));
//! let media = MediaEvents::new(Arc::clone(&session))?;
//!
//! let vast = VastProperties::new(false, 0.0, true, VideoPosition::PreRoll)?;
//! media.loaded(&vast);
//! media.start(30.0, 1.0)?;
//! # drop(queue);
//! # Ok(())
//! # }
//! ```

pub mod error;
/// Result type alias re-exported for convenience when working with sessions
/// and event facades.
pub use error::{MeasureError, Result};
pub mod events;
pub mod guard;
pub mod message;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod outbound;
pub mod session;
pub mod types;
pub mod vast;

pub use events::{AdEvents, MediaEvents};
pub use guard::GuardError;
pub use message::OneWayMessage;
pub use outbound::{MessageSink, OutboundQueue, OverflowPolicy, SinkError};
pub use session::{AdSession, HandlerKind, SessionId, SessionRegistry};
pub use types::{InteractionType, VideoPlayerState, VideoPosition};
pub use vast::VastProperties;
