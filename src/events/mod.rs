//! Typed event facades registered against an [`AdSession`](crate::AdSession).
//!
//! Each facade claims its handler slot at construction and forwards
//! validated lifecycle events as one-way messages. Forwarding is the entire
//! side effect: no acknowledgment, no retry, no return value.

mod ad;
mod media;

pub use ad::AdEvents;
pub use media::MediaEvents;
