//! Ad sessions and the registry of live sessions.
//!
//! An [`AdSession`] represents one ad placement's connection to the host
//! verification service. It owns no transport: events become one-way
//! messages on the outbound queue, and the bridge draining that queue is a
//! separate component. [`SessionRegistry`] stores non-owning weak references
//! so such a bridge can reach live sessions without keeping finished ones
//! alive.

use std::sync::{
    Arc, Weak,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::MeasureError,
    message::OneWayMessage,
    outbound::{MessageSink, OverflowPolicy},
};

/// Identifier assigned to an ad session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Return the inner `u64` representation.
    #[must_use]
    pub fn as_u64(&self) -> u64 { self.0 }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

/// Kind of event handler registered with a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerKind {
    /// Media playback lifecycle handler.
    Media,
    /// Ad lifecycle handler.
    Ad,
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Media => f.write_str("media"),
            Self::Ad => f.write_str("ad"),
        }
    }
}

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// One ad placement's connection to the host verification service.
///
/// Each event facade kind may register exactly once. All state is atomic,
/// so a session can be shared freely across threads behind an [`Arc`].
pub struct AdSession {
    id: SessionId,
    sink: MessageSink,
    media_events_registered: AtomicBool,
    ad_events_registered: AtomicBool,
    running: AtomicBool,
    impression: AtomicBool,
}

/// Sessions report fire-and-forget; a full queue loses the event with a
/// warning rather than stalling playback.
const SEND_POLICY: OverflowPolicy = OverflowPolicy::WarnAndDropIfFull;

impl AdSession {
    /// Create a session forwarding through `sink`.
    #[must_use]
    pub fn new(sink: MessageSink) -> Self {
        // Relaxed suffices: ids only need to be unique, not ordered.
        let id = SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed));
        #[cfg(feature = "metrics")]
        crate::metrics::inc_sessions();
        Self {
            id,
            sink,
            media_events_registered: AtomicBool::new(false),
            ad_events_registered: AtomicBool::new(false),
            running: AtomicBool::new(false),
            impression: AtomicBool::new(false),
        }
    }

    /// Identifier of this session, unique within the process.
    #[must_use]
    pub fn id(&self) -> SessionId { self.id }

    /// Record that the host reported the session as started.
    pub fn start(&self) { self.running.store(true, Ordering::Release); }

    /// Record that the host reported the session as finished.
    pub fn finish(&self) { self.running.store(false, Ordering::Release); }

    /// Whether the session is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool { self.running.load(Ordering::Acquire) }

    /// Fail unless [`start`](Self::start) has been called.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::SessionNotRunning`] while the session is not
    /// running.
    pub fn assert_session_running(&self) -> Result<(), MeasureError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(MeasureError::SessionNotRunning)
        }
    }

    /// Record that the ad impression has occurred.
    pub fn impression_occurred(&self) { self.impression.store(true, Ordering::Release); }

    /// Whether an impression has been recorded on this session.
    #[must_use]
    pub fn has_impression_occurred(&self) -> bool { self.impression.load(Ordering::Acquire) }

    /// Claim the media-events handler slot.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::HandlerAlreadyRegistered`] if a media events
    /// handler is already registered.
    pub fn register_media_events(&self) -> Result<(), MeasureError> {
        Self::register(&self.media_events_registered, HandlerKind::Media)
    }

    /// Claim the ad-events handler slot.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::HandlerAlreadyRegistered`] if an ad events
    /// handler is already registered.
    pub fn register_ad_events(&self) -> Result<(), MeasureError> {
        Self::register(&self.ad_events_registered, HandlerKind::Ad)
    }

    fn register(slot: &AtomicBool, kind: HandlerKind) -> Result<(), MeasureError> {
        if slot
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Ok(())
        } else {
            Err(MeasureError::HandlerAlreadyRegistered(kind))
        }
    }

    /// Forward a one-way message to the host bridge.
    ///
    /// Fire-and-forget: overflow is handled by the session's drop policy and
    /// a closed queue is logged, so event reporting never fails on the
    /// sending side.
    pub fn send_one_way_message(&self, method: &'static str, args: Vec<Value>) {
        match self.sink.try_send(OneWayMessage::new(method, args), SEND_POLICY) {
            Ok(()) => {
                #[cfg(feature = "metrics")]
                crate::metrics::inc_forwarded(method);
                debug!(session = %self.id, method, "one-way message forwarded");
            }
            Err(error) => {
                debug!(session = %self.id, method, %error, "one-way message not delivered");
            }
        }
    }
}

#[cfg(feature = "metrics")]
impl Drop for AdSession {
    fn drop(&mut self) { crate::metrics::dec_sessions(); }
}

/// Concurrent registry of live sessions keyed by [`SessionId`].
///
/// Entries are weak, so dropping the last `Arc<AdSession>` is enough to
/// retire a session; dead entries can be pruned opportunistically or lazily
/// at lookup time.
#[derive(Default)]
pub struct SessionRegistry(DashMap<SessionId, Weak<AdSession>>);

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Retrieve the session for `id` if it is still alive.
    ///
    /// A dead entry found during lookup is removed on the spot.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<Arc<AdSession>> {
        let guard = self.0.get(id);
        let session = guard.as_ref().and_then(|weak| weak.upgrade());
        drop(guard);
        if session.is_none() {
            self.0.remove_if(id, |_, weak| weak.strong_count() == 0);
        }
        session
    }

    /// Insert a newly created session.
    pub fn insert(&self, session: &Arc<AdSession>) {
        self.0.insert(session.id(), Arc::downgrade(session));
    }

    /// Remove a session, typically once it has finished.
    pub fn remove(&self, id: &SessionId) { self.0.remove(id); }

    /// Remove all stale weak references.
    ///
    /// `DashMap::retain` takes per-bucket write locks, so other operations
    /// may contend briefly while the registry is pruned.
    pub fn prune(&self) { self.0.retain(|_, weak| weak.strong_count() > 0); }

    /// Prune stale entries, then return the ids of the live sessions.
    #[must_use]
    pub fn active_ids(&self) -> Vec<SessionId> {
        let mut ids = Vec::with_capacity(self.0.len());
        self.0.retain(|id, weak| {
            if weak.strong_count() > 0 {
                ids.push(*id);
                true
            } else {
                false
            }
        });
        ids
    }
}
