//! Helper utilities for driving `admeasure` sessions in tests.

use std::sync::Arc;

use admeasure::{AdSession, OneWayMessage, OutboundQueue};
use rstest::fixture;

/// Boxed error result used by integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const DEFAULT_CAPACITY: usize = 16;

/// A session paired with the queue a host bridge would drain.
pub struct SessionHarness {
    /// The session under test, ready to share with event facades.
    pub session: Arc<AdSession>,
    /// Receiver side of the session's outbound queue.
    pub queue: OutboundQueue,
}

impl SessionHarness {
    /// Build a harness whose queue holds up to `capacity` messages.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (queue, sink) = OutboundQueue::bounded(capacity);
        Self {
            session: Arc::new(AdSession::new(sink)),
            queue,
        }
    }
}

/// Close `queue` to new sends and collect everything already queued.
pub async fn drain(mut queue: OutboundQueue) -> Vec<OneWayMessage> {
    queue.close();
    let mut messages = Vec::new();
    while let Some(message) = queue.recv().await {
        messages.push(message);
    }
    messages
}

/// Install a compact subscriber so failing tests include SDK tracing.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn harness() -> SessionHarness { SessionHarness::with_capacity(DEFAULT_CAPACITY) }
