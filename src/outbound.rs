//! Bounded queue carrying one-way messages to the host bridge.
//!
//! Event facades produce through a cloneable [`MessageSink`] so reporting
//! never blocks playback; the bridge drains the paired [`OutboundQueue`].
//! Queued messages are delivered in FIFO order.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::OneWayMessage;

/// Behaviour when the outbound queue is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Return an error to the caller if the queue is full.
    ReturnErrorIfFull,
    /// Silently drop the message.
    DropIfFull,
    /// Drop the message but emit a log warning.
    WarnAndDropIfFull,
}

/// Errors that can occur when queueing a message.
#[derive(Debug, PartialEq, Eq)]
pub enum SinkError {
    /// The queue was at capacity and the policy was `ReturnErrorIfFull`.
    QueueFull,
    /// The receiving end of the queue has been dropped.
    Closed,
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QueueFull => f.write_str("outbound queue full"),
            Self::Closed => f.write_str("outbound queue closed"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Shared state for [`MessageSink`] clones.
struct MessageSinkInner {
    tx: mpsc::Sender<OneWayMessage>,
}

/// Cloneable handle used by producers to queue messages for the bridge.
#[derive(Clone)]
pub struct MessageSink(Arc<MessageSinkInner>);

impl MessageSink {
    /// Queue a message, awaiting capacity if the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Closed`] if the bridge has dropped its queue.
    pub async fn send(&self, message: OneWayMessage) -> Result<(), SinkError> {
        let method = message.method();
        self.0.tx.send(message).await.map_err(|_| SinkError::Closed)?;
        debug!(method, "message queued");
        Ok(())
    }

    /// Attempt to queue a message without suspending.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::QueueFull`] if the queue is full and the policy
    /// is [`OverflowPolicy::ReturnErrorIfFull`], and [`SinkError::Closed`]
    /// if the bridge has dropped its queue. Under the drop policies a full
    /// queue loses the new message and the call reports success.
    ///
    /// # Examples
    ///
    /// ```
    /// use admeasure::{OneWayMessage, OutboundQueue, OverflowPolicy, SinkError};
    ///
    /// let (_queue, sink) = OutboundQueue::bounded(1);
    /// sink.try_send(OneWayMessage::new("pause", vec![]), OverflowPolicy::ReturnErrorIfFull)
    ///     .expect("first message fits");
    /// let err = sink
    ///     .try_send(OneWayMessage::new("resume", vec![]), OverflowPolicy::ReturnErrorIfFull)
    ///     .unwrap_err();
    /// assert_eq!(err, SinkError::QueueFull);
    /// ```
    pub fn try_send(
        &self,
        message: OneWayMessage,
        policy: OverflowPolicy,
    ) -> Result<(), SinkError> {
        let method = message.method();
        match self.0.tx.try_send(message) {
            Ok(()) => {
                debug!(method, "message queued");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(_)) => match policy {
                OverflowPolicy::ReturnErrorIfFull => Err(SinkError::QueueFull),
                OverflowPolicy::DropIfFull | OverflowPolicy::WarnAndDropIfFull => {
                    if matches!(policy, OverflowPolicy::WarnAndDropIfFull) {
                        warn!(method, ?policy, "outbound queue full; message dropped");
                    }
                    #[cfg(feature = "metrics")]
                    crate::metrics::inc_dropped();
                    Ok(())
                }
            },
            Err(mpsc::error::TrySendError::Closed(_)) => Err(SinkError::Closed),
        }
    }
}

/// Receiver end of the outbound queue, held by the host bridge.
pub struct OutboundQueue {
    rx: mpsc::Receiver<OneWayMessage>,
}

impl OutboundQueue {
    /// Create a bounded queue and the paired producer sink.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-capacity queue could never
    /// accept a message.
    #[must_use]
    pub fn bounded(capacity: usize) -> (Self, MessageSink) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { rx }, MessageSink(Arc::new(MessageSinkInner { tx })))
    }

    /// Receive the next queued message in FIFO order.
    ///
    /// Returns `None` once every sink has been dropped and the queue is
    /// drained.
    pub async fn recv(&mut self) -> Option<OneWayMessage> { self.rx.recv().await }

    /// Close the queue so further sends fail with [`SinkError::Closed`].
    ///
    /// Messages already queued remain receivable; this only refuses new
    /// producers.
    pub fn close(&mut self) { self.rx.close(); }
}
