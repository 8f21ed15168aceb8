//! The one-way message unit exchanged with the host bridge.

use serde::Serialize;
use serde_json::Value;

/// A fire-and-forget method invocation addressed to the verification host.
///
/// The wire method name and positional arguments are the entire protocol
/// surface at this layer; framing and transport belong to the bridge that
/// drains the outbound queue.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OneWayMessage {
    method: &'static str,
    args: Vec<Value>,
}

impl OneWayMessage {
    /// Build a message for `method` with positional `args`.
    #[must_use]
    pub fn new(method: &'static str, args: Vec<Value>) -> Self { Self { method, args } }

    /// Wire name of the invoked method.
    #[must_use]
    pub fn method(&self) -> &'static str { self.method }

    /// Positional arguments, already rendered to their wire values.
    #[must_use]
    pub fn args(&self) -> &[Value] { &self.args }
}
