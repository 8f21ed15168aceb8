//! Tests for the registry of live sessions.

use std::sync::Arc;

use admeasure::{AdSession, OutboundQueue, SessionRegistry};

fn session() -> (Arc<AdSession>, OutboundQueue) {
    let (queue, sink) = OutboundQueue::bounded(1);
    (Arc::new(AdSession::new(sink)), queue)
}

#[test]
fn lookup_returns_live_sessions() {
    let registry = SessionRegistry::new();
    let (alive, _queue) = session();
    registry.insert(&alive);

    let found = registry.get(&alive.id()).expect("session is live");
    assert_eq!(found.id(), alive.id());
}

#[test]
fn dead_entries_are_removed_at_lookup() {
    let registry = SessionRegistry::new();
    let (dead, _queue) = session();
    let id = dead.id();
    registry.insert(&dead);
    drop(dead);

    assert!(registry.get(&id).is_none());
    assert!(registry.active_ids().is_empty());
}

#[test]
fn prune_retains_only_live_sessions() {
    let registry = SessionRegistry::new();
    let (alive, _queue_a) = session();
    let (dead, _queue_b) = session();
    registry.insert(&alive);
    registry.insert(&dead);
    drop(dead);

    registry.prune();

    assert_eq!(registry.active_ids(), vec![alive.id()]);
}

#[test]
fn remove_forgets_a_session() {
    let registry = SessionRegistry::new();
    let (alive, _queue) = session();
    registry.insert(&alive);

    registry.remove(&alive.id());

    assert!(registry.get(&alive.id()).is_none());
}
