//! Session state and fire-and-forget delivery behaviour.

use admeasure::MeasureError;
use admeasure_testing::{SessionHarness, harness};
use rstest::rstest;

#[rstest]
fn session_ids_are_unique() {
    let first = SessionHarness::with_capacity(1);
    let second = SessionHarness::with_capacity(1);

    assert_ne!(first.session.id(), second.session.id());
}

#[rstest]
fn session_id_display_includes_the_raw_value(harness: SessionHarness) {
    let id = harness.session.id();

    assert_eq!(id.to_string(), format!("SessionId({})", id.as_u64()));
}

#[rstest]
fn start_and_finish_toggle_running(harness: SessionHarness) {
    assert!(!harness.session.is_running());
    assert_eq!(
        harness.session.assert_session_running(),
        Err(MeasureError::SessionNotRunning)
    );

    harness.session.start();
    assert!(harness.session.is_running());
    assert_eq!(harness.session.assert_session_running(), Ok(()));

    harness.session.finish();
    assert!(!harness.session.is_running());
}

#[rstest]
#[tokio::test]
async fn send_after_bridge_closes_is_absorbed(harness: SessionHarness) {
    let SessionHarness { session, mut queue } = harness;
    queue.close();

    // Fire-and-forget: the closed queue is logged, never surfaced.
    session.send_one_way_message("pause", Vec::new());

    assert!(queue.recv().await.is_none());
}
