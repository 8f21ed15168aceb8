//! Tests for the ad events facade.

use std::sync::Arc;

use admeasure::{AdEvents, HandlerKind, MeasureError, MediaEvents};
use admeasure_testing::{SessionHarness, TestResult, drain, harness};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn impression_requires_a_running_session(harness: SessionHarness) -> TestResult {
    let ad = AdEvents::new(Arc::clone(&harness.session))?;

    assert_eq!(ad.impression_occurred(), Err(MeasureError::SessionNotRunning));
    assert!(!harness.session.has_impression_occurred());
    assert!(drain(harness.queue).await.is_empty(), "nothing may be forwarded");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn impression_is_relayed_once_running(harness: SessionHarness) -> TestResult {
    let ad = AdEvents::new(Arc::clone(&harness.session))?;
    harness.session.start();

    ad.impression_occurred()?;

    assert!(harness.session.has_impression_occurred());
    let messages = drain(harness.queue).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].method(), "impressionOccurred");
    assert!(messages[0].args().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn second_ad_events_registration_fails(harness: SessionHarness) -> TestResult {
    let _ad = AdEvents::new(Arc::clone(&harness.session))?;

    let Err(error) = AdEvents::new(Arc::clone(&harness.session)) else {
        panic!("ad events slot was already claimed");
    };
    assert_eq!(error, MeasureError::HandlerAlreadyRegistered(HandlerKind::Ad));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn media_and_ad_events_share_a_session(harness: SessionHarness) -> TestResult {
    let _media = MediaEvents::new(Arc::clone(&harness.session))?;
    let _ad = AdEvents::new(Arc::clone(&harness.session))?;
    Ok(())
}
