//! Ad lifecycle events.

use std::sync::Arc;

use crate::{error::Result, session::AdSession};

/// Facade reporting ad lifecycle milestones to the verification host.
pub struct AdEvents {
    session: Arc<AdSession>,
}

impl AdEvents {
    /// Register an ad-events handler with `session`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::HandlerAlreadyRegistered`](crate::MeasureError::HandlerAlreadyRegistered)
    /// if the session already has an ad events handler.
    pub fn new(session: Arc<AdSession>) -> Result<Self> {
        session.register_ad_events()?;
        Ok(Self { session })
    }

    /// Report that the ad impression has occurred.
    ///
    /// Marks the impression on the session, then forwards the event.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::SessionNotRunning`](crate::MeasureError::SessionNotRunning)
    /// if the session has not started; nothing is forwarded on failure.
    pub fn impression_occurred(&self) -> Result<()> {
        self.session.assert_session_running()?;
        self.session.impression_occurred();
        self.session.send_one_way_message("impressionOccurred", Vec::new());
        Ok(())
    }
}
