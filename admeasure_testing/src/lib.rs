//! Utilities for exercising [`admeasure`] sessions in tests.
//!
//! These helpers pair a session with the outbound queue a host bridge would
//! drain and collect the queued one-way messages for easy assertions.
//!
//! ```rust
//! use admeasure_testing::SessionHarness;
//!
//! # async fn example() {
//! let harness = SessionHarness::with_capacity(4);
//! harness.session.send_one_way_message("pause", vec![]);
//! let messages = admeasure_testing::drain(harness.queue).await;
//! assert_eq!(messages[0].method(), "pause");
//! # }
//! ```

pub mod helpers;

pub use helpers::{SessionHarness, TestResult, drain, harness, init_tracing};
