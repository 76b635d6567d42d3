//! rewardscope core: bucketing, metric recording operations, and the
//! conversion monitor.
//!
//! This crate owns the recording logic and the seams to the host application
//! (histogram sink, preference store, clock). It intentionally carries no
//! runtime dependencies so it can be embedded in any host context.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Telemetry is best-effort; nothing in this crate may take the host down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bucket;
pub mod conversion;
pub mod error;
pub mod metrics;
pub mod prefs;
pub mod sink;

/// Shared result type.
pub use error::{Result, RewardscopeError};
