//! Histogram sink seam.
//!
//! Metrics are written by fixed string name into an injected sink so the
//! recording logic can be tested without a real collection backend. All calls
//! are fire-and-forget: telemetry is best-effort and never fails.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::bucket;

/// Write-only histogram backend.
pub trait HistogramSink: Send + Sync {
    /// Record `sample` into an exact-linear histogram of `exclusive_max` buckets.
    fn record_exact_linear(&self, name: &str, sample: i32, exclusive_max: i32);
    /// Record an enumeration value.
    fn record_enumeration(&self, name: &str, sample: i32, exclusive_max: i32);
    /// Record a boolean.
    fn record_boolean(&self, name: &str, value: bool);
}

/// Record a raw value into `name` as the index of its threshold bucket.
pub fn record_bucketed(sink: &dyn HistogramSink, name: &str, thresholds: &[u64], value: u64) {
    let index = bucket::bucket_index(thresholds, value);
    sink.record_exact_linear(name, index as i32, thresholds.len() as i32 + 1);
}

/// One recorded histogram event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkEvent {
    ExactLinear {
        name: String,
        sample: i32,
        exclusive_max: i32,
    },
    Enumeration {
        name: String,
        sample: i32,
        exclusive_max: i32,
    },
    Boolean {
        name: String,
        value: bool,
    },
}

impl SinkEvent {
    /// Histogram name regardless of event kind.
    pub fn name(&self) -> &str {
        match self {
            SinkEvent::ExactLinear { name, .. } => name,
            SinkEvent::Enumeration { name, .. } => name,
            SinkEvent::Boolean { name, .. } => name,
        }
    }
}

/// In-memory sink recording every event in emission order.
///
/// Used by tests and by hosts that forward events to their own pipeline.
#[derive(Default)]
pub struct CaptureSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().clone()
    }

    /// Events recorded for one histogram name.
    pub fn events_for(&self, name: &str) -> Vec<SinkEvent> {
        self.lock().iter().filter(|e| e.name() == name).cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SinkEvent>> {
        // Recording never panics while holding the lock; recover anyway.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, event: SinkEvent) {
        self.lock().push(event);
    }
}

impl HistogramSink for CaptureSink {
    fn record_exact_linear(&self, name: &str, sample: i32, exclusive_max: i32) {
        self.push(SinkEvent::ExactLinear {
            name: name.to_string(),
            sample,
            exclusive_max,
        });
    }

    fn record_enumeration(&self, name: &str, sample: i32, exclusive_max: i32) {
        self.push(SinkEvent::Enumeration {
            name: name.to_string(),
            sample,
            exclusive_max,
        });
    }

    fn record_boolean(&self, name: &str, value: bool) {
        self.push(SinkEvent::Boolean {
            name: name.to_string(),
            value,
        });
    }
}
