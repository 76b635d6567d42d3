//! Desktop conversion monitor.
//!
//! Correlates a rewards panel trigger with a later enable action. The pending
//! trigger is an explicit value type checked for expiry at the point of use;
//! there is no proactive timeout. A stale trigger is only discarded by the
//! next enable call, and every enable call that finds a pending trigger
//! clears it, fresh or stale.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::bucket::SENTINEL_SAMPLE;
use crate::metrics::{ENABLED_SOURCE_HISTOGRAM, TOOLBAR_BUTTON_TRIGGER_HISTOGRAM};
use crate::sink::HistogramSink;

/// Maximum gap between a panel trigger and the enable action for the enable
/// to be attributed to that trigger.
pub const CONVERSION_WINDOW: Duration = Duration::from_secs(60);

/// Entry point through which the user opened the rewards panel.
/// Values are stable histogram samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PanelTrigger {
    InlineTip = 0,
    ToolbarButton = 1,
    NewTabPage = 2,
}

impl PanelTrigger {
    pub const COUNT: i32 = 3;
}

/// Time source seam so correlation is testable without real waiting.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A trigger waiting to be matched with an enable action.
///
/// Kind and timestamp are always set together; absence of both is modelled
/// by `Option<PendingTrigger>`.
#[derive(Debug, Clone, Copy)]
pub struct PendingTrigger {
    pub trigger: PanelTrigger,
    pub at: Instant,
}

impl PendingTrigger {
    /// Whether the elapsed time since the trigger is within `window`.
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.at) <= window
    }
}

/// Trigger/enable correlator for the desktop build.
///
/// Single-threaded by contract: all calls happen on the host UI sequence.
pub struct DesktopConversionMonitor {
    sink: Arc<dyn HistogramSink>,
    clock: Arc<dyn Clock>,
    window: Duration,
    pending: Option<PendingTrigger>,
}

impl DesktopConversionMonitor {
    pub fn new(sink: Arc<dyn HistogramSink>, clock: Arc<dyn Clock>) -> Self {
        Self::with_window(sink, clock, CONVERSION_WINDOW)
    }

    pub fn with_window(
        sink: Arc<dyn HistogramSink>,
        clock: Arc<dyn Clock>,
        window: Duration,
    ) -> Self {
        Self {
            sink,
            clock,
            window,
            pending: None,
        }
    }

    /// Record a panel opening, replacing any previously pending trigger.
    ///
    /// A toolbar-button trigger additionally bumps its own histogram right
    /// away, independent of any later conversion.
    pub fn record_panel_trigger(&mut self, trigger: PanelTrigger) {
        if trigger == PanelTrigger::ToolbarButton {
            self.sink
                .record_exact_linear(TOOLBAR_BUTTON_TRIGGER_HISTOGRAM, 1, 2);
        }
        self.pending = Some(PendingTrigger {
            trigger,
            at: self.clock.now(),
        });
    }

    /// Record that rewards was enabled, attributing it to the pending trigger
    /// if one is fresh.
    pub fn record_rewards_enable(&mut self) {
        // Suspend the toolbar trigger metric once the enabled source is
        // known, so the two histograms do not report overlapping data.
        self.sink
            .record_exact_linear(TOOLBAR_BUTTON_TRIGGER_HISTOGRAM, SENTINEL_SAMPLE, 2);

        let Some(pending) = self.pending.take() else {
            return;
        };
        if !pending.is_fresh(self.clock.now(), self.window) {
            tracing::debug!(trigger = ?pending.trigger, "stale panel trigger dropped");
            return;
        }
        self.sink.record_enumeration(
            ENABLED_SOURCE_HISTOGRAM,
            pending.trigger as i32,
            PanelTrigger::COUNT,
        );
    }

    /// Currently pending trigger, if any.
    pub fn pending(&self) -> Option<&PendingTrigger> {
        self.pending.as_ref()
    }
}
