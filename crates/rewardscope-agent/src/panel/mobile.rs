//! Mobile strategy: deferred conversion timer plus a periodic panel-count
//! report.
//!
//! Instead of correlating timestamps, the mobile build arms a one-shot timer
//! on each trigger while rewards is still disabled. Enabling before the timer
//! fires reports the conversion immediately and cancels the timer; otherwise
//! the timer fires and reports "not converted". A separate loop reports the
//! weekly panel-open count once per interval for the lifetime of the
//! recorder. The timer is always stopped before being re-armed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use rewardscope_core::conversion::PanelTrigger;
use rewardscope_core::metrics::{
    MOBILE_CONVERSION_HISTOGRAM, MOBILE_PANEL_COUNT_BUCKETS, MOBILE_PANEL_COUNT_HISTOGRAM,
};
use rewardscope_core::prefs::{keys, PrefStore};
use rewardscope_core::sink::{record_bucketed, HistogramSink};

use super::PanelTriggerRecorder;

pub struct MobilePanelRecorder {
    sink: Arc<dyn HistogramSink>,
    prefs: Arc<dyn PrefStore>,
    conversion_window: Duration,
    trigger_timer: Mutex<Option<JoinHandle<()>>>,
    report_loop: JoinHandle<()>,
}

impl MobilePanelRecorder {
    /// Spawn the periodic report loop; the first report happens immediately.
    pub fn start(
        sink: Arc<dyn HistogramSink>,
        prefs: Arc<dyn PrefStore>,
        conversion_window: Duration,
        report_interval: Duration,
    ) -> Self {
        let report_loop = tokio::spawn({
            let sink = Arc::clone(&sink);
            let prefs = Arc::clone(&prefs);
            async move {
                loop {
                    report_panel_trigger_count(sink.as_ref(), prefs.as_ref());
                    tokio::time::sleep(report_interval).await;
                }
            }
        });
        tracing::debug!(?report_interval, "mobile panel recorder started");
        Self {
            sink,
            prefs,
            conversion_window,
            trigger_timer: Mutex::new(None),
            report_loop,
        }
    }

    fn record_conversion(&self) {
        let converted = self.prefs.bool_pref(keys::REWARDS_ENABLED);
        self.sink
            .record_boolean(MOBILE_CONVERSION_HISTOGRAM, converted);
    }
}

/// Sum the weekly panel-open counter and report it bucketed. A zero sum is
/// skipped entirely.
fn report_panel_trigger_count(sink: &dyn HistogramSink, prefs: &dyn PrefStore) {
    let total = prefs.weekly_counter_sum(keys::PANEL_TRIGGER_COUNT);
    if total == 0 {
        return;
    }
    record_bucketed(
        sink,
        MOBILE_PANEL_COUNT_HISTOGRAM,
        &MOBILE_PANEL_COUNT_BUCKETS,
        total,
    );
}

#[async_trait]
impl PanelTriggerRecorder for MobilePanelRecorder {
    async fn record_panel_trigger(&self, _trigger: PanelTrigger) {
        if self.prefs.bool_pref(keys::REWARDS_ENABLED) {
            self.prefs.add_counter_delta(keys::PANEL_TRIGGER_COUNT, 1);
            report_panel_trigger_count(self.sink.as_ref(), self.prefs.as_ref());
            return;
        }

        // Not yet enabled: (re)arm the conversion timer.
        let mut timer = self.trigger_timer.lock().await;
        if let Some(handle) = timer.take() {
            handle.abort();
        }
        let sink = Arc::clone(&self.sink);
        let prefs = Arc::clone(&self.prefs);
        let window = self.conversion_window;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let converted = prefs.bool_pref(keys::REWARDS_ENABLED);
            sink.record_boolean(MOBILE_CONVERSION_HISTOGRAM, converted);
        }));
    }

    async fn record_rewards_enable(&self) {
        if let Some(handle) = self.trigger_timer.lock().await.take() {
            handle.abort();
        }
        self.record_conversion();
    }
}

impl Drop for MobilePanelRecorder {
    fn drop(&mut self) {
        self.report_loop.abort();
        if let Some(handle) = self.trigger_timer.get_mut().take() {
            handle.abort();
        }
    }
}
