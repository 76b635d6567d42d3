//! Desktop strategy: the synchronous conversion monitor behind the async
//! recorder seam.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use rewardscope_core::conversion::{Clock, DesktopConversionMonitor, PanelTrigger, SystemClock};
use rewardscope_core::sink::HistogramSink;

use super::PanelTriggerRecorder;

pub struct DesktopPanelRecorder {
    monitor: Mutex<DesktopConversionMonitor>,
}

impl DesktopPanelRecorder {
    pub fn new(sink: Arc<dyn HistogramSink>, window: Duration) -> Self {
        Self::with_clock(sink, Arc::new(SystemClock), window)
    }

    pub fn with_clock(
        sink: Arc<dyn HistogramSink>,
        clock: Arc<dyn Clock>,
        window: Duration,
    ) -> Self {
        Self {
            monitor: Mutex::new(DesktopConversionMonitor::with_window(sink, clock, window)),
        }
    }
}

#[async_trait]
impl PanelTriggerRecorder for DesktopPanelRecorder {
    async fn record_panel_trigger(&self, trigger: PanelTrigger) {
        self.monitor.lock().await.record_panel_trigger(trigger);
    }

    async fn record_rewards_enable(&self) {
        self.monitor.lock().await.record_rewards_enable();
    }
}
