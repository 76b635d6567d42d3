//! Platform recorder strategies for panel trigger conversion.
//!
//! The desktop and mobile builds report conversions differently; both live
//! behind `PanelTriggerRecorder` and the choice is made at startup from
//! config rather than by compile-time branching.

pub mod desktop;
pub mod mobile;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use rewardscope_core::conversion::PanelTrigger;
use rewardscope_core::prefs::PrefStore;
use rewardscope_core::sink::HistogramSink;

use crate::config::schema::{Platform, TelemetrySection};

/// Fire-and-forget conversion reporting, one implementation per platform.
#[async_trait]
pub trait PanelTriggerRecorder: Send + Sync {
    /// The user opened the rewards panel.
    async fn record_panel_trigger(&self, trigger: PanelTrigger);
    /// The user enabled rewards.
    async fn record_rewards_enable(&self);
}

/// Build the recorder strategy selected by config.
///
/// The mobile strategy spawns its reporting loop, so this must run inside a
/// tokio runtime.
pub fn build_recorder(
    telemetry: &TelemetrySection,
    sink: Arc<dyn HistogramSink>,
    prefs: Arc<dyn PrefStore>,
) -> Arc<dyn PanelTriggerRecorder> {
    let window = Duration::from_secs(telemetry.conversion_window_secs);
    match telemetry.platform {
        Platform::Desktop => Arc::new(desktop::DesktopPanelRecorder::new(sink, window)),
        Platform::Mobile => Arc::new(mobile::MobilePanelRecorder::start(
            sink,
            prefs,
            window,
            Duration::from_secs(telemetry.report_interval_secs),
        )),
    }
}
