#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use rewardscope_agent::obs::metrics::RegistrySink;
use rewardscope_agent::panel::mobile::MobilePanelRecorder;
use rewardscope_agent::panel::PanelTriggerRecorder;
use rewardscope_core::prefs::PrefStore;
use rewardscope_core::conversion::PanelTrigger;
use rewardscope_core::metrics::{MOBILE_CONVERSION_HISTOGRAM, MOBILE_PANEL_COUNT_HISTOGRAM};
use rewardscope_core::prefs::{keys, MemoryPrefStore};

const WINDOW: Duration = Duration::from_secs(60);
const REPORT_INTERVAL: Duration = Duration::from_secs(86400);

struct Fixture {
    sink: Arc<RegistrySink>,
    prefs: Arc<MemoryPrefStore>,
    recorder: MobilePanelRecorder,
}

async fn fixture() -> Fixture {
    let sink = Arc::new(RegistrySink::new());
    let prefs = Arc::new(MemoryPrefStore::new());
    let recorder =
        MobilePanelRecorder::start(sink.clone(), prefs.clone(), WINDOW, REPORT_INTERVAL);
    // Let the initial periodic report run.
    tokio::task::yield_now().await;
    Fixture {
        sink,
        prefs,
        recorder,
    }
}

#[tokio::test(start_paused = true)]
async fn periodic_report_skips_zero_sum() {
    let f = fixture().await;
    assert_eq!(f.sink.total_count(MOBILE_PANEL_COUNT_HISTOGRAM), 0);
    drop(f.recorder);
}

#[tokio::test(start_paused = true)]
async fn periodic_report_buckets_nonzero_sum() {
    let sink = Arc::new(RegistrySink::new());
    let prefs = Arc::new(MemoryPrefStore::new());
    prefs.add_counter_delta(keys::PANEL_TRIGGER_COUNT, 12);

    let recorder =
        MobilePanelRecorder::start(sink.clone(), prefs.clone(), WINDOW, REPORT_INTERVAL);
    tokio::task::yield_now().await;

    // 12 falls in the {5, 10, 50} bucket with index 1.
    assert_eq!(sink.sample_count(MOBILE_PANEL_COUNT_HISTOGRAM, 1), 1);
    drop(recorder);
}

#[tokio::test(start_paused = true)]
async fn periodic_report_repeats_each_interval() {
    let sink = Arc::new(RegistrySink::new());
    let prefs = Arc::new(MemoryPrefStore::new());
    prefs.add_counter_delta(keys::PANEL_TRIGGER_COUNT, 3);

    let recorder =
        MobilePanelRecorder::start(sink.clone(), prefs.clone(), WINDOW, REPORT_INTERVAL);
    tokio::task::yield_now().await;
    assert_eq!(sink.total_count(MOBILE_PANEL_COUNT_HISTOGRAM), 1);

    tokio::time::sleep(REPORT_INTERVAL + Duration::from_secs(1)).await;
    assert_eq!(sink.total_count(MOBILE_PANEL_COUNT_HISTOGRAM), 2);
    drop(recorder);
}

#[tokio::test(start_paused = true)]
async fn trigger_while_enabled_bumps_counter_and_reports() {
    let f = fixture().await;
    f.prefs.set_bool(keys::REWARDS_ENABLED, true);

    f.recorder.record_panel_trigger(PanelTrigger::ToolbarButton).await;

    assert_eq!(f.prefs.weekly_counter_sum(keys::PANEL_TRIGGER_COUNT), 1);
    // 1 falls below the first {5, 10, 50} threshold: bucket index 0.
    assert_eq!(f.sink.sample_count(MOBILE_PANEL_COUNT_HISTOGRAM, 0), 1);
    drop(f.recorder);
}

#[tokio::test(start_paused = true)]
async fn expired_trigger_reports_not_converted() {
    let f = fixture().await;

    f.recorder.record_panel_trigger(PanelTrigger::ToolbarButton).await;
    tokio::time::sleep(WINDOW + Duration::from_secs(1)).await;

    // Timer fired with rewards still disabled: boolean false.
    assert_eq!(f.sink.sample_count(MOBILE_CONVERSION_HISTOGRAM, 0), 1);
    assert_eq!(f.sink.sample_count(MOBILE_CONVERSION_HISTOGRAM, 1), 0);
    drop(f.recorder);
}

#[tokio::test(start_paused = true)]
async fn enable_before_expiry_cancels_timer_and_reports_converted() {
    let f = fixture().await;

    f.recorder.record_panel_trigger(PanelTrigger::InlineTip).await;
    tokio::time::sleep(Duration::from_secs(10)).await;

    f.prefs.set_bool(keys::REWARDS_ENABLED, true);
    f.recorder.record_rewards_enable().await;
    assert_eq!(f.sink.sample_count(MOBILE_CONVERSION_HISTOGRAM, 1), 1);

    // Well past the window: the cancelled timer must not fire a second report.
    tokio::time::sleep(WINDOW * 3).await;
    assert_eq!(f.sink.total_count(MOBILE_CONVERSION_HISTOGRAM), 1);
    drop(f.recorder);
}

#[tokio::test(start_paused = true)]
async fn rearmed_timer_reports_once() {
    let f = fixture().await;

    f.recorder.record_panel_trigger(PanelTrigger::InlineTip).await;
    tokio::time::sleep(Duration::from_secs(30)).await;
    // Second trigger replaces the first timer.
    f.recorder.record_panel_trigger(PanelTrigger::NewTabPage).await;
    tokio::time::sleep(WINDOW + Duration::from_secs(1)).await;

    assert_eq!(f.sink.total_count(MOBILE_CONVERSION_HISTOGRAM), 1);
    drop(f.recorder);
}
