//! Rewards metric recording operations.
//!
//! Each operation is a fire-and-forget write into a named histogram. Samples
//! are bucketed or enumerated before emission so no raw counts leave the
//! process.

use crate::bucket::SENTINEL_SAMPLE;
use crate::prefs::{keys, PrefStore};
use crate::sink::{record_bucketed, HistogramSink};

pub const ENABLED_SOURCE_HISTOGRAM: &str = "Rewards.EnabledSource";
pub const TOOLBAR_BUTTON_TRIGGER_HISTOGRAM: &str = "Rewards.ToolbarButtonTrigger";
pub const TIPS_SENT_HISTOGRAM: &str = "Rewards.TipsSent";
pub const AUTO_CONTRIBUTE_STATE_HISTOGRAM: &str = "Rewards.AutoContributionsState";
pub const AD_TYPES_ENABLED_HISTOGRAM: &str = "Rewards.AdTypesEnabled";
pub const MOBILE_CONVERSION_HISTOGRAM: &str = "Rewards.MobileConversion";
pub const MOBILE_PANEL_COUNT_HISTOGRAM: &str = "Rewards.MobilePanelCount";

pub const TIPS_SENT_BUCKETS: [u64; 3] = [0, 1, 3];
pub const MOBILE_PANEL_COUNT_BUCKETS: [u64; 3] = [5, 10, 50];

/// Which ad surfaces are enabled. Values are stable histogram samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AdTypesEnabled {
    None = 0,
    Ntp = 1,
    Notification = 2,
    All = 3,
}

impl AdTypesEnabled {
    pub const COUNT: i32 = 4;
}

/// Record whether auto-contribution is enabled (2-bucket linear).
pub fn record_auto_contribute_state(sink: &dyn HistogramSink, enabled: bool) {
    sink.record_exact_linear(AUTO_CONTRIBUTE_STATE_HISTOGRAM, enabled as i32, 2);
}

/// Record the number of tips sent, bucketed over `{0, 1, 3}`.
pub fn record_tips_sent(sink: &dyn HistogramSink, tip_count: u64) {
    record_bucketed(sink, TIPS_SENT_HISTOGRAM, &TIPS_SENT_BUCKETS, tip_count);
}

/// Mark all wallet-dependent metrics as excluded: no wallet was created.
pub fn record_no_wallet_created(sink: &dyn HistogramSink) {
    sink.record_exact_linear(TIPS_SENT_HISTOGRAM, SENTINEL_SAMPLE, 3);
    sink.record_exact_linear(AUTO_CONTRIBUTE_STATE_HISTOGRAM, SENTINEL_SAMPLE, 2);
}

/// Classify and record which ad types are enabled.
///
/// When rewards is disabled the sentinel is emitted instead of a
/// classification; the four outcomes below are mutually exclusive.
pub fn record_ad_types_enabled(sink: &dyn HistogramSink, prefs: &dyn PrefStore) {
    if !prefs.bool_pref(keys::REWARDS_ENABLED) {
        sink.record_exact_linear(AD_TYPES_ENABLED_HISTOGRAM, SENTINEL_SAMPLE, AdTypesEnabled::COUNT);
        return;
    }
    let ntp = prefs.bool_pref(keys::NTP_SPONSORED_IMAGES);
    let notification = prefs.bool_pref(keys::NOTIFICATION_ADS);
    let answer = match (ntp, notification) {
        (true, true) => AdTypesEnabled::All,
        (true, false) => AdTypesEnabled::Ntp,
        (false, true) => AdTypesEnabled::Notification,
        (false, false) => AdTypesEnabled::None,
    };
    sink.record_enumeration(AD_TYPES_ENABLED_HISTOGRAM, answer as i32, AdTypesEnabled::COUNT);
}
