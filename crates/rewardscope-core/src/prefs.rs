//! Preference store seam.
//!
//! The host application owns preference storage; recording code reads a small
//! fixed set of keys through this trait. The rolling 7-day window behind the
//! weekly counter is owned by the host store as well — `MemoryPrefStore`
//! stands in with a plain sum for tests and the demo binary.

use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed preference key names.
pub mod keys {
    /// Top-level rewards opt-in flag.
    pub const REWARDS_ENABLED: &str = "rewards.enabled";
    /// Sponsored images on the new tab page.
    pub const NTP_SPONSORED_IMAGES: &str = "rewards.ads.ntp_sponsored_images";
    /// Opt-in to notification ads.
    pub const NOTIFICATION_ADS: &str = "rewards.ads.notification_opt_in";
    /// Rolling weekly count of rewards panel openings (mobile only).
    pub const PANEL_TRIGGER_COUNT: &str = "rewards.panel_trigger_count";
}

/// Read-mostly view of the host preference service.
pub trait PrefStore: Send + Sync {
    /// Boolean preference; missing keys read as `false`.
    fn bool_pref(&self, key: &str) -> bool;
    /// Add to a rolling counter.
    fn add_counter_delta(&self, key: &str, delta: u64);
    /// Sum of a rolling counter over the trailing week.
    fn weekly_counter_sum(&self, key: &str) -> u64;
}

/// In-memory store for tests and embedding without a real pref service.
#[derive(Default)]
pub struct MemoryPrefStore {
    bools: Mutex<HashMap<String, bool>>,
    counters: Mutex<HashMap<String, u64>>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&self, key: &str, value: bool) {
        self.lock_bools().insert(key.to_string(), value);
    }

    fn lock_bools(&self) -> std::sync::MutexGuard<'_, HashMap<String, bool>> {
        self.bools.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_counters(&self) -> std::sync::MutexGuard<'_, HashMap<String, u64>> {
        self.counters.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PrefStore for MemoryPrefStore {
    fn bool_pref(&self, key: &str) -> bool {
        self.lock_bools().get(key).copied().unwrap_or(false)
    }

    fn add_counter_delta(&self, key: &str, delta: u64) {
        *self.lock_counters().entry(key.to_string()).or_insert(0) += delta;
    }

    fn weekly_counter_sum(&self, key: &str) -> u64 {
        self.lock_counters().get(key).copied().unwrap_or(0)
    }
}
