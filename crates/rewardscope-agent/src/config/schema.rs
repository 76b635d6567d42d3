use serde::Deserialize;

use rewardscope_core::error::{Result, RewardscopeError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,

    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RewardscopeError::UnsupportedVersion);
        }
        self.telemetry.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1:9090".into()
}

/// Which recorder strategy to run. Chosen at startup, never at compile time,
/// so both strategies stay testable on any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Desktop,
    Mobile,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    #[serde(default = "default_platform")]
    pub platform: Platform,

    #[serde(default = "default_conversion_window_secs")]
    pub conversion_window_secs: u64,

    #[serde(default = "default_report_interval_secs")]
    pub report_interval_secs: u64,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            conversion_window_secs: default_conversion_window_secs(),
            report_interval_secs: default_report_interval_secs(),
        }
    }
}

impl TelemetrySection {
    pub fn validate(&self) -> Result<()> {
        if !(10..=600).contains(&self.conversion_window_secs) {
            return Err(RewardscopeError::InvalidConfig(
                "telemetry.conversion_window_secs must be between 10 and 600".into(),
            ));
        }
        if !(60..=604800).contains(&self.report_interval_secs) {
            return Err(RewardscopeError::InvalidConfig(
                "telemetry.report_interval_secs must be between 60 and 604800".into(),
            ));
        }
        Ok(())
    }
}

fn default_platform() -> Platform {
    Platform::Desktop
}
fn default_conversion_window_secs() -> u64 {
    60
}
fn default_report_interval_secs() -> u64 {
    86400
}
