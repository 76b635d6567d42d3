//! Agent config loader (strict parsing).

pub mod schema;

use std::fs;

use rewardscope_core::error::{Result, RewardscopeError};

pub use schema::{AgentConfig, AgentSection, Platform, TelemetrySection};

pub fn load_from_file(path: &str) -> Result<AgentConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RewardscopeError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AgentConfig> {
    let cfg: AgentConfig = serde_yaml::from_str(s)
        .map_err(|e| RewardscopeError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
