//! Shared error type across rewardscope crates.
//!
//! Recording operations themselves are fire-and-forget and never fail; errors
//! only exist at the edges (config load, agent startup).

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RewardscopeError>;

/// Unified error type used by core and agent.
#[derive(Debug, Error)]
pub enum RewardscopeError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
