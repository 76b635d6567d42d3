//! Top-level facade crate for rewardscope.
//!
//! Re-exports the core recording logic and the agent runtime so users can
//! depend on a single crate.

pub mod core {
    pub use rewardscope_core::*;
}

pub mod agent {
    pub use rewardscope_agent::*;
}
