//! rewardscope agent library entry.
//!
//! This crate wires the config loader, the in-process sink registry, the
//! platform recorder strategies, the settings-surface adapter, and the debug
//! router into a cohesive stack. It is intended to be consumed by the binary
//! (`main.rs`), by an embedding host, and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod panel;
pub mod router;
pub mod settings;
