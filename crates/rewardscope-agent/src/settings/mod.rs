//! Settings-surface adapters.

pub mod engines;
