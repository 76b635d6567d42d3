//! In-process histogram registry.
//!
//! The registry implements the core `HistogramSink` seam and counts samples
//! per histogram name; the `/metrics` handler renders it as Prometheus-style
//! text. This is a development surface, not the host's collection pipeline.

pub mod metrics;
