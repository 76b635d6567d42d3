//! Sample-count registry backing the `/metrics` debug handler.
//!
//! Counts are stored as atomics behind `DashMap`; rendering sorts histogram
//! names and sample values to keep the output deterministic.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use rewardscope_core::sink::HistogramSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    ExactLinear,
    Enumeration,
    Boolean,
}

impl Kind {
    fn as_str(self) -> &'static str {
        match self {
            Kind::ExactLinear => "exact_linear",
            Kind::Enumeration => "enumeration",
            Kind::Boolean => "boolean",
        }
    }
}

struct Histogram {
    kind: Kind,
    exclusive_max: i32,
    // sample value -> observation count
    samples: DashMap<i32, AtomicU64>,
}

impl Histogram {
    fn new(kind: Kind, exclusive_max: i32) -> Self {
        Self {
            kind,
            exclusive_max,
            samples: DashMap::new(),
        }
    }

    fn bump(&self, sample: i32) {
        let counter = self.samples.entry(sample).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// `HistogramSink` implementation counting samples per histogram name.
#[derive(Default)]
pub struct RegistrySink {
    histograms: DashMap<String, Histogram>,
}

/// Lowercase the histogram name and flatten separators for Prometheus.
fn exposition_name(name: &str) -> String {
    name.to_ascii_lowercase().replace('.', "_")
}

impl RegistrySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, kind: Kind, name: &str, sample: i32, exclusive_max: i32) {
        let hist = self
            .histograms
            .entry(name.to_string())
            .or_insert_with(|| Histogram::new(kind, exclusive_max));
        hist.bump(sample);
    }

    /// Observation count for one sample value of one histogram.
    pub fn sample_count(&self, name: &str, sample: i32) -> u64 {
        self.histograms
            .get(name)
            .and_then(|h| h.samples.get(&sample).map(|c| c.load(Ordering::Relaxed)))
            .unwrap_or(0)
    }

    /// Total observation count across all samples of one histogram.
    pub fn total_count(&self, name: &str) -> u64 {
        self.histograms
            .get(name)
            .map(|h| {
                h.samples
                    .iter()
                    .map(|c| c.value().load(Ordering::Relaxed))
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Render all histograms in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut names: Vec<String> = self.histograms.iter().map(|e| e.key().clone()).collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            let Some(hist) = self.histograms.get(&name) else {
                continue;
            };
            let metric = exposition_name(&name);
            let _ = writeln!(out, "# TYPE {} counter", metric);

            let mut samples: Vec<(i32, u64)> = hist
                .samples
                .iter()
                .map(|e| (*e.key(), e.value().load(Ordering::Relaxed)))
                .collect();
            samples.sort();

            for (sample, count) in samples {
                let _ = writeln!(
                    out,
                    "{}{{kind=\"{}\",sample=\"{}\",max=\"{}\"}} {}",
                    metric,
                    hist.kind.as_str(),
                    sample,
                    hist.exclusive_max,
                    count
                );
            }
        }
        out
    }
}

impl HistogramSink for RegistrySink {
    fn record_exact_linear(&self, name: &str, sample: i32, exclusive_max: i32) {
        self.record(Kind::ExactLinear, name, sample, exclusive_max);
    }

    fn record_enumeration(&self, name: &str, sample: i32, exclusive_max: i32) {
        self.record(Kind::Enumeration, name, sample, exclusive_max);
    }

    fn record_boolean(&self, name: &str, value: bool) {
        self.record(Kind::Boolean, name, value as i32, 2);
    }
}
