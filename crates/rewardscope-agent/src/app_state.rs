//! Shared application state for the rewardscope agent.
//!
//! Owns the registry sink, the pref store, and the recorder strategy chosen
//! from config. Construction must happen inside a tokio runtime because the
//! mobile strategy spawns its reporting loop.

use std::sync::Arc;

use rewardscope_core::prefs::{MemoryPrefStore, PrefStore};
use rewardscope_core::sink::HistogramSink;

use crate::config::AgentConfig;
use crate::obs::metrics::RegistrySink;
use crate::panel::{self, PanelTriggerRecorder};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AgentConfig,
    registry: Arc<RegistrySink>,
    prefs: Arc<dyn PrefStore>,
    recorder: Arc<dyn PanelTriggerRecorder>,
}

impl AppState {
    /// Build state with an in-memory pref store (demo binary, tests).
    pub fn new(cfg: AgentConfig) -> Self {
        Self::with_prefs(cfg, Arc::new(MemoryPrefStore::new()))
    }

    /// Build state over the host's own pref store.
    pub fn with_prefs(cfg: AgentConfig, prefs: Arc<dyn PrefStore>) -> Self {
        let registry = Arc::new(RegistrySink::new());
        let sink: Arc<dyn HistogramSink> = registry.clone();
        let recorder = panel::build_recorder(&cfg.telemetry, sink, Arc::clone(&prefs));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                prefs,
                recorder,
            }),
        }
    }

    pub fn cfg(&self) -> &AgentConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<RegistrySink> {
        Arc::clone(&self.inner.registry)
    }

    pub fn prefs(&self) -> Arc<dyn PrefStore> {
        Arc::clone(&self.inner.prefs)
    }

    pub fn recorder(&self) -> Arc<dyn PanelTriggerRecorder> {
        Arc::clone(&self.inner.recorder)
    }
}
