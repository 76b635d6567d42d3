//! Search engines display list.
//!
//! `SearchEnginesHandler` is the seam the settings page calls to obtain the
//! list of engines to show. `RewardsSearchEnginesHandler` is the override
//! point for the rewards build: it wraps a base handler and delegates list
//! production to it, with no logic of its own by contract.

use std::sync::Arc;

use serde::Serialize;

/// One engine entry as shown by the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEngineEntry {
    pub id: u64,
    pub name: String,
    pub keyword: String,
    pub is_default: bool,
    pub from_extension: bool,
    pub can_be_removed: bool,
}

/// Dictionary-like structure describing available search engines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchEnginesInfo {
    pub defaults: Vec<SearchEngineEntry>,
    pub others: Vec<SearchEngineEntry>,
    pub extensions: Vec<SearchEngineEntry>,
}

/// Source of engine entries, owned by the host.
pub trait SearchEngineProvider: Send + Sync {
    fn engines(&self) -> Vec<SearchEngineEntry>;
}

/// Produces the display structure for the settings page.
pub trait SearchEnginesHandler: Send + Sync {
    fn search_engines_list(&self) -> SearchEnginesInfo;
}

/// Base handler: splits provider entries into the three display sections.
pub struct DefaultSearchEnginesHandler {
    provider: Arc<dyn SearchEngineProvider>,
}

impl DefaultSearchEnginesHandler {
    pub fn new(provider: Arc<dyn SearchEngineProvider>) -> Self {
        Self { provider }
    }
}

impl SearchEnginesHandler for DefaultSearchEnginesHandler {
    fn search_engines_list(&self) -> SearchEnginesInfo {
        let mut info = SearchEnginesInfo::default();
        for engine in self.provider.engines() {
            if engine.from_extension {
                info.extensions.push(engine);
            } else if engine.is_default {
                info.defaults.push(engine);
            } else {
                info.others.push(engine);
            }
        }
        info
    }
}

/// Override point for the rewards build: pure delegation to the wrapped base.
pub struct RewardsSearchEnginesHandler {
    base: Box<dyn SearchEnginesHandler>,
}

impl RewardsSearchEnginesHandler {
    pub fn new(base: Box<dyn SearchEnginesHandler>) -> Self {
        Self { base }
    }
}

impl SearchEnginesHandler for RewardsSearchEnginesHandler {
    fn search_engines_list(&self) -> SearchEnginesInfo {
        self.base.search_engines_list()
    }
}
