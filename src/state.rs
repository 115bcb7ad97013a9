use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::services::{HttpProbe, ReachabilityProbe};

/// Shared application state accessible from all handlers. Immutable after
/// startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub probe: Arc<dyn ReachabilityProbe>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let probe = Arc::new(HttpProbe::new(Duration::from_secs(
            config.probe_timeout_seconds,
        )));
        Self { config, probe }
    }

    /// Build state with an injected probe (used by tests to stub the
    /// outbound reachability check).
    pub fn with_probe(config: Config, probe: Arc<dyn ReachabilityProbe>) -> Self {
        Self { config, probe }
    }
}
