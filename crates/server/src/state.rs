use crate::config::ServerConfig;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use std::sync::Arc;
use store::{ContractStore, TemplateStore};

// The Prometheus recorder is process-global, so it is installed once
// for whichever state is created first; later states (tests spin up
// several) share the same handle.
static PROMETHEUS: Lazy<Option<PrometheusHandle>> =
    Lazy::new(|| PrometheusBuilder::new().install_recorder().ok());

/// Shared application state
///
/// Owns the stores for the lifetime of the process. Handlers receive
/// this via axum state; nothing in the system reaches for ambient
/// globals.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Contract records (shared across requests)
    pub contracts: Arc<ContractStore>,

    /// Template records, seeded with the built-in defaults
    pub templates: Arc<TemplateStore>,
}

impl ServerState {
    /// Create new server state with empty contract storage and the
    /// default template catalog.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            contracts: Arc::new(ContractStore::new()),
            templates: Arc::new(TemplateStore::new()),
        }
    }

    /// Render the current Prometheus metrics, when the recorder is
    /// installed and enabled.
    pub fn render_metrics(&self) -> Option<String> {
        if !self.config.metrics_enabled {
            return None;
        }
        PROMETHEUS.as_ref().map(PrometheusHandle::render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_seeded_templates_and_no_contracts() {
        let state = ServerState::new(ServerConfig::default());
        assert!(state.contracts.is_empty());
        assert_eq!(state.templates.len(), 2);
    }
}
