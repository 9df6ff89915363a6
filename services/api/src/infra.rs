use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::{info, warn};
use vot_romania::config::AppConfig;
use vot_romania::data::{provider_for, DataProvider, SnapshotStore};
use vot_romania::search::PollingStationSearchService;

/// Shared handles for the API routes.
#[derive(Clone)]
pub(crate) struct ApiState {
    pub(crate) store: Arc<SnapshotStore>,
    pub(crate) provider: Arc<dyn DataProvider>,
    pub(crate) search: Arc<PollingStationSearchService>,
    pub(crate) default_language: Arc<str>,
}

impl ApiState {
    pub(crate) fn new(provider: Arc<dyn DataProvider>, config: &AppConfig) -> Self {
        let store = Arc::new(SnapshotStore::new());
        let search = Arc::new(PollingStationSearchService::new(store.clone(), config.search));

        Self {
            store,
            provider,
            search,
            default_language: Arc::from(config.data.default_language.as_str()),
        }
    }

    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self::new(provider_for(&config.data), config)
    }

    /// Initial load. A failure is logged and the service starts without data; search
    /// reports it as unavailable until a reload succeeds.
    pub(crate) fn load_initial(&self) {
        match self.store.reload(self.provider.as_ref()) {
            Ok(snapshot) => info!(
                source = %self.provider.describe(),
                resolver = self.search.resolver_name(),
                stations = snapshot.polling_stations_info.len(),
                localities = snapshot.polling_stations_info.index().locality_count(),
                "application data loaded"
            ),
            Err(err) => warn!(
                source = %self.provider.describe(),
                error = %err,
                "starting without application data"
            ),
        }
    }
}

#[derive(Clone)]
pub(crate) struct MetricsState {
    pub(crate) metrics: Arc<PrometheusHandle>,
}
