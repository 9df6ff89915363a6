use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{info, warn};

use super::{ApplicationDataSnapshot, DataLoadError, DataProvider};

/// Holds the currently published snapshot.
///
/// Readers get a whole `Arc` to one snapshot; publishing swaps the pointer, so a
/// reader never sees stations and content from different loads.
pub struct SnapshotStore {
    current: ArcSwapOption<ApplicationDataSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    pub fn current(&self) -> Option<Arc<ApplicationDataSnapshot>> {
        self.current.load_full()
    }

    pub fn publish(&self, snapshot: ApplicationDataSnapshot) -> Arc<ApplicationDataSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.current.store(Some(Arc::clone(&snapshot)));
        info!(
            languages = snapshot.static_texts.entries().len(),
            stations = snapshot.polling_stations_info.len(),
            loaded_at = %snapshot.loaded_at,
            "published application data snapshot"
        );
        snapshot
    }

    /// Load from `provider` and publish. On failure the previous snapshot stays.
    pub fn reload(
        &self,
        provider: &dyn DataProvider,
    ) -> Result<Arc<ApplicationDataSnapshot>, DataLoadError> {
        match provider.load() {
            Ok(snapshot) => Ok(self.publish(snapshot)),
            Err(err) => {
                warn!(source = %provider.describe(), error = %err, "application data reload failed");
                Err(err)
            }
        }
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleDataProvider;

    struct FailingProvider;

    impl DataProvider for FailingProvider {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn load(&self) -> Result<ApplicationDataSnapshot, DataLoadError> {
            Err(DataLoadError::NoContent)
        }
    }

    #[test]
    fn starts_empty() {
        let store = SnapshotStore::new();
                assert!(store.current().is_none());
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let store = SnapshotStore::new();
        let first = store.reload(&SampleDataProvider).expect("sample loads");

        let error = store.reload(&FailingProvider).expect_err("load fails");
        assert!(matches!(error, DataLoadError::NoContent));

        let current = store.current().expect("still loaded");
        assert!(Arc::ptr_eq(&first, &current));
    }

    #[test]
    fn reload_replaces_the_whole_snapshot() {
        let store = SnapshotStore::new();
        let first = store.reload(&SampleDataProvider).expect("sample loads");
        let second = store.reload(&SampleDataProvider).expect("sample reloads");

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &store.current().expect("loaded")));
    }
}
