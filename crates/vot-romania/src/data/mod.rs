pub mod domain;
mod loader;
mod repository;
pub mod sample;
mod store;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{DataConfig, DataSource};

pub use domain::{GuideSection, PollingStationInfo, StaticData, VotingGuide};
pub use loader::{parse_content, parse_stations, FileDataProvider};
pub use repository::{ContentRepository, PollingStationRepository};
pub use sample::SampleDataProvider;
pub use store::SnapshotStore;

/// Every piece of data the application serves, produced by one load and never
/// modified afterwards. Reloads publish a new snapshot instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDataSnapshot {
    pub static_texts: ContentRepository,
    pub polling_stations_info: PollingStationRepository,
    pub loaded_at: DateTime<Utc>,
}

impl ApplicationDataSnapshot {
    pub fn new(static_texts: ContentRepository, polling_stations_info: PollingStationRepository) -> Self {
        Self {
            static_texts,
            polling_stations_info,
            loaded_at: Utc::now(),
        }
    }
}

/// Source of application data snapshots.
pub trait DataProvider: Send + Sync {
    /// Human-readable description of where data comes from, for logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<ApplicationDataSnapshot, DataLoadError>;
}

pub fn provider_for(config: &DataConfig) -> Arc<dyn DataProvider> {
    match &config.source {
        DataSource::Sample => Arc::new(SampleDataProvider),
        DataSource::Files {
            stations_csv,
            content_json,
        } => Arc::new(FileDataProvider::new(stations_csv, content_json)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid polling station CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid static content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("static content for language '{0}' is defined more than once")]
    DuplicateLanguage(String),
    #[error("static content entry is missing its language code")]
    MissingLanguage,
    #[error("no static content was provided")]
    NoContent,
    #[error("polling station {0} is defined more than once")]
    DuplicateStation(u32),
}
