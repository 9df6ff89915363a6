use std::collections::HashSet;

use serde::{Serialize, Serializer};

use super::domain::{PollingStationInfo, StaticData};
use super::DataLoadError;
use crate::search::StationIndex;

/// Per-language static texts. Language codes are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentRepository {
    entries: Vec<StaticData>,
}

impl ContentRepository {
    pub fn new(entries: Vec<StaticData>) -> Result<Self, DataLoadError> {
        if entries.is_empty() {
            return Err(DataLoadError::NoContent);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.language.trim().is_empty() {
                return Err(DataLoadError::MissingLanguage);
            }
            if !seen.insert(entry.language.as_str()) {
                return Err(DataLoadError::DuplicateLanguage(entry.language.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Exact, case-sensitive lookup by language code.
    pub fn get(&self, language: &str) -> Option<&StaticData> {
        self.entries.iter().find(|entry| entry.language == language)
    }

    pub fn languages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.language.clone())
            .collect()
    }

    pub fn entries(&self) -> &[StaticData] {
        &self.entries
    }
}

/// Authoritative polling-station list with its precomputed search index.
#[derive(Debug, Clone, Default)]
pub struct PollingStationRepository {
    stations: Vec<PollingStationInfo>,
    index: StationIndex,
}

impl PollingStationRepository {
    pub fn new(stations: Vec<PollingStationInfo>) -> Result<Self, DataLoadError> {
        let mut ids = HashSet::new();
        if let Some(duplicate) = stations.iter().find(|station| !ids.insert(station.id)) {
            return Err(DataLoadError::DuplicateStation(duplicate.id));
        }

        let index = StationIndex::build(&stations);
        Ok(Self { stations, index })
    }

    pub fn all(&self) -> &[PollingStationInfo] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn index(&self) -> &StationIndex {
        &self.index
    }
}

impl PartialEq for PollingStationRepository {
    fn eq(&self, other: &Self) -> bool {
        self.stations == other.stations
    }
}

impl Eq for PollingStationRepository {}

impl Serialize for PollingStationRepository {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.stations.serialize(serializer)
    }
}
