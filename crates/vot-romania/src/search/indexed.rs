use std::collections::HashMap;

use super::rank::{rank_station, StationKey};
use super::{Candidate, NormalizedQuery, StationResolver};
use crate::data::{PollingStationInfo, PollingStationRepository};

/// Normalized address keys for a station list, grouped by locality and by street.
///
/// Position lists are ascending, so candidates come out in dataset order.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    keys: Vec<StationKey>,
    by_locality: HashMap<String, Vec<usize>>,
    by_street: HashMap<String, Vec<usize>>,
}

impl StationIndex {
    pub fn build(stations: &[PollingStationInfo]) -> Self {
        let mut index = Self {
            keys: Vec::with_capacity(stations.len()),
            ..Self::default()
        };

        for (position, station) in stations.iter().enumerate() {
            let key = StationKey::from_station(station);
            index
                .by_locality
                .entry(key.locality.clone())
                .or_default()
                .push(position);
            index
                .by_street
                .entry(key.street.clone())
                .or_default()
                .push(position);
            index.keys.push(key);
        }

        index
    }

    pub fn locality_count(&self) -> usize {
        self.by_locality.len()
    }

    fn positions(&self, query: &NormalizedQuery) -> &[usize] {
        let bucket = match (query.locality.as_ref(), query.street.as_ref()) {
            (Some(locality), _) => self.by_locality.get(locality),
            (None, Some(street)) => self.by_street.get(street),
            (None, None) => None,
        };
        bucket.map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Resolver backed by the index precomputed when the station repository is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedResolver;

impl StationResolver for IndexedResolver {
    fn name(&self) -> &'static str {
        "indexed"
    }

    fn resolve<'a>(
        &self,
        query: &NormalizedQuery,
        stations: &'a PollingStationRepository,
    ) -> Vec<Candidate<'a>> {
        let index = stations.index();
        let all = stations.all();

        let mut candidates: Vec<Candidate<'a>> = index
            .positions(query)
            .iter()
            .filter_map(|&position| {
                rank_station(query, &index.keys[position]).map(|rank| Candidate {
                    rank,
                    position,
                    station: &all[position],
                })
            })
            .collect();

        candidates.sort_by_key(|candidate| candidate.rank);
        candidates
    }
}
