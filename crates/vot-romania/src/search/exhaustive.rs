use super::rank::{rank_station, StationKey};
use super::{Candidate, NormalizedQuery, StationResolver};
use crate::data::PollingStationRepository;

/// Baseline resolver: normalizes and compares every station on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveResolver;

impl StationResolver for ExhaustiveResolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn resolve<'a>(
        &self,
        query: &NormalizedQuery,
        stations: &'a PollingStationRepository,
    ) -> Vec<Candidate<'a>> {
        let mut candidates: Vec<Candidate<'a>> = stations
            .all()
            .iter()
            .enumerate()
            .filter_map(|(position, station)| {
                let key = StationKey::from_station(station);
                rank_station(query, &key).map(|rank| Candidate {
                    rank,
                    position,
                    station,
                })
            })
            .collect();

        candidates.sort_by_key(|candidate| candidate.rank);
        candidates
    }
}
