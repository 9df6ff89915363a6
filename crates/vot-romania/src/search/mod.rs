//! Address to polling-station resolution.
//!
//! Resolvers are pure functions of a normalized query and a station repository. The
//! [`PollingStationSearchService`] reads the currently published snapshot, so a reload
//! never exposes a half-replaced dataset to an in-flight search.

mod exhaustive;
mod indexed;
pub(crate) mod normalizer;
mod query;
mod rank;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::{SearchConfig, SearchStrategy};
use crate::data::{PollingStationInfo, PollingStationRepository, SnapshotStore};

pub use exhaustive::ExhaustiveResolver;
pub use indexed::{IndexedResolver, StationIndex};
pub use query::{AddressQuery, NormalizedQuery};
pub use rank::MatchRank;

/// A station borrowed from the repository together with how it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub rank: MatchRank,
    /// Position of the station in dataset order.
    pub position: usize,
    pub station: &'a PollingStationInfo,
}

/// Owned search result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStation {
    pub rank: MatchRank,
    pub station: PollingStationInfo,
}

impl From<Candidate<'_>> for RankedStation {
    fn from(candidate: Candidate<'_>) -> Self {
        Self {
            rank: candidate.rank,
            station: candidate.station.clone(),
        }
    }
}

/// Strategy for matching a query against a station repository.
///
/// Implementations must return candidates ordered by [`MatchRank`] with ties in
/// dataset order, and must agree with each other on every input.
pub trait StationResolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve<'a>(
        &self,
        query: &NormalizedQuery,
        stations: &'a PollingStationRepository,
    ) -> Vec<Candidate<'a>>;
}

pub fn resolver_for(strategy: SearchStrategy) -> Arc<dyn StationResolver> {
    match strategy {
        SearchStrategy::Exhaustive => Arc::new(ExhaustiveResolver),
        SearchStrategy::Indexed => Arc::new(IndexedResolver),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("polling station data is not available yet")]
    DataUnavailable,
}

/// Entry point for polling-station search requests.
pub struct PollingStationSearchService {
    store: Arc<SnapshotStore>,
    resolver: Arc<dyn StationResolver>,
    limit: usize,
}

impl PollingStationSearchService {
    pub fn new(store: Arc<SnapshotStore>, config: SearchConfig) -> Self {
        Self::with_resolver(store, resolver_for(config.strategy), config.limit)
    }

    pub fn with_resolver(
        store: Arc<SnapshotStore>,
        resolver: Arc<dyn StationResolver>,
        limit: usize,
    ) -> Self {
        Self {
            store,
            resolver,
            limit,
        }
    }

    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }

    /// Resolve a citizen address to ranked polling stations.
    ///
    /// Blank queries and queries without a match yield an empty list; only a missing
    /// dataset is an error.
    pub fn search(&self, query: &AddressQuery) -> Result<Vec<RankedStation>, SearchError> {
        let snapshot = self.store.current().ok_or(SearchError::DataUnavailable)?;

        let Some(normalized) = query.normalize() else {
            debug!(?query, "ignoring blank polling station query");
            return Ok(Vec::new());
        };

        let results: Vec<RankedStation> = self
            .resolver
            .resolve(&normalized, &snapshot.polling_stations_info)
            .into_iter()
            .take(self.limit)
            .map(RankedStation::from)
            .collect();

        debug!(
            resolver = self.resolver.name(),
            matches = results.len(),
            "resolved polling station query"
        );
        Ok(results)
    }

    /// Parse a single free-form address line and search with it.
    pub fn search_text(&self, text: &str) -> Result<Vec<RankedStation>, SearchError> {
        self.search(&AddressQuery::parse(text))
    }
}
