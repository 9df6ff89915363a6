use serde::{Deserialize, Serialize};

use super::normalizer::{normalize_locality, normalize_number, normalize_street};
use super::query::NormalizedQuery;
use crate::data::PollingStationInfo;

/// How specifically a station matched a query. Variants are ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRank {
    /// Locality, street and number all agree.
    Exact,
    Street,
    Locality,
}

impl MatchRank {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "Exact address",
            Self::Street => "Same street",
            Self::Locality => "Same locality",
        }
    }
}

/// Comparison form of a station's address attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StationKey {
    pub(crate) locality: String,
    pub(crate) street: String,
    pub(crate) number: String,
}

impl StationKey {
    pub(crate) fn from_station(station: &PollingStationInfo) -> Self {
        Self {
            locality: normalize_locality(&station.locality),
            street: normalize_street(&station.street),
            number: normalize_number(&station.number),
        }
    }
}

/// Ranks one station against a query, or `None` if it is not a candidate.
///
/// With a locality in the query the locality must agree; street and number then only
/// refine the rank. Without one, the street must agree.
pub(crate) fn rank_station(query: &NormalizedQuery, key: &StationKey) -> Option<MatchRank> {
    let street_matches = query.street.as_deref() == Some(key.street.as_str());
    let number_matches = query.number.as_deref() == Some(key.number.as_str());

    match query.locality.as_deref() {
        Some(locality) if locality != key.locality => None,
        Some(_) if street_matches && number_matches => Some(MatchRank::Exact),
        Some(_) if street_matches => Some(MatchRank::Street),
        Some(_) => Some(MatchRank::Locality),
        None if !street_matches => None,
        None if number_matches => Some(MatchRank::Exact),
        None => Some(MatchRank::Street),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(locality: &str, street: &str, number: &str) -> StationKey {
        StationKey {
            locality: locality.to_string(),
            street: street.to_string(),
            number: number.to_string(),
        }
    }

    fn query(locality: Option<&str>, street: Option<&str>, number: Option<&str>) -> NormalizedQuery {
        NormalizedQuery {
            locality: locality.map(str::to_string),
            street: street.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    #[test]
    fn ranks_by_specificity_within_locality() {
        let station = key("sector 1", "calea victoriei", "10");

        assert_eq!(
            rank_station(&query(Some("sector 1"), Some("calea victoriei"), Some("10")), &station),
            Some(MatchRank::Exact)
        );
        assert_eq!(
            rank_station(&query(Some("sector 1"), Some("calea victoriei"), Some("12")), &station),
            Some(MatchRank::Street)
        );
        assert_eq!(
            rank_station(&query(Some("sector 1"), Some("strada lipscani"), Some("10")), &station),
            Some(MatchRank::Locality)
        );
        assert_eq!(
            rank_station(&query(Some("sector 2"), Some("calea victoriei"), Some("10")), &station),
            None
        );
    }

    #[test]
    fn street_only_queries_require_the_street() {
        let station = key("sector 1", "calea victoriei", "10");

        assert_eq!(
            rank_station(&query(None, Some("calea victoriei"), Some("10")), &station),
            Some(MatchRank::Exact)
        );
        assert_eq!(
            rank_station(&query(None, Some("calea victoriei"), None), &station),
            Some(MatchRank::Street)
        );
        assert_eq!(
            rank_station(&query(None, Some("strada lipscani"), None), &station),
            None
        );
    }

    #[test]
    fn ranks_order_best_first() {
        assert!(MatchRank::Exact < MatchRank::Street);
        assert!(MatchRank::Street < MatchRank::Locality);
    }
}
