use serde::{Deserialize, Serialize};

use super::normalizer::{normalize_locality, normalize_number, normalize_street};

/// Address fragments supplied by a citizen. Any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl AddressQuery {
    pub fn new(locality: Option<&str>, street: Option<&str>, number: Option<&str>) -> Self {
        Self {
            locality: locality.map(str::to_string),
            street: street.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    /// Splits a single free-form line such as `Calea Victoriei 10, Sector 1`.
    ///
    /// Segments are comma separated and the first one holds the street. With two
    /// segments the second is the locality. With more, a `Sector N` segment wins,
    /// otherwise the one before the trailing county or city. A trailing token
    /// containing a digit in the street segment becomes the street number. A lone
    /// segment without a number, or a lone `Sector N`, is taken as a locality.
    pub fn parse(text: &str) -> Self {
        let segments: Vec<&str> = text
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        let (street_segment, locality) = match segments.as_slice() {
            [] => return Self::default(),
            [only] => (*only, None),
            [first, last] => (*first, Some(last.to_string())),
            [first, rest @ ..] => (*first, locality_segment(rest).map(str::to_string)),
        };

        let (street, number) = split_street_number(street_segment);

        if locality.is_none() && (number.is_none() || is_sector(&street)) {
            return Self {
                locality: Some(street_segment.to_string()),
                ..Self::default()
            };
        }

        Self {
            locality,
            street: Some(street).filter(|street| !street.is_empty()),
            number,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.normalize().is_none()
    }

    /// Normalized form used by resolvers. `None` when neither locality nor street
    /// carries any comparable text.
    pub fn normalize(&self) -> Option<NormalizedQuery> {
        let locality = normalized_field(self.locality.as_deref(), normalize_locality);
        let street = normalized_field(self.street.as_deref(), normalize_street);
        let number = normalized_field(self.number.as_deref(), normalize_number);

        if locality.is_none() && street.is_none() {
            return None;
        }

        Some(NormalizedQuery {
            locality,
            street,
            number,
        })
    }
}

fn normalized_field(value: Option<&str>, normalize: fn(&str) -> String) -> Option<String> {
    value.map(normalize).filter(|value| !value.is_empty())
}

fn split_street_number(segment: &str) -> (String, Option<String>) {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let number_at = tokens
        .iter()
        .rposition(|token| token.chars().any(|c| c.is_ascii_digit()));

    match number_at {
        // A leading number is part of a name ("1 Decembrie 1918"), not a house number.
        Some(index) if index > 0 && index == tokens.len() - 1 => {
            let mut street_end = index;
            if is_number_marker(tokens[street_end - 1]) {
                street_end -= 1;
            }
            (
                tokens[..street_end].join(" "),
                Some(tokens[index].to_string()),
            )
        }
        _ => (tokens.join(" "), None),
    }
}

/// Picks the locality among the segments after the street, e.g. in
/// `Calea Victoriei 10, Sector 1, București` or `Str. Memorandumului 21, Cluj-Napoca, Cluj`.
fn locality_segment<'a>(tail: &[&'a str]) -> Option<&'a str> {
    tail.iter()
        .copied()
        .find(|segment| is_sector_segment(segment))
        .or_else(|| tail.iter().rev().nth(1).copied())
}

/// Bucharest districts are written as `Sector 1`..`Sector 6` and act as localities.
fn is_sector(street: &str) -> bool {
    street.trim().eq_ignore_ascii_case("sector")
}

fn is_sector_segment(segment: &str) -> bool {
    let mut tokens = segment.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(word), Some(number), None) => {
            is_sector(word) && number.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

fn is_number_marker(token: &str) -> bool {
    let lowered = token.trim_end_matches('.').to_ascii_lowercase();
    lowered == "nr" || lowered == "numarul"
}

/// Query in comparison form; see the normalizer for the folding rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedQuery {
    pub locality: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
}
