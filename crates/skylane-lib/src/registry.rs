use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity before a code is offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Static attributes of a single airport.
///
/// Immutable once loaded; the three-letter IATA code is the unique key.
/// Coordinates are optional because only rendering layers consume them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Canonical set of known airports, keyed by normalized code.
#[derive(Debug, Clone, Default)]
pub struct AirportRegistry {
    airports: HashMap<String, Airport>,
}

impl AirportRegistry {
    /// Build a registry from airport records, validating codes as it goes.
    ///
    /// Codes are normalized to uppercase before insertion. A malformed code
    /// or a duplicate aborts the load; no partially built registry is ever
    /// returned.
    pub fn from_airports(airports: Vec<Airport>) -> Result<Self> {
        let mut registry = HashMap::with_capacity(airports.len());
        for mut airport in airports {
            let code = normalize_code(&airport.code)?;
            if registry.contains_key(&code) {
                return Err(Error::DuplicateAirport { code });
            }
            airport.code = code.clone();
            registry.insert(code, airport);
        }
        Ok(Self { airports: registry })
    }

    /// Lookup an airport by code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&code.trim().to_uppercase())
    }

    /// Whether the registry knows the given code.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Display name for a code, if known.
    pub fn airport_name(&self, code: &str) -> Option<&str> {
        self.get(code).map(|airport| airport.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Iterate over all airports in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Return up to `limit` known codes closest to `query`, best match first.
    ///
    /// Both codes and display names are compared so that a user typing
    /// "Heathrow" is still pointed at LHR. Ties are broken by code so the
    /// suggestion list is stable across runs.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .map(|airport| {
                let by_code = strsim::jaro_winkler(&needle, &airport.code);
                let by_name = strsim::jaro_winkler(
                    &needle.to_lowercase(),
                    &airport.name.to_lowercase(),
                );
                (by_code.max(by_name), airport.code.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    /// Build an [`Error::UnknownAirport`] for `code` with suggestions attached.
    pub fn unknown_airport_error(&self, code: &str) -> Error {
        Error::UnknownAirport {
            code: code.trim().to_uppercase(),
            suggestions: self.fuzzy_matches(code, 3),
        }
    }
}

/// Validate and uppercase a three-letter airport code.
pub(crate) fn normalize_code(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidAirportCode {
            code: code.to_string(),
        });
    }
    Ok(trimmed.to_uppercase())
}
