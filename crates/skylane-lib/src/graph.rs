use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::registry::{normalize_code, AirportRegistry};

/// A single cleaned route record handed over by the ETL layer.
///
/// The weight is the flight duration in minutes. Directionality matters:
/// a record for A -> B says nothing about B -> A.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "duration")]
    pub weight: f64,
}

impl RouteRecord {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// Outgoing edge within the route graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub destination: String,
    pub weight: f64,
}

/// What to do with a route referencing a code the registry does not know.
///
/// Whichever policy is selected applies uniformly to the whole build; the
/// two are never mixed within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRoutePolicy {
    /// Abort the build with [`Error::UnknownAirport`].
    #[default]
    Reject,
    /// Skip the offending record, counting and logging the drops.
    Drop,
}

/// Options controlling graph construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuildOptions {
    pub unknown_routes: UnknownRoutePolicy,
}

/// Directed weighted flight-route graph.
///
/// Built once, immutable thereafter. Adjacency storage sits behind an `Arc`
/// so clones share it; a dataset refresh builds a fresh instance and in-flight
/// queries keep the one they captured.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Outgoing edges of an airport, ordered by destination code.
    ///
    /// A node with no outgoing routes yields an empty slice; a code that is
    /// not part of the graph is an error.
    pub fn neighbors(&self, code: &str) -> Result<&[Edge]> {
        let code = code.trim().to_uppercase();
        self.adjacency
            .get(&code)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unknown_airport(code))
    }

    /// Count of distinct outgoing edges of an airport.
    pub fn degree(&self, code: &str) -> Result<usize> {
        self.neighbors(code).map(<[Edge]>::len)
    }

    /// Whether the code appears in the graph's node set.
    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(&code.trim().to_uppercase())
    }

    /// All node codes in ascending order.
    pub fn airport_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.adjacency.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Build the route graph from validated registry entries and raw records.
///
/// Validation is fail-atomic: any invalid weight, malformed record, or
/// (under the default `Reject` policy) unknown airport aborts construction
/// and no graph value is produced. Parallel records for the same ordered
/// pair collapse to the minimum weight, independent of input order.
pub fn build_route_graph(
    registry: &AirportRegistry,
    routes: &[RouteRecord],
    options: &GraphBuildOptions,
) -> Result<RouteGraph> {
    // BTreeMap keyed by (origin, destination) makes deduplication and the
    // final adjacency ordering deterministic regardless of record order.
    let mut edges: BTreeMap<(String, String), f64> = BTreeMap::new();
    let mut dropped = 0usize;

    for route in routes {
        let origin = normalize_code(&route.origin)?;
        let destination = normalize_code(&route.destination)?;

        if !route.weight.is_finite() || route.weight <= 0.0 {
            return Err(Error::InvalidWeight {
                origin,
                destination,
                weight: route.weight,
            });
        }

        if origin == destination {
            return Err(Error::InvalidRoute {
                origin,
                destination,
                message: "route loops back to its origin".to_string(),
            });
        }

        if !registry.contains(&origin) || !registry.contains(&destination) {
            match options.unknown_routes {
                UnknownRoutePolicy::Reject => {
                    let missing = if registry.contains(&origin) {
                        destination
                    } else {
                        origin
                    };
                    return Err(Error::unknown_airport(missing));
                }
                UnknownRoutePolicy::Drop => {
                    dropped += 1;
                    continue;
                }
            }
        }

        edges
            .entry((origin, destination))
            .and_modify(|weight| *weight = route.weight.min(*weight))
            .or_insert(route.weight);
    }

    if dropped > 0 {
        warn!(dropped, "ignored route records referencing unknown airports");
    }

    let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::new();
    let edge_count = edges.len();
    for ((origin, destination), weight) in edges {
        // Destinations become nodes too, so no edge ever dangles.
        adjacency.entry(destination.clone()).or_default();
        adjacency.entry(origin).or_default().push(Edge {
            destination,
            weight,
        });
    }

    // BTreeMap iteration already yields edges in destination order per origin,
    // so each adjacency list is sorted by construction.
    debug!(
        nodes = adjacency.len(),
        edges = edge_count,
        "built route graph"
    );

    Ok(RouteGraph {
        adjacency: Arc::new(adjacency),
        edge_count,
    })
}
