use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::RouteGraph;

/// A computed minimum-duration itinerary between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Airport codes from source to destination, inclusive.
    pub steps: Vec<String>,
    /// Sum of edge weights along `steps`.
    pub total_weight: f64,
}

impl PathResult {
    /// Number of flight legs in the itinerary.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Outcome of a shortest-path query.
///
/// `NoRoute` is a legitimate answer for disconnected airports. It is distinct
/// both from errors (unknown codes) and from the zero-weight single-node path
/// returned when source and destination coincide.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(PathResult),
    NoRoute,
}

impl PathOutcome {
    /// The contained path, if one was found.
    pub fn path(&self) -> Option<&PathResult> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoRoute => None,
        }
    }
}

/// Run Dijkstra's algorithm between two airports in the graph.
///
/// All edge weights are strictly positive by graph invariant, so the first
/// time a node is extracted from the frontier its tentative distance is
/// final; the search exits early as soon as the destination is extracted.
/// Frontier entries with equal distance are ordered by insertion sequence
/// (earlier discovery wins) to keep results deterministic across runs.
pub fn shortest_path(graph: &RouteGraph, source: &str, destination: &str) -> Result<PathOutcome> {
    let source = source.trim().to_uppercase();
    let destination = destination.trim().to_uppercase();

    for code in [&source, &destination] {
        if !graph.contains(code) {
            return Err(Error::unknown_airport(code.clone()));
        }
    }

    if source == destination {
        return Ok(PathOutcome::Found(PathResult {
            steps: vec![source],
            total_weight: 0.0,
        }));
    }

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    distances.insert(source.clone(), 0.0);
    parents.insert(source.clone(), None);
    frontier.push(FrontierEntry::new(source.clone(), 0.0, sequence));

    while let Some(entry) = frontier.pop() {
        let settled = *distances.get(&entry.code).unwrap_or(&f64::INFINITY);
        if entry.cost.0 > settled {
            // Stale entry superseded by a later relaxation.
            continue;
        }

        if entry.code == destination {
            let steps = reconstruct_path(&parents, &source, &destination);
            debug_assert_eq!(steps.first().map(String::as_str), Some(source.as_str()));
            return Ok(PathOutcome::Found(PathResult {
                steps,
                total_weight: settled,
            }));
        }

        for edge in graph.neighbors(&entry.code)? {
            let next_cost = settled + edge.weight;
            if next_cost < *distances.get(&edge.destination).unwrap_or(&f64::INFINITY) {
                distances.insert(edge.destination.clone(), next_cost);
                parents.insert(edge.destination.clone(), Some(entry.code.clone()));
                sequence += 1;
                frontier.push(FrontierEntry::new(
                    edge.destination.clone(),
                    next_cost,
                    sequence,
                ));
            }
        }
    }

    Ok(PathOutcome::NoRoute)
}

fn reconstruct_path(
    parents: &HashMap<String, Option<String>>,
    source: &str,
    destination: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(destination.to_string());
    while let Some(code) = current {
        let done = code == source;
        path.push(code.clone());
        if done {
            break;
        }
        current = parents.get(&code).cloned().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    code: String,
    cost: FloatOrd,
    sequence: u64,
}

impl FrontierEntry {
    fn new(code: String, cost: f64, sequence: u64) -> Self {
        Self {
            code,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; on equal
        // cost the lower insertion sequence (earlier discovery) pops first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
