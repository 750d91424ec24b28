//! Itinerary planning on top of the route graph.
//!
//! This module is the high-level entry point consumed by command surfaces:
//! it resolves user-supplied airport codes against the registry (attaching
//! "did you mean" suggestions on failure), runs the shortest-path search,
//! and decorates the result with display names and per-leg durations.

use serde::Serialize;

use crate::error::Result;
use crate::graph::RouteGraph;
use crate::path::{shortest_path, PathOutcome};
use crate::registry::AirportRegistry;

/// A request to plan an itinerary between two airport codes.
#[derive(Debug, Clone)]
pub struct ItineraryRequest {
    pub from: String,
    pub to: String,
}

impl ItineraryRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One stop along a planned itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryStep {
    pub code: String,
    pub name: Option<String>,
    /// Duration in minutes of the leg arriving at this stop; `None` for the
    /// departure airport.
    pub leg_weight: Option<f64>,
}

/// Planned itinerary returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryPlan {
    pub from: String,
    pub to: String,
    pub steps: Vec<ItineraryStep>,
    pub total_weight: f64,
}

impl ItineraryPlan {
    /// Number of flight legs in the itinerary.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Outcome of an itinerary query. Disconnected airports are an answer, not
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryOutcome {
    Plan(ItineraryPlan),
    NoRoute { from: String, to: String },
}

/// Plan a minimum-duration itinerary between two airports.
///
/// Codes unknown to the registry fail with suggestions; codes known to the
/// registry but absent from the graph (airports with no routes at all) fail
/// as unknown at the graph layer.
pub fn plan_itinerary(
    registry: &AirportRegistry,
    graph: &RouteGraph,
    request: &ItineraryRequest,
) -> Result<ItineraryOutcome> {
    let from = resolve_airport(registry, &request.from)?;
    let to = resolve_airport(registry, &request.to)?;

    let outcome = match shortest_path(graph, &from, &to)? {
        PathOutcome::NoRoute => ItineraryOutcome::NoRoute { from, to },
        PathOutcome::Found(path) => {
            let mut steps = Vec::with_capacity(path.steps.len());
            let mut previous: Option<&str> = None;
            for code in &path.steps {
                let leg_weight = match previous {
                    Some(origin) => leg_duration(graph, origin, code),
                    None => None,
                };
                steps.push(ItineraryStep {
                    code: code.clone(),
                    name: registry.airport_name(code).map(str::to_string),
                    leg_weight,
                });
                previous = Some(code);
            }
            ItineraryOutcome::Plan(ItineraryPlan {
                from,
                to,
                steps,
                total_weight: path.total_weight,
            })
        }
    };

    Ok(outcome)
}

fn resolve_airport(registry: &AirportRegistry, code: &str) -> Result<String> {
    match registry.get(code) {
        Some(airport) => Ok(airport.code.clone()),
        None => Err(registry.unknown_airport_error(code)),
    }
}

fn leg_duration(graph: &RouteGraph, origin: &str, destination: &str) -> Option<f64> {
    graph
        .neighbors(origin)
        .ok()?
        .iter()
        .find(|edge| edge.destination == destination)
        .map(|edge| edge.weight)
}
