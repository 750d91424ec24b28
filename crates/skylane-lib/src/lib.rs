//! Skylane library entry points.
//!
//! This crate loads a cleaned flight-route dataset, validates it into an
//! airport registry and an immutable route graph, and runs the two analyses
//! the project exists for: degree-centrality hub ranking and minimum-duration
//! itinerary planning. Higher-level consumers (CLI, reporting layers) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod centrality;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod path;
pub mod registry;

pub use centrality::{rank_hubs, top_hubs, HubScore};
pub use dataset::{load_airports, load_network, load_routes};
pub use error::{Error, Result};
pub use graph::{
    build_route_graph, Edge, GraphBuildOptions, RouteGraph, RouteRecord, UnknownRoutePolicy,
};
pub use itinerary::{plan_itinerary, ItineraryOutcome, ItineraryPlan, ItineraryRequest};
pub use path::{shortest_path, PathOutcome, PathResult};
pub use registry::{Airport, AirportRegistry};
