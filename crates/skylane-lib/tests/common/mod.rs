#![allow(dead_code)]

use skylane_lib::{
    build_route_graph, Airport, AirportRegistry, GraphBuildOptions, RouteGraph, RouteRecord,
};

/// Build a registry from bare codes, synthesizing names and countries.
pub fn registry(codes: &[&str]) -> AirportRegistry {
    let airports = codes
        .iter()
        .map(|code| Airport {
            code: (*code).to_string(),
            name: format!("{code} International"),
            country: "Testland".to_string(),
            latitude: None,
            longitude: None,
        })
        .collect();
    AirportRegistry::from_airports(airports).expect("valid registry")
}

/// Build a graph from `(origin, destination, weight)` triples under the
/// default (reject) policy.
pub fn graph(codes: &[&str], routes: &[(&str, &str, f64)]) -> RouteGraph {
    let records = route_records(routes);
    build_route_graph(&registry(codes), &records, &GraphBuildOptions::default())
        .expect("graph builds")
}

pub fn route_records(routes: &[(&str, &str, f64)]) -> Vec<RouteRecord> {
    routes
        .iter()
        .map(|(origin, destination, weight)| RouteRecord::new(*origin, *destination, *weight))
        .collect()
}
