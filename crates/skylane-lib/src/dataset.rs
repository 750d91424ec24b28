//! CSV ingestion for the flight-network dataset.
//!
//! The loaders expect the upstream cleaning step to have already happened;
//! they only parse typed records and surface malformed rows as errors with
//! file context instead of silently dropping them.
//!
//! Two files make up a dataset:
//! - airports: `code,name,country,latitude,longitude` (coordinates optional)
//! - routes: `origin,destination,duration` (duration in minutes)

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::RouteRecord;
use crate::registry::{Airport, AirportRegistry};

/// Load airport records from a CSV file.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    let file = fs::File::open(path)?;
    airports_from_reader(file).map_err(|err| dataset_error(path, err))
}

/// Load route records from a CSV file.
pub fn load_routes(path: &Path) -> Result<Vec<RouteRecord>> {
    let file = fs::File::open(path)?;
    routes_from_reader(file).map_err(|err| dataset_error(path, err))
}

/// Load and validate a full network dataset: a registry plus route records.
pub fn load_network(
    airports_path: &Path,
    routes_path: &Path,
) -> Result<(AirportRegistry, Vec<RouteRecord>)> {
    let airports = load_airports(airports_path)?;
    let registry = AirportRegistry::from_airports(airports)?;
    let routes = load_routes(routes_path)?;
    debug!(
        airports = registry.len(),
        routes = routes.len(),
        "loaded network dataset"
    );
    Ok((registry, routes))
}

/// Parse airport records from any reader. Exposed for tests and callers that
/// keep datasets in memory.
pub fn airports_from_reader<R: Read>(reader: R) -> Result<Vec<Airport>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let mut airports = Vec::new();
    for record in csv_reader.deserialize::<Airport>() {
        airports.push(record?);
    }
    Ok(airports)
}

/// Parse route records from any reader.
pub fn routes_from_reader<R: Read>(reader: R) -> Result<Vec<RouteRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let mut routes = Vec::new();
    for record in csv_reader.deserialize::<RouteRecord>() {
        routes.push(record?);
    }
    Ok(routes)
}

fn dataset_error(path: &Path, err: Error) -> Error {
    match err {
        Error::Csv(err) => Error::Dataset {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
        other => other,
    }
}
