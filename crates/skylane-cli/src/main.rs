use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skylane_lib::{
    build_route_graph, load_network, plan_itinerary, top_hubs, AirportRegistry,
    GraphBuildOptions, ItineraryOutcome, ItineraryRequest, RouteGraph, UnknownRoutePolicy,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight-network analysis utilities")]
struct Cli {
    /// Airports CSV (code,name,country,latitude,longitude).
    #[arg(long)]
    airports: PathBuf,

    /// Routes CSV (origin,destination,duration).
    #[arg(long)]
    routes: PathBuf,

    /// Drop route records referencing unknown airports instead of failing.
    #[arg(long)]
    drop_unknown_routes: bool,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank airports by number of outgoing connections.
    Hubs {
        /// How many airports to list.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Compute the minimum-duration itinerary between two airports.
    Route {
        /// Departure airport code.
        #[arg(long = "from")]
        from: String,
        /// Arrival airport code.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_graph(
        &cli.airports,
        &cli.routes,
        cli.drop_unknown_routes,
    )?;

    match cli.command {
        Command::Hubs { top } => handle_hubs(&network.graph, top, cli.json),
        Command::Route { from, to } => handle_route(&network, &from, &to, cli.json),
    }
}

struct Network {
    registry: AirportRegistry,
    graph: RouteGraph,
}

fn load_graph(airports: &Path, routes: &Path, drop_unknown: bool) -> Result<Network> {
    let (registry, records) = load_network(airports, routes)
        .with_context(|| format!("failed to load network dataset from {}", airports.display()))?;

    let options = GraphBuildOptions {
        unknown_routes: if drop_unknown {
            UnknownRoutePolicy::Drop
        } else {
            UnknownRoutePolicy::Reject
        },
    };
    let graph = build_route_graph(&registry, &records, &options)
        .context("failed to build the route graph")?;

    Ok(Network { registry, graph })
}

fn handle_hubs(graph: &RouteGraph, top: usize, as_json: bool) -> Result<()> {
    let hubs = top_hubs(graph, top);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&hubs)?);
        return Ok(());
    }

    println!("Top {} hubs by outgoing routes:", hubs.len());
    for (rank, hub) in hubs.iter().enumerate() {
        println!("{}. {} - {} connections", rank + 1, hub.code, hub.score);
    }
    Ok(())
}

fn handle_route(network: &Network, from: &str, to: &str, as_json: bool) -> Result<()> {
    let request = ItineraryRequest::new(from, to);
    let outcome = plan_itinerary(&network.registry, &network.graph, &request)?;

    match outcome {
        ItineraryOutcome::NoRoute { from, to } => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&json!({
                    "from": from,
                    "to": to,
                    "plan": null,
                }))?);
            } else {
                println!("No route found between {from} and {to}");
            }
        }
        ItineraryOutcome::Plan(plan) => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&json!({
                    "from": plan.from.clone(),
                    "to": plan.to.clone(),
                    "plan": &plan,
                }))?);
                return Ok(());
            }

            println!(
                "Itinerary {} -> {} ({} minutes, {} legs):",
                plan.from,
                plan.to,
                plan.total_weight,
                plan.hop_count()
            );
            for step in &plan.steps {
                let name = step.name.as_deref().unwrap_or("<unknown>");
                match step.leg_weight {
                    Some(weight) => println!("- {} {} ({} min)", step.code, name, weight),
                    None => println!("- {} {}", step.code, name),
                }
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
