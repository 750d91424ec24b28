mod common;

use std::collections::HashSet;

use skylane_lib::{plan_itinerary, shortest_path, Error, ItineraryOutcome, ItineraryRequest, PathOutcome, RouteGraph};

use common::{graph, registry};

#[test]
fn prefers_cheaper_multi_leg_itinerary() {
    // Direct AAA -> BBB costs 4, but AAA -> CCC -> BBB costs 2.
    let graph = graph(
        &["AAA", "BBB", "CCC", "DDD"],
        &[
            ("AAA", "BBB", 4.0),
            ("AAA", "CCC", 1.0),
            ("CCC", "BBB", 1.0),
            ("BBB", "DDD", 2.0),
        ],
    );

    let outcome = shortest_path(&graph, "AAA", "DDD").expect("valid query");
    let path = outcome.path().expect("route exists");
    assert_eq!(path.steps, vec!["AAA", "CCC", "BBB", "DDD"]);
    assert_eq!(path.total_weight, 4.0);
}

#[test]
fn same_source_and_destination_is_a_trivial_path() {
    let graph = graph(&["AAA", "BBB"], &[("AAA", "BBB", 1.0)]);
    for code in ["AAA", "BBB"] {
        let outcome = shortest_path(&graph, code, code).expect("valid query");
        let path = outcome.path().expect("trivial path");
        assert_eq!(path.steps, vec![code]);
        assert_eq!(path.total_weight, 0.0);
        assert_eq!(path.hop_count(), 0);
    }
}

#[test]
fn disconnected_components_yield_no_route_not_an_error() {
    let graph = graph(
        &["AAA", "BBB", "CCC", "DDD"],
        &[("AAA", "BBB", 1.0), ("CCC", "DDD", 1.0)],
    );
    let outcome = shortest_path(&graph, "AAA", "DDD").expect("valid query");
    assert_eq!(outcome, PathOutcome::NoRoute);
}

#[test]
fn direction_matters() {
    // Only AAA -> BBB exists; the reverse query has no route.
    let graph = graph(&["AAA", "BBB"], &[("AAA", "BBB", 1.0)]);
    let forward = shortest_path(&graph, "AAA", "BBB").expect("valid query");
    assert!(forward.path().is_some());
    let backward = shortest_path(&graph, "BBB", "AAA").expect("valid query");
    assert_eq!(backward, PathOutcome::NoRoute);
}

#[test]
fn unknown_endpoint_is_an_error() {
    let graph = graph(&["AAA", "BBB"], &[("AAA", "BBB", 1.0)]);
    for (from, to) in [("ZZZ", "BBB"), ("AAA", "ZZZ")] {
        let error = shortest_path(&graph, from, to).expect_err("unknown airport");
        assert!(matches!(error, Error::UnknownAirport { code, .. } if code == "ZZZ"));
    }
}

#[test]
fn total_weight_equals_sum_of_leg_weights() {
    let graph = graph(
        &["AAA", "BBB", "CCC", "DDD", "EEE"],
        &[
            ("AAA", "BBB", 35.0),
            ("BBB", "CCC", 50.0),
            ("CCC", "DDD", 20.0),
            ("AAA", "EEE", 90.0),
            ("EEE", "DDD", 40.0),
        ],
    );

    let outcome = shortest_path(&graph, "AAA", "DDD").expect("valid query");
    let path = outcome.path().expect("route exists");

    let mut sum = 0.0;
    for pair in path.steps.windows(2) {
        let edge = graph
            .neighbors(&pair[0])
            .unwrap()
            .iter()
            .find(|edge| edge.destination == pair[1])
            .expect("consecutive steps share an edge");
        sum += edge.weight;
    }
    assert_eq!(path.total_weight, sum);
}

/// Enumerate every simple path and return the cheapest total weight.
fn brute_force_minimum(graph: &RouteGraph, from: &str, to: &str) -> Option<f64> {
    fn walk(
        graph: &RouteGraph,
        current: &str,
        to: &str,
        visited: &mut HashSet<String>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == to {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for edge in graph.neighbors(current).unwrap() {
            if visited.insert(edge.destination.clone()) {
                walk(graph, &edge.destination, to, visited, cost + edge.weight, best);
                visited.remove(&edge.destination);
            }
        }
    }

    let mut best = None;
    let mut visited = HashSet::from([from.to_string()]);
    walk(graph, from, to, &mut visited, 0.0, &mut best);
    best
}

#[test]
fn dijkstra_matches_brute_force_on_a_dense_synthetic_graph() {
    let graph = graph(
        &["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"],
        &[
            ("AAA", "BBB", 7.0),
            ("AAA", "CCC", 9.0),
            ("AAA", "FFF", 14.0),
            ("BBB", "CCC", 10.0),
            ("BBB", "DDD", 15.0),
            ("CCC", "DDD", 11.0),
            ("CCC", "FFF", 2.0),
            ("DDD", "EEE", 6.0),
            ("FFF", "EEE", 9.0),
            ("EEE", "AAA", 30.0),
            ("FFF", "BBB", 1.0),
        ],
    );

    for from in graph.airport_codes() {
        for to in graph.airport_codes() {
            let expected = if from == to {
                Some(0.0)
            } else {
                brute_force_minimum(&graph, &from, &to)
            };
            let outcome = shortest_path(&graph, &from, &to).expect("valid query");
            match (expected, outcome) {
                (Some(weight), PathOutcome::Found(path)) => {
                    assert_eq!(path.total_weight, weight, "{from} -> {to}");
                }
                (None, PathOutcome::NoRoute) => {}
                (expected, outcome) => {
                    panic!("{from} -> {to}: expected {expected:?}, got {outcome:?}")
                }
            }
        }
    }
}

#[test]
fn repeated_queries_are_deterministic() {
    // Two equal-cost routes AAA -> BBB -> DDD and AAA -> CCC -> DDD; the
    // tie must resolve the same way on every run.
    let graph = graph(
        &["AAA", "BBB", "CCC", "DDD"],
        &[
            ("AAA", "BBB", 2.0),
            ("AAA", "CCC", 2.0),
            ("BBB", "DDD", 2.0),
            ("CCC", "DDD", 2.0),
        ],
    );

    let first = shortest_path(&graph, "AAA", "DDD").expect("valid query");
    for _ in 0..10 {
        let again = shortest_path(&graph, "AAA", "DDD").expect("valid query");
        assert_eq!(first, again);
    }
}

#[test]
fn itinerary_planner_decorates_steps_with_names() {
    let registry = registry(&["AAA", "BBB", "CCC"]);
    let graph = graph(
        &["AAA", "BBB", "CCC"],
        &[("AAA", "BBB", 30.0), ("BBB", "CCC", 45.0)],
    );

    let request = ItineraryRequest::new("aaa", "ccc");
    let outcome = plan_itinerary(&registry, &graph, &request).expect("valid query");
    let ItineraryOutcome::Plan(plan) = outcome else {
        panic!("expected a plan");
    };

    assert_eq!(plan.from, "AAA");
    assert_eq!(plan.to, "CCC");
    assert_eq!(plan.hop_count(), 2);
    assert_eq!(plan.total_weight, 75.0);
    assert_eq!(plan.steps[0].leg_weight, None);
    assert_eq!(plan.steps[1].leg_weight, Some(30.0));
    assert_eq!(plan.steps[2].leg_weight, Some(45.0));
    assert_eq!(plan.steps[1].name.as_deref(), Some("BBB International"));
}

#[test]
fn itinerary_planner_suggests_codes_for_typos() {
    let registry = registry(&["LHR", "LGW", "CDG"]);
    let graph = graph(&["LHR", "CDG"], &[("LHR", "CDG", 80.0)]);

    let request = ItineraryRequest::new("LHE", "CDG");
    let error = plan_itinerary(&registry, &graph, &request).expect_err("typo");
    match error {
        Error::UnknownAirport { code, suggestions } => {
            assert_eq!(code, "LHE");
            assert!(suggestions.contains(&"LHR".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn itinerary_planner_reports_no_route_distinctly() {
    let registry = registry(&["AAA", "BBB", "CCC", "DDD"]);
    let graph = graph(
        &["AAA", "BBB", "CCC", "DDD"],
        &[("AAA", "BBB", 1.0), ("CCC", "DDD", 1.0)],
    );

    let request = ItineraryRequest::new("AAA", "DDD");
    let outcome = plan_itinerary(&registry, &graph, &request).expect("valid query");
    assert_eq!(
        outcome,
        ItineraryOutcome::NoRoute {
            from: "AAA".to_string(),
            to: "DDD".to_string()
        }
    );
}
