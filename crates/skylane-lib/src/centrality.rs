use serde::Serialize;

use crate::graph::RouteGraph;

/// Degree-centrality score for one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubScore {
    pub code: String,
    /// Count of distinct outgoing routes.
    pub score: usize,
}

/// Rank every airport in the graph by out-degree, busiest first.
///
/// Ties are broken by ascending code, which makes the ranking a total order
/// and re-running it on the same graph idempotent. The score deliberately
/// ignores in-degree and weighted flow; out-degree is a cheap structural
/// proxy for hub importance that is reproducible from the graph alone.
pub fn rank_hubs(graph: &RouteGraph) -> Vec<HubScore> {
    let mut scores: Vec<HubScore> = graph
        .airport_codes()
        .into_iter()
        .map(|code| {
            // Every code from `airport_codes` is a node, so degree cannot fail.
            let score = graph.degree(&code).unwrap_or(0);
            HubScore { code, score }
        })
        .collect();

    scores.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.code.cmp(&b.code)));
    scores
}

/// The `n` busiest airports.
pub fn top_hubs(graph: &RouteGraph, n: usize) -> Vec<HubScore> {
    let mut ranking = rank_hubs(graph);
    ranking.truncate(n);
    ranking
}
