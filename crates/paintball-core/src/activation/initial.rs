//! Assembly of the initial activation set `T` from resolved target lemmas.

use crate::graph::SealedLexicalGraph;
use crate::knowledge::LemmaActivation;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Pools per-lemma activation onto shared nodes (a node resolved by two
/// different target lemmas accumulates both), drops anything at or below
/// `tau_0`, and returns the survivors sorted by descending activation with
/// ties broken by ascending `lu_id` (degraded nodes, which carry no
/// `lu_id`, sort last).
pub fn assemble_initial_activation(
    graph: &SealedLexicalGraph,
    activations: &[LemmaActivation],
    tau_0: f64,
) -> Vec<(NodeIndex, f64)> {
    let mut pooled: HashMap<NodeIndex, f64> = HashMap::new();
    for activation in activations {
        for &node in &activation.nodes {
            *pooled.entry(node).or_insert(0.0) += activation.activation;
        }
    }

    let mut seeds: Vec<(NodeIndex, f64)> =
        pooled.into_iter().filter(|&(_, a)| a > tau_0).collect();

    seeds.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| lu_id_or_max(graph, a.0).cmp(&lu_id_or_max(graph, b.0)))
    });

    seeds
}

fn lu_id_or_max(graph: &SealedLexicalGraph, idx: NodeIndex) -> i64 {
    graph.node(idx).lu_id().unwrap_or(i64::MAX)
}
