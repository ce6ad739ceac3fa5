//! Lead-synset extraction: threshold `Q_synset`, induce a subgraph on the
//! synset graph, decompose it into connected components (largest first),
//! and pick one "lead" node per component.

use crate::graph::SynsetGraph;
use crate::model::SynsetId;
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};

/// A representative synset chosen for one connected component of
/// surviving candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSynset {
    pub node: NodeIndex,
    pub synset_id: SynsetId,
    pub activation: f64,
}

/// Extracts one lead per connected component of the synsets in
/// `q_synset` whose activation exceeds `tau_3`.
///
/// Components are consumed largest-first; ties are broken by the
/// component's maximum-activation node, then by the smallest synset id in
/// the component. Within a chosen component, the lead is the node with
/// the highest `Q_synset` activation, ties broken by the smallest synset
/// id — both tie-break rules are pinned here since the algorithm this was
/// distilled from left them to incidental map/set iteration order.
pub fn extract_leads(
    q_synset: &HashMap<SynsetId, f64>,
    graph: &SynsetGraph,
    tau_3: f64,
) -> Vec<LeadSynset> {
    let mut remaining: HashSet<NodeIndex> = q_synset
        .iter()
        .filter(|&(_, &activation)| activation > tau_3)
        .filter_map(|(&synset_id, _)| graph.index_of(synset_id))
        .collect();

    let mut leads = Vec::new();
    while !remaining.is_empty() {
        let components = connected_components_within(graph, &remaining);
        let largest = components
            .into_iter()
            .max_by_key(|comp| component_key(comp, q_synset, graph))
            .expect("remaining is non-empty, so at least one component exists");

        let lead = choose_lead(&largest, q_synset, graph);
        for node in &largest {
            remaining.remove(node);
        }
        leads.push(lead);
    }

    leads
}

fn connected_components_within(
    graph: &SynsetGraph,
    set: &HashSet<NodeIndex>,
) -> Vec<Vec<NodeIndex>> {
    let mut seen: HashSet<NodeIndex> = HashSet::new();
    let mut ordered: Vec<NodeIndex> = set.iter().copied().collect();
    ordered.sort_by_key(|n| n.index());

    let mut components = Vec::new();
    for &start in &ordered {
        if seen.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        seen.insert(start);
        while let Some(node) = stack.pop() {
            component.push(node);
            for neighbor in graph.neighbors(node) {
                if set.contains(&neighbor) && seen.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        components.push(component);
    }
    components
}

fn component_key(
    component: &[NodeIndex],
    q_synset: &HashMap<SynsetId, f64>,
    graph: &SynsetGraph,
) -> (usize, OrderedFloat<f64>, std::cmp::Reverse<SynsetId>) {
    let size = component.len();
    let max_activation = component
        .iter()
        .map(|&n| q_synset.get(&graph.node(n).synset_id).copied().unwrap_or(0.0))
        .fold(f64::MIN, f64::max);
    let min_synset_id = component
        .iter()
        .map(|&n| graph.node(n).synset_id)
        .min()
        .expect("component is non-empty");
    (size, OrderedFloat(max_activation), std::cmp::Reverse(min_synset_id))
}

fn choose_lead(
    component: &[NodeIndex],
    q_synset: &HashMap<SynsetId, f64>,
    graph: &SynsetGraph,
) -> LeadSynset {
    component
        .iter()
        .map(|&node| {
            let synset_id = graph.node(node).synset_id;
            let activation = q_synset.get(&synset_id).copied().unwrap_or(0.0);
            LeadSynset {
                node,
                synset_id,
                activation,
            }
        })
        .max_by(|a, b| {
            a.activation
                .partial_cmp(&b.activation)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.synset_id.cmp(&a.synset_id))
        })
        .expect("component is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SynsetGraphBuilder;

    #[test]
    fn below_threshold_candidates_are_dropped() {
        let mut builder = SynsetGraphBuilder::new();
        builder.add_synset(1, vec!["a".into()]);
        let graph = builder.build();
        let q = HashMap::from([(1, 2.0)]);
        assert!(extract_leads(&q, &graph, 2.5).is_empty());
    }

    #[test]
    fn single_component_picks_max_activation_lead() {
        let mut builder = SynsetGraphBuilder::new();
        let a = builder.add_synset(1, vec!["a".into()]);
        let b = builder.add_synset(2, vec!["b".into()]);
        builder.add_edge(a, b);
        let graph = builder.build();
        let q = HashMap::from([(1, 3.0), (2, 5.0)]);
        let leads = extract_leads(&q, &graph, 2.5);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].synset_id, 2);
    }

    #[test]
    fn disjoint_components_each_produce_a_lead() {
        let mut builder = SynsetGraphBuilder::new();
        let a = builder.add_synset(1, vec!["a".into()]);
        let b = builder.add_synset(2, vec!["b".into()]);
        let _c = builder.add_synset(3, vec!["c".into()]);
        builder.add_edge(a, b);
        let graph = builder.build();
        let q = HashMap::from([(1, 3.0), (2, 3.0), (3, 3.0)]);
        let mut leads = extract_leads(&q, &graph, 2.5);
        leads.sort_by_key(|l| l.synset_id);
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].synset_id, 1); // {1,2} component: tie -> smaller id wins
        assert_eq!(leads[1].synset_id, 3);
    }

    #[test]
    fn lead_tie_breaks_on_smallest_synset_id() {
        let mut builder = SynsetGraphBuilder::new();
        let a = builder.add_synset(5, vec![]);
        let b = builder.add_synset(3, vec![]);
        builder.add_edge(a, b);
        let graph = builder.build();
        let q = HashMap::from([(5, 4.0), (3, 4.0)]);
        let leads = extract_leads(&q, &graph, 2.5);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].synset_id, 3);
    }
}
