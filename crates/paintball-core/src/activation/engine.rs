//! The two-level recursive spreading algorithm (`act_replication` /
//! `act_rep_trans`), implemented with an explicit work stack instead of
//! native recursion so a long branch can't blow the call stack.

use crate::graph::SealedLexicalGraph;
use crate::model::RelId;
use crate::oracle::ImpedanceTable;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// A pending `act_rep_trans` call: the node we arrived from, the relation
/// we arrived by, the node we're now at, and the activation carried in.
struct Frame {
    prev: NodeIndex,
    arrived_rel_id: RelId,
    here: NodeIndex,
    activation: f64,
}

/// One item of the explicit work stack: either a call still to be made, or
/// a marker recording that a call's children have all been dispatched and
/// it's time to add its own contribution to `Q` — the iterative stand-in
/// for "control returns to this recursive call after its children return".
enum StackItem {
    Visit(Frame),
    Finish { here: NodeIndex, activation: f64 },
}

/// Spreads activation from every seed in `seeds` across `graph`, two
/// levels deep, accumulating additive contributions into the returned
/// `node -> activation` map.
///
/// For each seed `(n, a)` with `a > epsilon`, Level 0 fans out across
/// `n`'s incident edges with `f_T(e, mu * a)`. Every subsequent hop is
/// Level 1: it stops immediately if stepping back lands on the immediate
/// predecessor (a self-loop, or retracing the edge just crossed) or if
/// the carried activation has fallen to or below `epsilon`; otherwise it
/// fans out across the current node's incident edges with
/// `f_I(rel_in, rel_out) * f_T(edge_out, mu * a)` and only *after* every
/// child call has fully returned does it add its own activation to `Q`
/// for the current node — the same postorder a native recursive
/// implementation of `act_rep_trans` would produce, so that a node
/// reached along converging paths of different depths accumulates its
/// addends in the same order true recursion would.
pub fn spread(
    graph: &SealedLexicalGraph,
    impedance: &ImpedanceTable,
    seeds: &[(NodeIndex, f64)],
    mu: f64,
    epsilon: f64,
) -> HashMap<NodeIndex, f64> {
    let mut q: HashMap<NodeIndex, f64> = HashMap::new();
    let mut stack: Vec<StackItem> = Vec::new();

    for &(seed, a_seed) in seeds {
        if a_seed < epsilon {
            continue;
        }
        for incident in graph.incident_edges(seed) {
            let a1 = incident.weight * (mu * a_seed);
            stack.push(StackItem::Visit(Frame {
                prev: seed,
                arrived_rel_id: incident.rel_id,
                here: incident.other,
                activation: a1,
            }));
        }

        while let Some(item) = stack.pop() {
            let frame = match item {
                StackItem::Finish { here, activation } => {
                    *q.entry(here).or_insert(0.0) += activation;
                    continue;
                }
                StackItem::Visit(frame) => frame,
            };

            if frame.here == frame.prev {
                continue;
            }
            if frame.activation < epsilon {
                continue;
            }

            // Push the finish marker before any children: the stack is
            // LIFO, so every child (and its whole subtree) pops and
            // finishes before this marker does, matching the order a
            // native call would return in.
            stack.push(StackItem::Finish {
                here: frame.here,
                activation: frame.activation,
            });

            for incident in graph.incident_edges(frame.here) {
                // Don't step straight back to the node this hop arrived
                // from: that's the immediate-predecessor cut, distinct
                // from the self-loop check above (which catches a
                // self-loop taken as the *arriving* edge, one level up).
                if incident.other == frame.prev {
                    continue;
                }
                let transmitted = incident.weight * (mu * frame.activation);
                let carried =
                    impedance.get(frame.arrived_rel_id, incident.rel_id) * transmitted;
                stack.push(StackItem::Visit(Frame {
                    prev: frame.here,
                    arrived_rel_id: incident.rel_id,
                    here: incident.other,
                    activation: carried,
                }));
            }
        }
    }

    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LexicalGraphBuilder;
    use crate::model::LexicalNode;
    use crate::oracle::TransmittanceTable;

    fn two_two_impedance() -> ImpedanceTable {
        ImpedanceTable::from_rows([(10, 11, 0.5), (11, 10, 0.5)])
    }

    #[test]
    fn single_seed_with_no_neighbors_yields_empty_q() {
        let mut builder = LexicalGraphBuilder::new();
        let seed = builder.add_node(LexicalNode::new(1, "samotny", 1));
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(seed, 1.0)], 0.95, 0.125);
        assert!(q.is_empty());
    }

    #[test]
    fn two_hop_hypernymy_chain_matches_worked_values() {
        let mut builder = LexicalGraphBuilder::new();
        let b = builder.add_node(LexicalNode::new(1, "b", 1));
        let c = builder.add_node(LexicalNode::new(2, "c", 2));
        let d = builder.add_node(LexicalNode::new(3, "d", 3));
        builder.add_edge(b, c, 11);
        builder.add_edge(c, d, 11);
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(b, 1.0)], 0.95, 0.125);

        assert!((q[&c] - 0.95).abs() < 1e-9);
        assert!((q[&d] - 0.9025).abs() < 1e-9);
        assert!(!q.contains_key(&b));
    }

    #[test]
    fn impedance_brakes_activation_across_relation_change() {
        let mut builder = LexicalGraphBuilder::new();
        let b = builder.add_node(LexicalNode::new(1, "b", 1));
        let c = builder.add_node(LexicalNode::new(2, "c", 2));
        let d = builder.add_node(LexicalNode::new(3, "d", 3));
        builder.add_edge(b, c, 11);
        builder.add_edge(c, d, 10);
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(b, 1.0)], 0.95, 0.125);

        assert!((q[&c] - 0.95).abs() < 1e-9);
        assert!((q[&d] - 0.315875).abs() < 1e-9);
    }

    #[test]
    fn self_loop_is_cut_and_contributes_nothing() {
        let mut builder = LexicalGraphBuilder::new();
        let n = builder.add_node(LexicalNode::new(1, "n", 1));
        builder.add_edge(n, n, 11);
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(n, 1.0)], 0.95, 0.125);
        assert!(q.is_empty());
    }

    #[test]
    fn seed_below_epsilon_never_spreads() {
        let mut builder = LexicalGraphBuilder::new();
        let b = builder.add_node(LexicalNode::new(1, "b", 1));
        let c = builder.add_node(LexicalNode::new(2, "c", 2));
        builder.add_edge(b, c, 11);
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(b, 0.1)], 0.95, 0.125);
        assert!(q.is_empty());
    }

    #[test]
    fn zero_weight_transmittance_acts_as_hard_cut() {
        let mut builder = LexicalGraphBuilder::new();
        let b = builder.add_node(LexicalNode::new(1, "b", 1));
        let c = builder.add_node(LexicalNode::new(2, "c", 2));
        builder.add_edge(b, c, 9999); // unknown relation -> weight 0.0
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(b, 1.0)], 0.95, 0.125);
        assert!(q.is_empty());
    }

    #[test]
    fn converging_paths_of_different_depth_still_sum_correctly() {
        // b -> c -> e, and b -> d -> e: e receives contributions along
        // two paths of the same depth, but c and d each also accumulate
        // their own Q entry from e's dispatch having to fully finish
        // first under postorder accumulation.
        let mut builder = LexicalGraphBuilder::new();
        let b = builder.add_node(LexicalNode::new(1, "b", 1));
        let c = builder.add_node(LexicalNode::new(2, "c", 2));
        let d = builder.add_node(LexicalNode::new(3, "d", 3));
        let e = builder.add_node(LexicalNode::new(4, "e", 4));
        builder.add_edge(b, c, 11);
        builder.add_edge(b, d, 11);
        builder.add_edge(c, e, 11);
        builder.add_edge(d, e, 11);
        let graph = builder.seal(&TransmittanceTable::builtin());

        let q = spread(&graph, &two_two_impedance(), &[(b, 1.0)], 0.95, 0.125);

        let expected_c = 1.0 * (0.95 * 1.0);
        let expected_d = expected_c;
        let expected_e_per_path = 1.0 * (0.95 * expected_c);
        assert!((q[&c] - expected_c).abs() < 1e-9);
        assert!((q[&d] - expected_d).abs() < 1e-9);
        assert!((q[&e] - 2.0 * expected_e_per_path).abs() < 1e-9);
    }
}
