//! Synset promotion: pools node activation by synset and keeps only the
//! synsets that pass the density gate.

use crate::graph::SealedLexicalGraph;
use crate::model::{SynsetId, NO_SYNSET};
use crate::oracle::WordnetOracle;
use crate::params::Params;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// `delta(h, n, s) = (n >= N1*h AND s <= 2) OR (n >= N2*h AND s > 2)`
///
/// `h` is the pooling multiplier (always `1.0` from [`promote_to_synsets`]
/// but kept as a parameter so the predicate is independently testable),
/// `n` is the pooled activation, and `s` is the synset's member count.
pub fn density(h: f64, n: f64, s: usize, n1: f64, n2: f64) -> bool {
    (n >= n1 * h && s <= 2) || (n >= n2 * h && s > 2)
}

/// Pools `q` by `synset_id` (nodes with no synset, including degraded
/// nodes, are excluded) and keeps only synsets that pass [`density`].
pub fn promote_to_synsets(
    q: &HashMap<NodeIndex, f64>,
    graph: &SealedLexicalGraph,
    oracle: &dyn WordnetOracle,
    params: &Params,
) -> HashMap<SynsetId, f64> {
    let mut pooled: HashMap<SynsetId, f64> = HashMap::new();
    for (&idx, &activation) in q {
        let node = graph.node(idx);
        if node.is_degraded() {
            tracing::debug!(node = idx.index(), "degraded node skipped during synset promotion");
        }
        let synset_id = node.synset_id();
        if synset_id == NO_SYNSET {
            continue;
        }
        *pooled.entry(synset_id).or_insert(0.0) += activation;
    }

    pooled
        .into_iter()
        .filter(|&(synset_id, activation)| {
            density(1.0, activation, oracle.synset_len(synset_id), params.n1, params.n2)
        })
        .collect()
}
