//! The synset graph: a separate, coarser graph over synsets (rather than
//! lexical units), used only by lead-synset extraction to find connected
//! components among candidate synsets and to recover each synset's member
//! lemmas (`lu_set`) for the final output record.

use crate::model::SynsetId;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// A node in the synset graph: the synset id and the lemmas it contains.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SynsetNode {
    pub synset_id: SynsetId,
    pub lu_set: Vec<String>,
}

#[derive(Debug, Default)]
pub struct SynsetGraphBuilder {
    graph: UnGraph<SynsetNode, ()>,
    index: HashMap<SynsetId, NodeIndex>,
}

impl SynsetGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_synset(&mut self, synset_id: SynsetId, lu_set: Vec<String>) -> NodeIndex {
        let idx = self.graph.add_node(SynsetNode { synset_id, lu_set });
        self.index.insert(synset_id, idx);
        idx
    }

    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        self.graph.add_edge(a, b, ());
    }

    pub fn build(self) -> SynsetGraph {
        SynsetGraph {
            graph: self.graph,
            index: self.index,
        }
    }
}

/// Read-only synset graph.
#[derive(Debug, Default)]
pub struct SynsetGraph {
    graph: UnGraph<SynsetNode, ()>,
    index: HashMap<SynsetId, NodeIndex>,
}

impl SynsetGraph {
    pub fn node(&self, idx: NodeIndex) -> &SynsetNode {
        &self.graph[idx]
    }

    pub fn index_of(&self, synset_id: SynsetId) -> Option<NodeIndex> {
        self.index.get(&synset_id).copied()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }
}
