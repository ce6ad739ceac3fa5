//! The lexical graph: nodes carry lexical units, edges carry relation
//! types. Built mutably via [`LexicalGraphBuilder`], then sealed into a
//! read-only, `Send + Sync` [`SealedLexicalGraph`] shared by reference
//! across the spreading pass (and across worker threads under the
//! `parallel` feature).

use crate::model::{LexicalEdge, LexicalNode, RelId};
use crate::oracle::TransmittanceTable;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// One edge incident to a node, viewed from that node's side: the node at
/// the other end, the relation id, and the transmittance weight. Incident
/// edges are collected irrespective of storage direction — the graph is
/// spread over as if undirected, per the engine's traversal semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    pub other: NodeIndex,
    pub rel_id: RelId,
    pub weight: f64,
}

/// Mutable builder for a lexical graph. Accumulates nodes and edges, then
/// is consumed by [`seal`](Self::seal) to bind transmittance weights once.
#[derive(Debug, Default)]
pub struct LexicalGraphBuilder {
    graph: DiGraph<LexicalNode, LexicalEdge>,
    lemma_index: HashMap<String, Vec<NodeIndex>>,
}

impl LexicalGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: LexicalNode) -> NodeIndex {
        let lemma = node.lemma().map(|l| l.to_string());
        let idx = self.graph.add_node(node);
        if let Some(lemma) = lemma {
            self.lemma_index.entry(lemma).or_default().push(idx);
        }
        idx
    }

    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, rel_id: RelId) {
        self.graph.add_edge(source, target, LexicalEdge::new(rel_id));
    }

    /// Binds `edge.weight` from the transmittance table for every edge,
    /// then freezes the graph for read-only, shared access. This is the
    /// one-shot mutation the engine performs on construction; after it,
    /// the graph is never mutated again.
    pub fn seal(mut self, transmittance: &TransmittanceTable) -> SealedLexicalGraph {
        for edge in self.graph.edge_weights_mut() {
            edge.weight = transmittance.get(edge.rel_id);
        }
        SealedLexicalGraph {
            graph: self.graph,
            lemma_index: self.lemma_index,
        }
    }
}

/// Read-only, `Send + Sync` view of a lexical graph. Cheaply shareable
/// (wrap in `Arc` to fan out under the `parallel` feature).
#[derive(Debug, Default)]
pub struct SealedLexicalGraph {
    graph: DiGraph<LexicalNode, LexicalEdge>,
    lemma_index: HashMap<String, Vec<NodeIndex>>,
}

impl SealedLexicalGraph {
    pub fn node(&self, idx: NodeIndex) -> &LexicalNode {
        &self.graph[idx]
    }

    /// Every node index whose lemma matches `lemma` (case-sensitive,
    /// exact match — normalization belongs to the caller). Empty when the
    /// lemma is unresolved; callers treat that as a `LookupMiss`.
    pub fn nodes_for_lemma(&self, lemma: &str) -> &[NodeIndex] {
        self.lemma_index
            .get(lemma)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All edges incident to `node`, combining outgoing and incoming so
    /// the graph reads as undirected for spreading purposes.
    pub fn incident_edges(&self, node: NodeIndex) -> impl Iterator<Item = Incident> + '_ {
        let outgoing = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| Incident {
                other: e.target(),
                rel_id: e.weight().rel_id,
                weight: e.weight().weight,
            });
        let incoming = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .map(|e| Incident {
                other: e.source(),
                rel_id: e.weight().rel_id,
                weight: e.weight().weight,
            });
        outgoing.chain(incoming)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
