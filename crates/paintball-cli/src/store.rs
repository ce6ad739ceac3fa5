//! Loads the lexical and synset graphs from a documented JSON format —
//! a concrete, inspectable stand-in for whatever serialized graph store a
//! production deployment would use. Not part of the activation-spreading
//! core; this is ambient plumbing so the crate runs end-to-end.

use anyhow::{Context, Result};
use paintball_core::{LexicalGraphBuilder, LexicalNode, SealedLexicalGraph, SynsetGraph, SynsetGraphBuilder, TransmittanceTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct LexicalNodeRecord {
    lu_id: Option<i64>,
    lemma: Option<String>,
    synset_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct LexicalEdgeRecord {
    source: usize,
    target: usize,
    rel_id: i32,
}

#[derive(Debug, Deserialize)]
struct LexicalGraphDocument {
    nodes: Vec<LexicalNodeRecord>,
    edges: Vec<LexicalEdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct SynsetNodeRecord {
    synset_id: i64,
    #[serde(default)]
    lu_set: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SynsetEdgeRecord {
    source: usize,
    target: usize,
}

#[derive(Debug, Deserialize)]
struct SynsetGraphDocument {
    nodes: Vec<SynsetNodeRecord>,
    edges: Vec<SynsetEdgeRecord>,
}

pub fn load_lexical_graph(path: &Path, transmittance: &TransmittanceTable) -> Result<SealedLexicalGraph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading lexical graph {}", path.display()))?;
    let document: LexicalGraphDocument = serde_json::from_str(&contents)
        .with_context(|| format!("parsing lexical graph {}", path.display()))?;

    let mut builder = LexicalGraphBuilder::new();
    let mut indices = Vec::with_capacity(document.nodes.len());
    for record in &document.nodes {
        let node = match (record.lu_id, &record.lemma, record.synset_id) {
            (Some(lu_id), Some(lemma), Some(synset_id)) => {
                LexicalNode::new(lu_id, lemma.clone(), synset_id)
            }
            _ => {
                tracing::warn!("lexical graph node missing lu/lemma/synset_id, treating as degraded");
                LexicalNode::degraded()
            }
        };
        indices.push(builder.add_node(node));
    }
    for edge in &document.edges {
        let (source, target) = match (indices.get(edge.source), indices.get(edge.target)) {
            (Some(&s), Some(&t)) => (s, t),
            _ => {
                tracing::warn!(
                    source = edge.source,
                    target = edge.target,
                    "lexical graph edge references an out-of-range node, skipping"
                );
                continue;
            }
        };
        builder.add_edge(source, target, edge.rel_id);
    }

    Ok(builder.seal(transmittance))
}

pub fn load_synset_graph(path: &Path) -> Result<SynsetGraph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading synset graph {}", path.display()))?;
    let document: SynsetGraphDocument = serde_json::from_str(&contents)
        .with_context(|| format!("parsing synset graph {}", path.display()))?;

    let mut builder = SynsetGraphBuilder::new();
    let mut indices = Vec::with_capacity(document.nodes.len());
    let mut sizes = HashMap::new();
    for record in &document.nodes {
        sizes.insert(record.synset_id, record.lu_set.len().max(1));
        indices.push(builder.add_synset(record.synset_id, record.lu_set.clone()));
    }
    for edge in &document.edges {
        if let (Some(&s), Some(&t)) = (indices.get(edge.source), indices.get(edge.target)) {
            builder.add_edge(s, t);
        } else {
            tracing::warn!(
                source = edge.source,
                target = edge.target,
                "synset graph edge references an out-of-range node, skipping"
            );
        }
    }

    Ok(builder.build())
}

/// Derives a synset-size lookup straight from an already-loaded synset
/// graph's `lu_set` lengths, for deployments that don't maintain a
/// separate wordnet oracle.
pub fn synset_sizes(graph: &SynsetGraph) -> HashMap<i64, usize> {
    graph
        .node_indices()
        .map(|idx| {
            let node = graph.node(idx);
            (node.synset_id, node.lu_set.len().max(1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_simple_two_node_lexical_graph() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "nodes": [
                    {{"lu_id": 1, "lemma": "kot", "synset_id": 100}},
                    {{"lu_id": 2, "lemma": "pies", "synset_id": 200}}
                ],
                "edges": [
                    {{"source": 0, "target": 1, "rel_id": 11}}
                ]
            }}"#
        )
        .unwrap();
        let graph = load_lexical_graph(file.path(), &TransmittanceTable::builtin()).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes_for_lemma("kot").len(), 1);
    }

    #[test]
    fn missing_lu_fields_produce_a_degraded_node() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes": [{{"lu_id": null, "lemma": null, "synset_id": null}}], "edges": []}}"#
        )
        .unwrap();
        let graph = load_lexical_graph(file.path(), &TransmittanceTable::builtin()).unwrap();
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn loads_synset_graph_with_lu_set() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "nodes": [{{"synset_id": 100, "lu_set": ["kot", "kotek"]}}],
                "edges": []
            }}"#
        )
        .unwrap();
        let graph = load_synset_graph(file.path()).unwrap();
        let idx = graph.index_of(100).unwrap();
        assert_eq!(graph.node(idx).lu_set, vec!["kot", "kotek"]);
    }

    #[test]
    fn synset_sizes_derives_from_lu_set_lengths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "nodes": [
                    {{"synset_id": 100, "lu_set": ["kot", "kotek"]}},
                    {{"synset_id": 200, "lu_set": []}}
                ],
                "edges": []
            }}"#
        )
        .unwrap();
        let graph = load_synset_graph(file.path()).unwrap();
        let sizes = synset_sizes(&graph);
        assert_eq!(sizes.get(&100), Some(&2));
        assert_eq!(sizes.get(&200), Some(&1)); // empty lu_set floors to 1
    }
}
