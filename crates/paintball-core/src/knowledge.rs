//! Knowledge-source input types: a source lemma paired with the target
//! lemmas (and their support weight) to spread activation from.

use petgraph::graph::NodeIndex;

/// One line of a knowledge source: a source lemma and the lemma/support
/// pairs to seed activation from.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeSourceEntry {
    pub source_lemma: String,
    pub targets: Vec<(String, f64)>,
}

/// A target lemma resolved against the lexical graph: the nodes it maps
/// to (possibly empty, on a lookup miss) and its support weight.
#[derive(Debug, Clone, PartialEq)]
pub struct LemmaActivation {
    pub lemma: String,
    pub nodes: Vec<NodeIndex>,
    pub activation: f64,
}
