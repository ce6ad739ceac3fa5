//! Ties the pipeline together: resolve a knowledge-source entry's target
//! lemmas, spread activation, promote to synsets, and extract leads.

use crate::activation::{assemble_initial_activation, promote_to_synsets, spread};
use crate::extract::extract_leads;
use crate::graph::{SealedLexicalGraph, SynsetGraph};
use crate::knowledge::{KnowledgeSourceEntry, LemmaActivation};
use crate::oracle::{ImpedanceTable, WordnetOracle};
use crate::params::Params;

/// One output record: a source lemma attached to a lead synset, carrying
/// that synset's member lemmas for downstream emission.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    pub source_lemma: String,
    pub node_id: usize,
    pub synset_id: i64,
    pub lemmas: Vec<String>,
}

/// Owns the shared, read-only resources one attachment run needs: the
/// sealed lexical graph, the synset graph, the impedance table, the
/// wordnet oracle, and the tunable parameters. Safe to share by reference
/// across source lemmas — and, under the `parallel` feature, across
/// worker threads, since every field here is `Send + Sync`.
pub struct Engine<'a> {
    graph: &'a SealedLexicalGraph,
    synset_graph: &'a SynsetGraph,
    impedance: &'a ImpedanceTable,
    oracle: &'a dyn WordnetOracle,
    params: &'a Params,
}

impl<'a> Engine<'a> {
    pub fn new(
        graph: &'a SealedLexicalGraph,
        synset_graph: &'a SynsetGraph,
        impedance: &'a ImpedanceTable,
        oracle: &'a dyn WordnetOracle,
        params: &'a Params,
    ) -> Self {
        Self {
            graph,
            synset_graph,
            impedance,
            oracle,
            params,
        }
    }

    /// Runs the full pipeline for a single knowledge-source entry,
    /// returning zero or more lead records (one per surviving connected
    /// component of candidate synsets).
    pub fn process_entry(&self, entry: &KnowledgeSourceEntry) -> Vec<LeadRecord> {
        tracing::info!(
            source = %entry.source_lemma,
            targets = entry.targets.len(),
            "spreading activation for source lemma"
        );

        let activations: Vec<LemmaActivation> = entry
            .targets
            .iter()
            .map(|(lemma, support)| {
                let nodes = self.graph.nodes_for_lemma(lemma).to_vec();
                if nodes.is_empty() {
                    tracing::warn!(%lemma, source = %entry.source_lemma, "target lemma not found in lexical graph");
                }
                LemmaActivation {
                    lemma: lemma.clone(),
                    nodes,
                    activation: *support,
                }
            })
            .collect();

        let seeds = assemble_initial_activation(self.graph, &activations, self.params.tau_0);
        if seeds.is_empty() {
            tracing::debug!(source = %entry.source_lemma, "no seed nodes survived tau_0, skipping");
            return Vec::new();
        }

        let q = spread(self.graph, self.impedance, &seeds, self.params.mu, self.params.epsilon);
        let q_synset = promote_to_synsets(&q, self.graph, self.oracle, self.params);
        let leads = extract_leads(&q_synset, self.synset_graph, self.params.tau_3);

        leads
            .into_iter()
            .map(|lead| {
                let node = self.synset_graph.node(lead.node);
                LeadRecord {
                    source_lemma: entry.source_lemma.clone(),
                    node_id: lead.node.index(),
                    synset_id: lead.synset_id,
                    lemmas: node.lu_set.clone(),
                }
            })
            .collect()
    }

    /// Runs [`process_entry`](Self::process_entry) over every entry in
    /// sequence.
    pub fn process_all(&self, entries: &[KnowledgeSourceEntry]) -> Vec<LeadRecord> {
        entries.iter().flat_map(|entry| self.process_entry(entry)).collect()
    }

    /// Runs [`process_entry`](Self::process_entry) over every entry,
    /// fanning out across a rayon thread pool. Entries are independent —
    /// each gets its own `Q`/`T`/`Q_synset` — so this only pays off when
    /// the knowledge source has enough entries to amortize the fan-out
    /// cost.
    #[cfg(feature = "parallel")]
    pub fn process_all_parallel(&self, entries: &[KnowledgeSourceEntry]) -> Vec<LeadRecord>
    where
        Self: Sync,
    {
        use rayon::prelude::*;
        entries
            .par_iter()
            .flat_map(|entry| self.process_entry(entry))
            .collect()
    }
}
