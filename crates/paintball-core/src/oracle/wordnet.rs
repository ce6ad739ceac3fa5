//! Synset-size oracle used by the promotion step's density predicate.

use crate::model::SynsetId;
use std::collections::HashMap;

/// Supplies the member count of a synset. Implementations back this with
/// whatever lexical resource the deployment uses; the engine never reaches
/// into it for anything beyond a size.
pub trait WordnetOracle: Send + Sync {
    /// Number of lexical units in the given synset. Unknown or unreadable
    /// synsets must default to `1` rather than erroring — a missing
    /// member count should make a synset look small, not crash the
    /// promotion step.
    fn synset_len(&self, synset_id: SynsetId) -> usize;
}

/// An in-memory oracle backed by a precomputed `synset_id -> size` map,
/// for the common case where synset sizes are loaded up front alongside
/// the synset graph.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWordnetOracle {
    sizes: HashMap<SynsetId, usize>,
}

impl InMemoryWordnetOracle {
    pub fn new(sizes: HashMap<SynsetId, usize>) -> Self {
        Self { sizes }
    }
}

impl WordnetOracle for InMemoryWordnetOracle {
    fn synset_len(&self, synset_id: SynsetId) -> usize {
        self.sizes.get(&synset_id).copied().unwrap_or(1)
    }
}
