//! Transmittance oracle: `rel_id -> weight in [0, 1]`.

use crate::model::RelId;
use std::collections::HashMap;

/// Maps relation ids to the fraction of activation that survives crossing
/// an edge of that type. Unknown relation ids default to `0.0`, which acts
/// as a hard cut on that edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmittanceTable {
    weights: HashMap<RelId, f64>,
}

impl TransmittanceTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (RelId, f64)>) -> Self {
        Self {
            weights: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, rel_id: RelId) -> f64 {
        self.weights.get(&rel_id).copied().unwrap_or(0.0)
    }

    /// Consumes the table, yielding its `(rel_id, weight)` pairs — used
    /// to layer an override table on top of the built-in defaults.
    pub fn into_pairs(self) -> impl Iterator<Item = (RelId, f64)> {
        self.weights.into_iter()
    }

    /// The built-in table used when no `--transmittance-table` override is
    /// supplied: hypernymy/hyponymy, antonymy, mero-/holonymy, converse,
    /// feminity/young-being/augmentativity, and the two synonymy relation
    /// ids.
    pub fn builtin() -> Self {
        Self::from_pairs([
            (11, 1.0), // hypernymy
            (10, 0.7), // hyponymy
            (12, 0.4), // antonymy
            (14, 0.6), // meronymy
            (15, 0.6), // holonymy
            (13, 1.0), // converse
            (53, 0.7), // feminity
            (55, 0.7), // young-being
            (57, 0.7), // augmentativity
            (888, 1.0), // synonymy
            (777, 1.0), // synonymy (alternate id)
        ])
    }
}

impl Default for TransmittanceTable {
    fn default() -> Self {
        Self::builtin()
    }
}
