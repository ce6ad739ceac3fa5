//! Impedance oracle: interference between an arrival relation and the next
//! relation taken out of a node, keyed `(rel_id_in, rel_id_out) -> float`.

use crate::model::RelId;
use std::collections::HashMap;

/// Sparse `(rel_in, rel_out) -> multiplier` table. A pair absent from the
/// table defaults to `1.0` (no interference).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImpedanceTable {
    multipliers: HashMap<(RelId, RelId), f64>,
}

impl ImpedanceTable {
    pub fn from_rows(rows: impl IntoIterator<Item = (RelId, RelId, f64)>) -> Self {
        Self {
            multipliers: rows.into_iter().map(|(a, b, v)| ((a, b), v)).collect(),
        }
    }

    pub fn get(&self, rel_in: RelId, rel_out: RelId) -> f64 {
        self.multipliers.get(&(rel_in, rel_out)).copied().unwrap_or(1.0)
    }
}
