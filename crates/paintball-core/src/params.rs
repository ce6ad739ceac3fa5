//! Tunable parameters governing activation spreading, stop conditions, and
//! synset promotion/extraction thresholds.

use crate::error::{PaintballError, PaintballResult};
use serde::{Deserialize, Serialize};

/// Spreading and extraction parameters.
///
/// Defaults mirror the values used throughout the worked end-to-end
/// scenarios: a 0.95 decay, a seed-admission floor of 0.5, a stop
/// threshold at a quarter of that floor, and density multipliers of 1.5
/// (small synsets) and 2.0 (synsets larger than two members).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Per-hop decay applied before transmittance/impedance, 0 < mu < 1.
    pub mu: f64,
    /// Minimum pooled activation for a node to enter the initial
    /// activation set `T`.
    pub tau_0: f64,
    /// Stop threshold: activation below this halts further spreading
    /// down a branch and contributes nothing to `Q`.
    pub epsilon: f64,
    /// Minimum pooled synset activation to become an extraction candidate.
    pub tau_3: f64,
    /// Reserved threshold for downstream consumers of lead records;
    /// not applied inside the engine itself.
    pub tau_4: f64,
    /// Density multiplier for synsets with at most two members.
    pub n1: f64,
    /// Density multiplier for synsets with more than two members.
    pub n2: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mu: 0.95,
            tau_0: 0.5,
            epsilon: 0.125,
            tau_3: 2.5,
            tau_4: 1.0,
            n1: 1.5,
            n2: 2.0,
        }
    }
}

impl Params {
    /// A narrower preset: higher admission floor and stop threshold,
    /// favoring precision over recall when fanning out from a seed.
    pub fn narrow() -> Self {
        Self {
            tau_0: 0.7,
            epsilon: 0.2,
            tau_3: 3.0,
            ..Self::default()
        }
    }

    /// A wider preset: lower admission floor, letting weaker activations
    /// survive further into the spread.
    pub fn wide() -> Self {
        Self {
            tau_0: 0.3,
            epsilon: 0.08,
            tau_3: 1.5,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> PaintballResult<()> {
        if !(self.mu > 0.0 && self.mu < 1.0) {
            return Err(PaintballError::config(format!(
                "mu must be in (0, 1), got {}",
                self.mu
            )));
        }
        if self.tau_0 < 0.0 {
            return Err(PaintballError::config("tau_0 must be non-negative"));
        }
        if self.epsilon <= 0.0 {
            return Err(PaintballError::config("epsilon must be positive"));
        }
        if self.tau_3 < 0.0 {
            return Err(PaintballError::config("tau_3 must be non-negative"));
        }
        if self.n1 <= 0.0 || self.n2 <= 0.0 {
            return Err(PaintballError::config("n1 and n2 must be positive"));
        }
        Ok(())
    }
}
