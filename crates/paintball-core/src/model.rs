//! Node and edge payloads carried by the lexical graph.

use serde::{Deserialize, Serialize};

/// Identifier for a lexical unit, as assigned by the upstream lexicon.
pub type LuId = i64;

/// Identifier for a synset. `-1` is the sentinel meaning "no synset".
pub type SynsetId = i64;

/// Identifier for an edge relation type, used to key the transmittance and
/// impedance tables.
pub type RelId = i32;

/// Sentinel synset id meaning "this node carries no synset".
pub const NO_SYNSET: SynsetId = -1;

/// The lexical-unit payload of a well-formed node: an id, its surface
/// lemma, and the synset it belongs to (or [`NO_SYNSET`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalUnit {
    pub lu_id: LuId,
    pub lemma: String,
    pub synset_id: SynsetId,
}

/// A node in the lexical graph.
///
/// `lu` is `None` for a degraded node: one loaded from a source record
/// missing the `lu_id`/`lemma`/`synset_id` fields it should have had. The
/// engine tolerates such nodes rather than rejecting the whole graph —
/// they simply carry no lemma to resolve against and no synset to promote
/// into, and are logged wherever that matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LexicalNode {
    pub lu: Option<LexicalUnit>,
}

impl LexicalNode {
    pub fn new(lu_id: LuId, lemma: impl Into<String>, synset_id: SynsetId) -> Self {
        Self {
            lu: Some(LexicalUnit {
                lu_id,
                lemma: lemma.into(),
                synset_id,
            }),
        }
    }

    /// A node carrying no `lu` metadata at all.
    pub fn degraded() -> Self {
        Self { lu: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.lu.is_none()
    }

    pub fn synset_id(&self) -> SynsetId {
        self.lu.as_ref().map(|lu| lu.synset_id).unwrap_or(NO_SYNSET)
    }

    pub fn lu_id(&self) -> Option<LuId> {
        self.lu.as_ref().map(|lu| lu.lu_id)
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lu.as_ref().map(|lu| lu.lemma.as_str())
    }
}

/// An edge in the lexical graph: the relation type that determines its
/// transmittance, plus the transmittance value itself once the graph has
/// been sealed (see [`crate::graph::LexicalGraphBuilder::seal`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEdge {
    pub rel_id: RelId,
    /// Transmittance weight for this relation, bound in at seal time.
    /// `0.0` until sealed.
    pub weight: f64,
}

impl LexicalEdge {
    pub fn new(rel_id: RelId) -> Self {
        Self { rel_id, weight: 0.0 }
    }
}
