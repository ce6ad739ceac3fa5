//! Spreading-activation engine for attaching lemmas to a lexical-semantic
//! network.
//!
//! Given a source lemma and a set of activation-bearing target lemmas,
//! [`Engine::process_entry`] spreads weighted activation two hops out
//! across a relation-typed [`SealedLexicalGraph`], pools the result by
//! synset, gates each synset through a density predicate, and extracts
//! one representative "lead" synset per connected component of the
//! surviving candidates.
//!
//! ```ignore
//! use paintball_core::{
//!     Engine, ImpedanceTable, InMemoryWordnetOracle, KnowledgeSourceEntry,
//!     LexicalGraphBuilder, Params, SynsetGraphBuilder, TransmittanceTable,
//! };
//!
//! let lexical = LexicalGraphBuilder::new().seal(&TransmittanceTable::builtin());
//! let synsets = SynsetGraphBuilder::new().build();
//! let impedance = ImpedanceTable::default();
//! let oracle = InMemoryWordnetOracle::default();
//! let params = Params::default();
//! let engine = Engine::new(&lexical, &synsets, &impedance, &oracle, &params);
//!
//! let entry = KnowledgeSourceEntry { source_lemma: "kot".into(), targets: vec![] };
//! let leads = engine.process_entry(&entry);
//! ```

mod activation;
mod error;
mod extract;
mod graph;
mod knowledge;
mod model;
mod oracle;
mod orchestrator;
mod params;

pub use activation::{assemble_initial_activation, density, promote_to_synsets, spread};
pub use error::{PaintballError, PaintballResult};
pub use extract::{extract_leads, LeadSynset};
pub use graph::{Incident, LexicalGraphBuilder, SealedLexicalGraph, SynsetGraph, SynsetGraphBuilder, SynsetNode};
pub use knowledge::{KnowledgeSourceEntry, LemmaActivation};
pub use model::{LexicalEdge, LexicalNode, LexicalUnit, LuId, RelId, SynsetId, NO_SYNSET};
pub use oracle::{ImpedanceTable, InMemoryWordnetOracle, TransmittanceTable, WordnetOracle};
pub use orchestrator::{Engine, LeadRecord};
pub use params::Params;
