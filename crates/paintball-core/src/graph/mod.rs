//! Graph adapters: the lexical graph spreading runs over, and the coarser
//! synset graph lead extraction runs over.

mod lexical;
mod synset;

pub use lexical::{Incident, LexicalGraphBuilder, SealedLexicalGraph};
pub use synset::{SynsetGraph, SynsetGraphBuilder, SynsetNode};
