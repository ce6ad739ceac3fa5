//! Activation spreading: seed assembly, the two-level recursive spread,
//! and synset promotion.

mod engine;
mod initial;
mod promote;

pub use engine::spread;
pub use initial::assemble_initial_activation;
pub use promote::{density, promote_to_synsets};
