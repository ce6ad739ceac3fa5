//! External data sources the engine consults but does not own: edge
//! transmittance, relation-pair impedance, and synset sizes.

mod impedance;
mod transmittance;
mod wordnet;

pub use impedance::ImpedanceTable;
pub use transmittance::TransmittanceTable;
pub use wordnet::{InMemoryWordnetOracle, WordnetOracle};
