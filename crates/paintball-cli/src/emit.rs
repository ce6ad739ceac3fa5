//! Formats [`LeadRecord`]s for output. Kept as a pure function so the
//! line format can be tested without touching stdout.

use paintball_core::LeadRecord;

/// `source_lemma;node_id;synset_id;[lemma1,lemma2,...]`
pub fn format_record(record: &LeadRecord) -> String {
    let lemmas = record.lemmas.join(",");
    format!(
        "{};{};{};[{}]",
        record.source_lemma, record.node_id, record.synset_id, lemmas
    )
}
