//! Parsers for the impedance and transmittance override tables.
//!
//! Both formats are hand-rolled rather than pulled in through a CSV
//! crate: they're a one-line header plus simple comma-separated rows,
//! matching how the original implementation these tables were distilled
//! from reads them (manual `split`, not a dataframe library).

use anyhow::{bail, Context, Result};
use paintball_core::{ImpedanceTable, RelId, TransmittanceTable};
use std::path::Path;

/// Reads a header row of relation ids followed by one row per `rel_in`,
/// each a float per `rel_out` column. A malformed row (wrong column
/// count, non-numeric cell) is skipped with a warning — missing cells
/// default to `1.0` via [`ImpedanceTable::get`] regardless.
pub fn load_impedance_table(path: &Path) -> Result<ImpedanceTable> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading impedance table {}", path.display()))?;
    let mut lines = contents.lines();

    let header = lines.next().context("impedance table is empty")?;
    let columns: Vec<RelId> = header
        .split(',')
        .skip(1)
        .map(|cell| cell.trim().parse::<RelId>())
        .collect::<std::result::Result<_, _>>()
        .context("impedance table header contains a non-integer relation id")?;

    let mut rows = Vec::new();
    for (line_no, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut cells = line.split(',');
        let rel_in: RelId = match cells.next().and_then(|c| c.trim().parse().ok()) {
            Some(rel_in) => rel_in,
            None => {
                tracing::warn!(line = line_no + 2, "impedance table row has no leading relation id, skipping");
                continue;
            }
        };
        let cells: Vec<&str> = cells.collect();
        if cells.len() != columns.len() {
            tracing::warn!(
                line = line_no + 2,
                rel_in,
                expected = columns.len(),
                found = cells.len(),
                "impedance table row has the wrong number of cells, skipping"
            );
            continue;
        }
        for (rel_out, cell) in columns.iter().zip(cells) {
            match cell.trim().parse::<f64>() {
                Ok(value) => rows.push((rel_in, *rel_out, value)),
                Err(_) => {
                    tracing::warn!(
                        line = line_no + 2,
                        rel_in,
                        rel_out,
                        "impedance table cell is not numeric, defaulting to 1.0"
                    );
                }
            }
        }
    }

    Ok(ImpedanceTable::from_rows(rows))
}

/// Reads a `rel_id,weight` override table. Falls back to the built-in
/// transmittance defaults for any relation id not present.
pub fn load_transmittance_table(path: &Path) -> Result<TransmittanceTable> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading transmittance table {}", path.display()))?;

    let mut pairs = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut cells = line.split(',');
        let (rel_id, weight) = match (cells.next(), cells.next()) {
            (Some(rel_id), Some(weight)) => (rel_id.trim(), weight.trim()),
            _ => {
                tracing::warn!(line = line_no + 1, "transmittance table row missing a field, skipping");
                continue;
            }
        };
        let rel_id: RelId = match rel_id.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(line = line_no + 1, "transmittance table relation id is not an integer, skipping");
                continue;
            }
        };
        let weight: f64 = match weight.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(line = line_no + 1, "transmittance table weight is not numeric, skipping");
                continue;
            }
        };
        if !(0.0..=1.0).contains(&weight) {
            bail!("transmittance weight for relation {rel_id} out of range [0, 1]: {weight}");
        }
        pairs.push((rel_id, weight));
    }

    let overridden = TransmittanceTable::builtin().into_pairs().chain(pairs);
    Ok(TransmittanceTable::from_pairs(overridden))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_impedance_table_with_header_and_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rel,10,11").unwrap();
        writeln!(file, "10,1.0,0.5").unwrap();
        writeln!(file, "11,0.5,1.0").unwrap();
        let table = load_impedance_table(file.path()).unwrap();
        assert_eq!(table.get(10, 11), 0.5);
        assert_eq!(table.get(11, 10), 0.5);
        assert_eq!(table.get(99, 99), 1.0);
    }

    #[test]
    fn overrides_builtin_transmittance_weight() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "11,0.25").unwrap();
        let table = load_transmittance_table(file.path()).unwrap();
        assert_eq!(table.get(11), 0.25);
        assert_eq!(table.get(10), 0.7); // untouched built-in default
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "11,1.5").unwrap();
        assert!(load_transmittance_table(file.path()).is_err());
    }
}
