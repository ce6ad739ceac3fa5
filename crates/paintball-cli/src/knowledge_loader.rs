//! Parses a knowledge-source directory into [`KnowledgeSourceEntry`]
//! values. Each line of each file is `source<SEP>target<SEP>support`
//! where `<SEP>` is `;` or a tab; lines that fail to split into exactly
//! three fields, or whose support isn't a float, are skipped with a
//! warning (the `InputMalformed` policy) rather than aborting the run.

use anyhow::{Context, Result};
use paintball_core::KnowledgeSourceEntry;
use std::collections::HashMap;
use std::path::Path;

pub fn load_dir(dir: &Path) -> Result<Vec<KnowledgeSourceEntry>> {
    let mut grouped: HashMap<String, Vec<(String, f64)>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("reading knowledge-source directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    for path in paths {
        let contents = std::fs::read_to_string(&path)?;
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((source, target, support)) => {
                    if !grouped.contains_key(&source) {
                        order.push(source.clone());
                    }
                    grouped.entry(source).or_default().push((target, support));
                }
                None => {
                    tracing::warn!(
                        file = %path.display(),
                        line = line_no + 1,
                        "malformed knowledge-source line, skipping"
                    );
                }
            }
        }
    }

    Ok(order
        .into_iter()
        .map(|source_lemma| KnowledgeSourceEntry {
            targets: grouped.remove(&source_lemma).unwrap_or_default(),
            source_lemma,
        })
        .collect())
}

fn parse_line(line: &str) -> Option<(String, String, f64)> {
    let sep = if line.contains(';') { ';' } else { '\t' };
    let mut fields = line.splitn(3, sep);
    let source = fields.next()?.trim();
    let target = fields.next()?.trim();
    let support = fields.next()?.trim();
    if source.is_empty() || target.is_empty() {
        return None;
    }
    let support: f64 = support.parse().ok()?;
    Some((source.to_string(), target.to_string(), support))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_separated_line() {
        let parsed = parse_line("kot;ssak;0.8").unwrap();
        assert_eq!(parsed, ("kot".to_string(), "ssak".to_string(), 0.8));
    }

    #[test]
    fn parses_tab_separated_line() {
        let parsed = parse_line("kot\tssak\t0.8").unwrap();
        assert_eq!(parsed, ("kot".to_string(), "ssak".to_string(), 0.8));
    }

    #[test]
    fn rejects_line_with_non_numeric_support() {
        assert!(parse_line("kot;ssak;nie-liczba").is_none());
    }

    #[test]
    fn rejects_line_missing_a_field() {
        assert!(parse_line("kot;ssak").is_none());
    }

    #[test]
    fn groups_multiple_lines_under_the_same_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.tsv"), "kot;ssak;0.8\nkot;zwierze;0.4\n").unwrap();
        let entries = load_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source_lemma, "kot");
        assert_eq!(entries[0].targets.len(), 2);
    }

    #[test]
    fn skips_malformed_lines_without_failing_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.tsv"), "kot;ssak;0.8\nbroken-line\n").unwrap();
        let entries = load_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].targets.len(), 1);
    }
}
