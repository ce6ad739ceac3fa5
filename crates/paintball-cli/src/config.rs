//! Application configuration: input paths and spreading parameters,
//! loadable from TOML/YAML/JSON and overridable from the CLI and
//! environment.

use anyhow::{Context, Result};
use paintball_core::Params;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The full set of inputs one run of the engine needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub knowledge_source: PathBuf,
    pub graph: PathBuf,
    pub synset_graph: PathBuf,
    pub impedance_table: PathBuf,
    pub transmittance_table: Option<PathBuf>,
    #[serde(flatten)]
    pub params: Params,
}

impl AppConfig {
    /// Loads a config document, dispatching on file extension the way
    /// `.toml`/`.yaml`/`.json` deployments of this kind of tool typically
    /// are: `.toml` and no recognized extension fall back to TOML,
    /// `.yaml`/`.yml` to YAML, `.json` to JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)
                .with_context(|| format!("parsing YAML config {}", path.display()))?,
            Some("json") => serde_json::from_str(&contents)
                .with_context(|| format!("parsing JSON config {}", path.display()))?,
            _ => toml::from_str(&contents)
                .with_context(|| format!("parsing TOML config {}", path.display()))?,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_toml_config() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
            knowledge_source = "ks"
            graph = "graph.json"
            synset_graph = "synsets.json"
            impedance_table = "impedance.csv"
            mu = 0.9
            tau_0 = 0.4
            epsilon = 0.1
            tau_3 = 2.0
            tau_4 = 1.0
            n1 = 1.5
            n2 = 2.0
            "#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.knowledge_source, PathBuf::from("ks"));
        assert_eq!(config.params.mu, 0.9);
    }

    #[test]
    fn loads_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(
            file,
            r#"{{
                "knowledge_source": "ks",
                "graph": "graph.json",
                "synset_graph": "synsets.json",
                "impedance_table": "impedance.csv",
                "mu": 0.9, "tau_0": 0.4, "epsilon": 0.1, "tau_3": 2.0, "tau_4": 1.0, "n1": 1.5, "n2": 2.0
            }}"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.graph, PathBuf::from("graph.json"));
    }
}
