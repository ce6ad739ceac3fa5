//! `paintball` — spreads activation from a knowledge source across a
//! lexical-semantic network and prints the attached lead synsets.
//!
//! # Configuration
//!
//! Paths and spreading parameters can come from a `--config` file
//! (TOML/YAML/JSON), from the matching CLI flags, or from a `.env` file
//! in the working directory — CLI flags win over the config file.

mod config;
mod emit;
mod knowledge_loader;
mod store;
mod tables;

use anyhow::{Context, Result};
use clap::Parser;
use config::AppConfig;
use paintball_core::{Engine, InMemoryWordnetOracle, Params, TransmittanceTable};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Spread activation from a knowledge source across a lexical-semantic
/// network and print the attached lead synsets.
#[derive(Debug, Parser)]
#[command(name = "paintball", version, about)]
struct Cli {
    /// Directory of knowledge-source files (`source;target;support` lines).
    #[arg(long)]
    knowledge_source: Option<PathBuf>,

    /// Path to the lexical graph JSON document.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Path to the synset graph JSON document.
    #[arg(long)]
    synset_graph: Option<PathBuf>,

    /// Path to the impedance table CSV.
    #[arg(long)]
    impedance_table: Option<PathBuf>,

    /// Path to a transmittance override table; falls back to the
    /// built-in defaults for relations it doesn't mention.
    #[arg(long)]
    transmittance_table: Option<PathBuf>,

    /// Path to a TOML/YAML/JSON config file providing any of the above.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fan entries out across a thread pool instead of processing them
    /// in sequence. Requires the `parallel` feature (on by default for
    /// this binary).
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v for debug, -vv for trace). Overridden
    /// by `RUST_LOG` when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    if let Some(path) = cli.knowledge_source {
        config.knowledge_source = path;
    }
    if let Some(path) = cli.graph {
        config.graph = path;
    }
    if let Some(path) = cli.synset_graph {
        config.synset_graph = path;
    }
    if let Some(path) = cli.impedance_table {
        config.impedance_table = path;
    }
    if let Some(path) = cli.transmittance_table {
        config.transmittance_table = Some(path);
    }

    config
        .params
        .validate()
        .map_err(|err| anyhow::anyhow!(err.to_string()))
        .context("invalid spreading parameters")?;

    run(config, cli.parallel)
}

fn run(config: AppConfig, parallel: bool) -> Result<()> {
    let transmittance = match &config.transmittance_table {
        Some(path) => tables::load_transmittance_table(path)?,
        None => TransmittanceTable::builtin(),
    };
    let impedance = tables::load_impedance_table(&config.impedance_table)?;
    let lexical_graph = store::load_lexical_graph(&config.graph, &transmittance)?;
    let synset_graph = store::load_synset_graph(&config.synset_graph)?;
    let oracle = InMemoryWordnetOracle::new(store::synset_sizes(&synset_graph));
    let entries = knowledge_loader::load_dir(&config.knowledge_source)?;

    tracing::info!(entries = entries.len(), "loaded knowledge source");

    let params: Params = config.params;
    let engine = Engine::new(&lexical_graph, &synset_graph, &impedance, &oracle, &params);

    let records = if parallel {
        #[cfg(feature = "parallel")]
        {
            engine.process_all_parallel(&entries)
        }
        #[cfg(not(feature = "parallel"))]
        {
            anyhow::bail!("--parallel requires the paintball-cli `parallel` feature");
        }
    } else {
        engine.process_all(&entries)
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    use std::io::Write;
    for record in &records {
        writeln!(handle, "{}", emit::format_record(record))?;
    }

    Ok(())
}
