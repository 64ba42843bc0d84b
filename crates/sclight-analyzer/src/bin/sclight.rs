//! Command-line front end for the snippet analyzer.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sclight_analyzer::snapshot::TagSnapshot;
use sclight_analyzer::{Analyzer, AnalyzerConfig};

/// Analyzes an SCL snippet against a tag snapshot.
#[derive(Debug, Parser)]
#[command(name = "sclight", version, about)]
struct Cli {
    /// File with the SCL snippet to analyze.
    code: PathBuf,

    /// JSON file mapping tag names to their current state.
    #[arg(long, short = 's')]
    snapshot: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Emit the full structured result as JSON instead of the narrative.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = std::fs::read_to_string(&cli.code)
        .with_context(|| format!("reading code file {}", cli.code.display()))?;

    let snapshot = match &cli.snapshot {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot file {}", path.display()))?;
            serde_json::from_str::<TagSnapshot>(&text)
                .with_context(|| format!("parsing snapshot file {}", path.display()))?
        }
        None => TagSnapshot::new(),
    };

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("loading config file {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let analyzer = Analyzer::with_config(config);
    let result = analyzer.analyze(&code, &snapshot);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.narrative);
        if !result.diagnostics.is_empty() {
            tracing::warn!(count = result.diagnostics.len(), "run produced diagnostics");
        }
    }
    Ok(())
}
