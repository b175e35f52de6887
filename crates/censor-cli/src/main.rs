mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use censor_config::Config;
use censor_engine::{BatchDriver, StatsSink};
use censor_ner::{Detector, LexiconRecognizer};
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Load the recognizer once, before any file is touched
    let model = cli.model.as_deref().or(config.recognizer.model.as_deref());
    let recognizer = load_recognizer(model)?;

    let driver = BatchDriver::new(Detector::new(recognizer), &cli.output)
        .with_keep_going(cli.keep_going || config.keep_going);

    let summary = driver
        .run(cli.input.as_slice(), cli.flags())
        .context("Censoring failed")?;

    StatsSink::from_arg(cli.stats.as_deref())
        .write_report(&summary.stats)
        .context("Failed to write statistics")?;

    if !summary.failures.is_empty() {
        anyhow::bail!(
            "{} file(s) could not be censored",
            summary.failures.len()
        );
    }

    Ok(())
}

fn load_recognizer(model: Option<&Path>) -> Result<LexiconRecognizer> {
    let recognizer = match model {
        Some(path) => LexiconRecognizer::from_path(path),
        None => LexiconRecognizer::builtin(),
    }
    .context("Failed to load entity recognizer")?;

    tracing::info!(model = recognizer.name(), "Entity recognizer ready");
    Ok(recognizer)
}
