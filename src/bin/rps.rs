//! Command-line front end.
//!
//! One-shot:     `rps rock`
//! Interactive:  `rps` then one gesture per line; every line is its own round.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rps_engine::{ChoiceSource, EngineConfig, GameEngine, Presenter, RoundView};

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Play rock-paper-scissors against the system")]
struct Args {
    /// Gesture to play (rock, paper, scissors). Omit to read from stdin.
    choice: Option<String>,

    /// Seed for the system's choices. Defaults to RPS_SEED, then entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Print each round as JSON.
    #[arg(long)]
    json: bool,
}

/// `--seed` wins; the environment is only consulted without it.
fn resolve_config<F>(seed: Option<u64>, lookup: F) -> Result<EngineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    match seed {
        Some(seed) => Ok(EngineConfig::new().with_seed(seed)),
        None => EngineConfig::from_lookup(lookup).context("reading environment"),
    }
}

fn render(view: &RoundView, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(view)?)?;
    } else {
        writeln!(out, "System chose {}. {}", view.system_image, view.message)?;
    }
    Ok(())
}

/// Play a single gesture; an invalid one is an error.
fn play_once<S: ChoiceSource>(
    presenter: &mut Presenter<S>,
    choice: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let view = presenter.submit(choice)?;
    render(&view, json, out)
}

/// Play one round per non-blank line. Invalid lines are reported and skipped.
fn run<S: ChoiceSource>(
    reader: impl BufRead,
    out: &mut impl Write,
    presenter: &mut Presenter<S>,
    json: bool,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match presenter.submit(&line) {
            Ok(view) => render(&view, json, out)?,
            Err(e) => {
                warn!(input = %line.trim(), "rejected input");
                writeln!(out, "{}", e)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(args.seed, |key| std::env::var(key).ok())?;

    let engine = GameEngine::new(&config);
    info!(seed = engine.source().rng().seed(), "engine ready");
    let mut presenter = Presenter::new(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.choice {
        Some(choice) => play_once(&mut presenter, &choice, args.json, &mut out),
        None => run(io::stdin().lock(), &mut out, &mut presenter, args.json),
    }
}
