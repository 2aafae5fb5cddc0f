//! PAS Scheduler Binary
//!
//! Command-line entry point: load a photographer roster from a JSON file,
//! find offerable free slots of the configured duration, and write the
//! resulting schedules next to the input.
//!
//! # Usage
//!
//! ```bash
//! pas-scheduler --input roster.json
//!
//! # Print the parsed roster and the computed schedules
//! pas-scheduler --input roster.json --debug
//!
//! # Use a specific configuration file
//! pas-scheduler --input roster.json --config scheduler.toml
//! ```
//!
//! # Environment Variables
//!
//! - `SLOT_DURATION_MINUTES`: Override the configured slot length
//! - `ROSTER_REPOSITORY`: Repository backend ("local")
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pas_rust::config::SchedulerConfig;
use pas_rust::db::{RepositoryFactory, RosterRepository};
use pas_rust::models::{parse_roster_json_str, render_roster, render_schedules};
use pas_rust::services::collect_available_slots;

const USAGE: &str = "Usage: pas-scheduler --input <roster.json> [--debug] [--config <scheduler.toml>]";

struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    debug: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<CliArgs> {
    let mut input = None;
    let mut config = None;
    let mut debug = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                input = Some(PathBuf::from(
                    args.next().context("--input requires a file path")?,
                ));
            }
            "--config" => {
                config = Some(PathBuf::from(
                    args.next().context("--config requires a file path")?,
                ));
            }
            "--debug" => debug = true,
            other => bail!("Unknown argument: {}\n{}", other, USAGE),
        }
    }

    let Some(input) = input else {
        bail!("Please provide an input file.\n{}", USAGE);
    };

    Ok(CliArgs {
        input,
        config,
        debug,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let args = parse_args(env::args().skip(1))?;

    let mut config = match &args.config {
        Some(path) => SchedulerConfig::from_file(path)?,
        None => SchedulerConfig::from_default_location()?,
    };
    config.apply_env_overrides()?;
    let duration = config.slot_duration()?;

    let input_text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let roster = parse_roster_json_str(&input_text)?;
    info!(
        "Loaded roster with {} photographers, requesting {} slots",
        roster.photographers.len(),
        duration
    );

    if args.debug {
        print!("{}", render_roster(&roster.photographers));
    }

    let repository = RepositoryFactory::from_env()?;
    repository.store_roster(roster).await?;

    let schedules = collect_available_slots(repository.as_ref(), duration).await?;

    let output_path = format!("{}.output", args.input.display());
    let json = serde_json::to_string_pretty(&schedules)
        .context("Failed to serialize schedules to JSON")?;
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write output file: {}", output_path))?;
    info!(
        "Saved {} candidate schedules to {}",
        schedules.len(),
        output_path
    );

    if args.debug {
        print!("{}", render_schedules(&schedules));
    }

    Ok(())
}
