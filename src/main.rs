use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;

use alarmtriage::config::ScoringConfig;
use alarmtriage::error::LoadError;
use alarmtriage::input;
use alarmtriage::output::{self, OutputFormat};
use alarmtriage::scoring::Prioritizer;

#[derive(Parser, Debug)]
#[command(name = "alarmtriage")]
#[command(version)]
#[command(about = "Rank active network alarms by composite urgency", long_about = None)]
struct Args {
    /// Path to the JSON alarm dump
    #[arg(long, value_name = "FILE", default_value = "data/sample_alarms.json")]
    input: PathBuf,

    /// Path to the scoring configuration
    #[arg(long, value_name = "FILE", default_value = "config/scoring.json")]
    config: PathBuf,

    /// Write the result to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep only the N highest-ranked alarms
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Evaluation instant as RFC 3339 (defaults to the current time)
    #[arg(long, value_name = "TIMESTAMP")]
    now: Option<DateTime<Utc>>,
}

fn main() -> ExitCode {
    // Initialize logger with millisecond precision timestamps
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            // Loader failures keep their distinct exit codes; anything
            // else is a generic failure.
            let code = err.downcast_ref::<LoadError>().map_or(1, LoadError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = ScoringConfig::load(&args.config)?;
    let alarms = input::load_alarms(&args.input)?;

    let now = args.now.unwrap_or_else(Utc::now);
    log::debug!("Evaluating {} alarms at {now}", alarms.len());

    let prioritizer = Prioritizer::new(config);
    let ranked = prioritizer.prioritize(&alarms, now, args.top);

    let rendered = output::render(&ranked, args.format)?;
    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
