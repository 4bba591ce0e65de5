// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use clap::Parser;
use lexicon_lib::app::{self, AppError};
use lexicon_lib::config::Settings;
use lexicon_lib::{logging, shutdown};
use std::path::PathBuf;
use std::process::ExitCode;

/// Forward word lookups to a dictionary service over HTTP
#[derive(Debug, Parser)]
#[command(name = "aggregator-service", version)]
struct Args {
    /// Settings file (defaults to <config dir>/lexicon/settings.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:9090
    #[arg(long)]
    bind: Option<String>,

    /// Base URL of the dictionary service
    #[arg(long)]
    dictionary_url: Option<String>,

    /// Per-request timeout for dictionary service calls, in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

fn settings(args: Args) -> Result<Settings, AppError> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_env_overrides();

    if let Some(bind) = args.bind {
        settings.aggregator.bind_addr = bind;
    }
    if let Some(url) = args.dictionary_url {
        settings.aggregator.dictionary_url = url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        settings.aggregator.request_timeout_ms = Some(timeout_ms);
    }
    if let Some(level) = args.log_level {
        settings.log.level = Some(level);
    }

    settings.validate_aggregator()?;
    Ok(settings)
}

async fn run(args: Args) -> Result<(), AppError> {
    let settings = settings(args)?;
    logging::init(&settings.log, "aggregator")?;
    lexicon_lib::info!("Starting aggregator service");

    let signal = shutdown::install_ctrl_c_handler();
    app::run_aggregator_service(&settings, signal).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            lexicon_lib::error!("{}", e);
            eprintln!("aggregator-service: {}", e);
            ExitCode::FAILURE
        }
    }
}
