// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use clap::Parser;
use lexicon_lib::app::{self, AppError};
use lexicon_lib::config::Settings;
use lexicon_lib::{logging, shutdown};
use std::path::PathBuf;
use std::process::ExitCode;

/// Serve exact and pattern word lookups over HTTP
#[derive(Debug, Parser)]
#[command(name = "dictionary-service", version)]
struct Args {
    /// Settings file (defaults to <config dir>/lexicon/settings.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:9091
    #[arg(long)]
    bind: Option<String>,

    /// JSON word file; the embedded seed dictionary is used otherwise
    #[arg(long)]
    words: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

fn settings(args: Args) -> Result<Settings, AppError> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_env_overrides();

    if let Some(bind) = args.bind {
        settings.dictionary.bind_addr = bind;
    }
    if let Some(words) = args.words {
        settings.dictionary.words_path = Some(words);
    }
    if let Some(level) = args.log_level {
        settings.log.level = Some(level);
    }

    settings.validate_dictionary()?;
    Ok(settings)
}

async fn run(args: Args) -> Result<(), AppError> {
    let settings = settings(args)?;
    logging::init(&settings.log, "dictionary")?;
    lexicon_lib::info!("Starting dictionary service");

    let signal = shutdown::install_ctrl_c_handler();
    app::run_dictionary_service(&settings, signal).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            lexicon_lib::error!("{}", e);
            eprintln!("dictionary-service: {}", e);
            ExitCode::FAILURE
        }
    }
}
