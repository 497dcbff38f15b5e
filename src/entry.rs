use std::io::Write;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, info};

use crate::args::ProbeArgs;
use crate::config::{ProbeConfig, RunMode};
use crate::dispatch::run_batch;
use crate::error::{AppError, AppResult, ValidationError};
use crate::probe::{HttpProbe, Probe};
use crate::target::load_targets;

/// Parses the command line and runs the selected mode to completion.
///
/// # Errors
///
/// Returns an error for invalid or missing options, an unreadable target
/// file, or an HTTP client that cannot be built. Per-target failures are
/// never returned.
pub fn run() -> AppResult<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = match ProbeConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            if matches!(err, AppError::Validation(ValidationError::MissingTarget)) {
                ProbeArgs::command().write_help(&mut std::io::stderr())?;
            }
            return Err(err);
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(run_async(config))
}

fn parse_args() -> AppResult<Option<ProbeArgs>> {
    let matches = match ProbeArgs::command().try_get_matches_from(std::env::args_os()) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(AppError::from(err)),
    };
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok(Some(args))
}

async fn run_async(config: ProbeConfig) -> AppResult<()> {
    match &config.mode {
        RunMode::Single(target) => {
            let probe = HttpProbe::new(&config)?;
            let outcome = probe.probe(target).await;
            debug!("Single target {} finished: {}", target, outcome.kind());
            Ok(())
        }
        RunMode::Batch(path) => {
            let targets = load_targets(path)?;
            let probe = Arc::new(HttpProbe::new(&config)?);
            info!(
                "Probing {} targets with {} workers",
                targets.len(),
                config.workers
            );
            let summary = run_batch(targets, config.workers, probe).await;
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = writeln!(stdout, "{}", summary) {
                debug!("Failed to write batch summary: {}", err);
            }
            Ok(())
        }
    }
}
