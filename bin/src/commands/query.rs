//! Query command implementation.
//!
//! Runs every selected combination against the history endpoint and prints
//! a report block per request.

use anyhow::{Context, Result};
use gexhist_lib::prelude::*;
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Query the history endpoint for every combination of the settings.
pub(crate) async fn query(
    settings: Settings,
    concurrency: usize,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let combinations = settings.selection.combinations();

    let config = ClientConfig {
        timeout: timeout_secs.map(Duration::from_secs),
        ..ClientConfig::from_settings(&settings)
    };
    let runner = Runner::new(config, settings.date).with_concurrency(concurrency);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match runner.run(&combinations, &mut out).await {
        Ok(summary) => {
            info!(%summary, "done");
            Ok(())
        }
        // The runner has already printed the configuration error.
        Err(RunError::Config(_)) => {
            out.flush()?;
            std::process::exit(1);
        }
        Err(e) => Err(e).context("History query failed"),
    }
}
