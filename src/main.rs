//! basis_scan entry point
//!
//! Orchestrates:
//! 1. Config + logging initialization
//! 2. VenueRegistry → one REST adapter per configured exchange
//! 3. Scan cycle: universe → pairs → quotes → spreads
//! 4. Optional repeat on an interval with Ctrl+C graceful shutdown

use std::time::Duration;

use tokio::signal;
use tracing::{error, info};

use basis_scan::adapters::VenueRegistry;
use basis_scan::config::{config_path_from_env, init_logging, load_config};
use basis_scan::core::{run_cycle, scan_loop, CycleOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // =========================================================================
    // 1. Config + logging
    // =========================================================================
    dotenvy::dotenv().ok();
    init_logging();

    let config_path = config_path_from_env();

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %config_path.display(), error = %e, "Configuration failed");
            std::process::exit(1);
        }
    };

    info!(
        path = %config_path.display(),
        exchanges = config.exchanges.len(),
        quote = %config.filters.quote,
        min_spread_percent = config.arbitrage.min_spread_percent,
        "Config loaded"
    );

    // =========================================================================
    // 2. Adapters
    // =========================================================================
    let registry = VenueRegistry::from_config(&config);
    info!(count = registry.len(), "Exchange adapters ready");

    // =========================================================================
    // 3. Scan (single pass, or until Ctrl+C)
    // =========================================================================
    let Some(interval_secs) = config.arbitrage.scan_interval_secs else {
        print_outcome(run_cycle(&config, &registry, &registry).await);
        return Ok(());
    };

    info!(interval_secs, "Scanning on interval, Ctrl+C to stop");
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
        }
        info!("Shutdown signal received");
    };

    scan_loop(
        &config,
        &registry,
        &registry,
        Duration::from_secs(interval_secs),
        shutdown,
        print_outcome,
    )
    .await;

    info!("Shutdown complete");
    Ok(())
}

/// Print one cycle's outcome on stdout
fn print_outcome(outcome: CycleOutcome) {
    match outcome {
        CycleOutcome::NoCommonSymbols { .. } => {
            println!("No common symbols across the configured spot and futures markets");
        }
        CycleOutcome::NoData { skipped } => {
            println!("Market data unavailable: {} catalog fetches failed", skipped.len());
            for skip in &skipped {
                println!("  {}", skip);
            }
        }
        CycleOutcome::Scanned(report) => {
            for m in &report.matches {
                println!("{}", m);
            }
        }
    }
}
