//! Generates a demo dataset and writes it to stdout as JSON.
//!
//! Run with:
//! ```
//! cargo run -p mock-data --bin generate > dataset.json
//! ```
//!
//! `MOCK_DATA_CONFIG` points at an optional JSON config file and
//! `MOCK_DATA_SEED` fixes the RNG seed (default 42).

use std::io::Write;

use anyhow::Context;
use mock_data::builders::DatasetBuilder;
use mock_data::config::DatasetConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use wastewatch::stats::calculate_dashboard_stats;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var("MOCK_DATA_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading config from {path}");
            DatasetConfig::from_json_file(&path)
                .with_context(|| format!("loading config from {path}"))?
        }
        Err(_) => DatasetConfig::default(),
    };

    let seed = match std::env::var("MOCK_DATA_SEED") {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("MOCK_DATA_SEED must be an unsigned integer, got {raw}"))?,
        Err(_) => 42,
    };

    let mut rng = StdRng::seed_from_u64(seed);

    let result = DatasetBuilder::new()
        .with_config(config)
        .with_metrics(true)
        .build(&mut rng)
        .context("invalid dataset configuration")?;
    let dataset = &result.dataset;

    let json = serde_json::to_string_pretty(dataset)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;

    let stats = calculate_dashboard_stats(&dataset.bins);

    // Summary output
    tracing::info!("Generation completed (seed {seed})");
    tracing::info!("  Bins: {}", dataset.bins.len());
    tracing::info!("  Vehicles: {}", dataset.vehicles.len());
    tracing::info!("  Routes: {}", dataset.routes.len());
    tracing::info!("  Alerts: {}", dataset.alerts.len());
    tracing::info!("  Citizen reports: {}", dataset.citizen_reports.len());
    tracing::info!("  Insights: {}", dataset.insights.len());
    tracing::info!("  Daily statistics: {}", dataset.waste_statistics.len());
    tracing::info!(
        "  Critical bins: {}, malfunctioning sensors: {}",
        stats.critical_bins,
        stats.malfunctioning_sensors
    );
    if let Some(metrics) = result.metrics {
        tracing::info!("  Took {}us", metrics.generation_time_us);
    }

    Ok(())
}
