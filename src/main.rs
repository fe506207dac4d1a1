//! upcheck CLI Entry Point
//!
//! レジストリファイルを読み込み、1回の集計パスを実行して
//! レポートJSONを標準出力に書き出す。

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use upcheck::config::ProbeConfig;
use upcheck::{logging, EndpointRegistry, HealthAggregator};

/// upcheck - Concurrent health-aggregation probe
#[derive(Parser, Debug)]
#[command(name = "upcheck")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    UPCHECK_REGISTRY           Registry file path (JSON)
    UPCHECK_PROBE_TIMEOUT_MS   Per-probe timeout in milliseconds (default: 5000)
    UPCHECK_LOG_LEVEL          Log level (default: info)
"#)]
struct Cli {
    /// Registry file (JSON array of {name, kind, target, credential})
    #[arg(long, env = "UPCHECK_REGISTRY")]
    registry: PathBuf,

    /// Per-probe timeout in milliseconds
    #[arg(long = "timeout-ms", env = "UPCHECK_PROBE_TIMEOUT_MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();

    let timeout = cli
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| ProbeConfig::from_env().timeout);

    let registry = EndpointRegistry::from_json_file(&cli.registry)
        .with_context(|| format!("Failed to load registry '{}'", cli.registry.display()))?;

    info!(
        registry = %cli.registry.display(),
        endpoints = registry.len(),
        timeout_ms = timeout.as_millis() as u64,
        "Starting health check"
    );

    let aggregator = HealthAggregator::new(timeout);
    let report = aggregator.run(&registry).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
