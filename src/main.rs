use anyhow::Result;
use stationprobe::config::HarnessConfig;
use stationprobe::harness::{gate, HarnessCoordinator};
use stationprobe::metrics::init_metrics;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init_metrics();

    let config = HarnessConfig::from_env();

    println!("\n╔══════════════════════════════════════════════════════════════════╗");
    println!("║       StationProbe - Aggregation Server Fault Tolerance          ║");
    println!("╚══════════════════════════════════════════════════════════════════╝\n");

    println!("Target server: {}:{}", config.host, config.port);
    println!("Stations per phase: {}", config.station_count);
    println!("Join bound: {:?}\n", config.join_timeout);

    let coordinator = HarnessCoordinator::new(config);
    coordinator.run(gate::await_operator_restart()).await?;

    println!("\nFault tolerance and consistency test completed. Check server logs for data integrity.");
    Ok(())
}
