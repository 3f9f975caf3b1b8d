//! Runtime configuration for a harness run.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Target aggregation server address.
    pub host: String,
    pub port: u16,
    /// Simulated stations dispatched per phase.
    pub station_count: usize,
    /// Best-effort bound on waiting for a phase's tasks.
    pub join_timeout: Duration,
    /// Bound on one full connect/send/receive cycle.
    pub request_timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 4567,
            station_count: 5,
            join_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(3),
        }
    }
}

impl HarnessConfig {
    /// Defaults overridden by `STATIONPROBE_*` environment variables.
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("STATIONPROBE_HOST") {
            config.host = host;
        }
        if let Some(port) = parse_env("STATIONPROBE_PORT") {
            config.port = port;
        }
        if let Some(count) = parse_env("STATIONPROBE_STATIONS") {
            config.station_count = count;
        }
        if let Some(ms) = parse_env::<u64>("STATIONPROBE_JOIN_TIMEOUT_MS") {
            config.join_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_env::<u64>("STATIONPROBE_REQUEST_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(ms);
        }

        config
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparseable {}: {:?}", name, raw);
            None
        }
    }
}
