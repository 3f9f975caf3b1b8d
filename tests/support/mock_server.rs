//! In-process mock aggregation server
//!
//! Simulates the external weather endpoint with configurable
//! per-station failure modes, so fault-tolerance scenarios run
//! without a real server or external network shaping tools.

#![allow(dead_code)]

use rand::Rng;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::sleep;

/// Behavior of the mock for incoming uploads.
#[derive(Debug, Clone)]
pub struct MockServerConfig {
    /// Base service time before the response goes out.
    pub service_delay: Duration,
    /// Extra random delay in [0, jitter) added per request.
    pub service_jitter: Duration,
    /// Status line returned to accepted uploads.
    pub status_line: String,
    /// Stations whose connection is dropped with no response.
    pub drop_stations: HashSet<String>,
    /// Stations the server never answers (connection held open).
    pub stall_stations: HashSet<String>,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            service_delay: Duration::from_millis(5),
            service_jitter: Duration::ZERO,
            status_line: "HTTP/1.1 201 Created".to_string(),
            drop_stations: HashSet::new(),
            stall_stations: HashSet::new(),
        }
    }
}

impl MockServerConfig {
    /// Respond with a different status line (e.g. `HTTP/1.1 200 OK`
    /// or a rejection).
    pub fn with_status(status_line: &str) -> Self {
        Self {
            status_line: status_line.to_string(),
            ..Default::default()
        }
    }

    /// Drop the named station's connection before any response.
    pub fn dropping(mut self, station_id: &str) -> Self {
        self.drop_stations.insert(station_id.to_string());
        self
    }

    /// Never answer the named station; hold its connection open.
    pub fn stalling(mut self, station_id: &str) -> Self {
        self.stall_stations.insert(station_id.to_string());
        self
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.service_jitter = jitter;
        self
    }
}

/// Counters observed by the mock across all connections.
#[derive(Debug, Default)]
pub struct MockServerStats {
    pub connections: AtomicU64,
    pub bodies_received: AtomicU64,
}

pub struct MockServer {
    pub addr: SocketAddr,
    pub stats: Arc<MockServerStats>,
}

impl MockServer {
    /// Bind an ephemeral local port and serve until the test ends.
    pub async fn spawn(config: MockServerConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stats = Arc::new(MockServerStats::default());

        let accept_stats = stats.clone();
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                let config = config.clone();
                let stats = accept_stats.clone();
                tokio::spawn(handle_connection(socket, config, stats));
            }
        });

        Self { addr, stats }
    }
}

async fn handle_connection(
    socket: TcpStream,
    config: MockServerConfig,
    stats: Arc<MockServerStats>,
) {
    stats.connections.fetch_add(1, Ordering::Relaxed);
    let mut reader = BufReader::new(socket);

    // Headers up to the blank line, then a Content-Length body.
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some(value) = trimmed.strip_prefix("Content-Length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).await.is_err() {
        return;
    }
    stats.bodies_received.fetch_add(1, Ordering::Relaxed);
    let body = String::from_utf8_lossy(&body).to_string();
    let station = station_id_of(&body);

    if config.stall_stations.contains(&station) {
        // Hold the connection open well past any join bound.
        sleep(Duration::from_secs(3600)).await;
        return;
    }

    let mut delay = config.service_delay;
    if config.service_jitter > Duration::ZERO {
        let jitter_ms = rand::thread_rng().gen_range(0..config.service_jitter.as_millis() as u64);
        delay += Duration::from_millis(jitter_ms);
    }
    sleep(delay).await;

    if config.drop_stations.contains(&station) {
        // Abrupt disconnect, no status line.
        return;
    }

    let mut socket = reader.into_inner();
    let response = format!("{}\r\nContent-Length: 0\r\n\r\n", config.status_line);
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn station_id_of(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("id")
                .and_then(|id| id.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default()
}
