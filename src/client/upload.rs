//! One-shot protocol client for the aggregation server.
//!
//! Every upload opens a fresh connection, mirroring an independent
//! field device, and never reuses it.

use crate::client::error::{ClientError, ClientResult};
use crate::config::HarnessConfig;
use crate::metrics::recorder;
use crate::records::{Phase, RunRecords};
use crate::workload::StationReading;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

const SUCCESS_MARKERS: [&str; 2] = ["200 OK", "201 Created"];

/// Outcome of a single upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOutcome {
    pub acknowledged: bool,
}

pub struct StationClient {
    host: String,
    port: u16,
    request_timeout: Duration,
    records: Arc<RunRecords>,
}

impl StationClient {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        request_timeout: Duration,
        records: Arc<RunRecords>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            request_timeout,
            records,
        }
    }

    pub fn from_config(config: &HarnessConfig, records: Arc<RunRecords>) -> Self {
        Self::new(
            config.host.clone(),
            config.port,
            config.request_timeout,
            records,
        )
    }

    /// Upload one reading and classify the server's answer.
    ///
    /// Infallible by contract: transport faults and unrecognized
    /// responses are logged with the station identity and folded into
    /// an unacknowledged outcome. The sent record is written before
    /// any socket work, so a mid-transmission fault is still visible
    /// in the sent set.
    pub async fn upload(&self, reading: &StationReading, phase: Phase) -> UploadOutcome {
        let payload = reading.canonical_json();
        self.records.record_sent(phase, &reading.id, &payload);
        recorder::record_upload_attempt(phase);

        match self.exchange(&payload).await {
            Ok(true) => {
                self.records.record_acked(phase, &reading.id, &payload);
                recorder::record_upload_acknowledged(phase);
                UploadOutcome { acknowledged: true }
            }
            Ok(false) => {
                tracing::warn!(
                    "Station {}: response carried no success status",
                    reading.id
                );
                recorder::record_upload_failed(phase, "unacknowledged");
                UploadOutcome {
                    acknowledged: false,
                }
            }
            Err(e) => {
                tracing::warn!("Station {}: upload failed: {}", reading.id, e);
                recorder::record_upload_failed(phase, "transport");
                UploadOutcome {
                    acknowledged: false,
                }
            }
        }
    }

    /// One request/response cycle bounded by the request timeout.
    async fn exchange(&self, body: &str) -> ClientResult<bool> {
        match tokio::time::timeout(self.request_timeout, self.exchange_inner(body)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(self.request_timeout)),
        }
    }

    async fn exchange_inner(&self, body: &str) -> ClientResult<bool> {
        let addr = format!("{}:{}", self.host, self.port);
        let mut stream = TcpStream::connect(&addr)
            .await
            .map_err(|e| ClientError::ConnectionFailed(format!("{}: {}", addr, e)))?;

        let request = frame_request(&self.host, body);
        stream
            .write_all(request.as_bytes())
            .await
            .map_err(|e| ClientError::SendFailed(e.to_string()))?;
        stream.flush().await?;

        // Scan response lines until the server closes the stream.
        let mut lines = BufReader::new(stream).lines();
        let mut acknowledged = false;
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| ClientError::ReceiveFailed(e.to_string()))?
        {
            if SUCCESS_MARKERS.iter().any(|marker| line.contains(marker)) {
                acknowledged = true;
            }
        }
        Ok(acknowledged)
    }
}

/// Frame one upload request. Content-Length is the exact byte length
/// of the serialized body, and the whole request is written as a
/// single unit.
fn frame_request(host: &str, body: &str) -> String {
    format!(
        "PUT /weather.json HTTP/1.1\r\n\
         Host: {}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Lamport-Clock: 0\r\n\
         \r\n\
         {}",
        host,
        body.len(),
        body
    )
}
