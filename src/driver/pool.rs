//! Per-phase concurrent upload fan-out.

use crate::client::StationClient;
use crate::metrics::recorder;
use crate::records::{Phase, RunRecords};
use crate::workload::ReadingGenerator;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time;

/// Dispatches one task per station for a phase and waits for them
/// with a bounded, best-effort join.
pub struct PhaseDriver {
    client: Arc<StationClient>,
    records: Arc<RunRecords>,
    join_timeout: Duration,
}

impl PhaseDriver {
    pub fn new(
        client: Arc<StationClient>,
        records: Arc<RunRecords>,
        join_timeout: Duration,
    ) -> Self {
        Self {
            client,
            records,
            join_timeout,
        }
    }

    /// Run one phase and return its latency samples.
    ///
    /// Every station index gets its own task; stations race freely
    /// with no ordering among them. The join waits up to the
    /// configured bound and then proceeds regardless: overdue tasks
    /// are detached, not cancelled, so a straggler may still write
    /// into the shared records after the phase has closed. The
    /// returned vector is a snapshot taken at the join point, which
    /// keeps those late writes out of any report built from it. The
    /// result may be shorter than `station_count`.
    pub async fn run_phase(&self, phase: Phase, station_count: usize) -> Vec<u64> {
        let mut handles = Vec::with_capacity(station_count);
        for index in 0..station_count {
            let client = self.client.clone();
            let records = self.records.clone();
            handles.push(tokio::spawn(async move {
                let reading = ReadingGenerator::reading_for(index);
                let started = Instant::now();
                let outcome = client.upload(&reading, phase).await;
                let elapsed_ms = started.elapsed().as_millis() as u64;
                records.record_latency(phase, elapsed_ms);
                recorder::record_upload_latency(phase, elapsed_ms);
                outcome
            }));
        }

        match time::timeout(self.join_timeout, join_all(handles)).await {
            Ok(results) => {
                for (index, result) in results.into_iter().enumerate() {
                    if let Err(e) = result {
                        // A panicked station stays out of the latency set
                        // and never aborts its siblings.
                        tracing::error!(
                            "Station {} task failed in {} phase: {}",
                            index,
                            phase,
                            e
                        );
                    }
                }
            }
            Err(_) => {
                tracing::warn!(
                    "{} phase still had stations running after {:?}, proceeding without them",
                    phase,
                    self.join_timeout
                );
            }
        }

        self.records.latency_snapshot(phase)
    }
}
