//! Per-run shared state written concurrently by station tasks.

use crate::records::types::{Phase, RecordKey};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// All mutable state for one harness run.
///
/// Constructed fresh per run and shared into worker tasks via `Arc`;
/// there is no process-wide singleton. Sent/ack maps take concurrent
/// inserts from every station task; latency lists are append-only per
/// phase. Readers must go through the snapshot accessors, which copy
/// out under the lock so a straggler task finishing after a phase has
/// closed cannot mutate data a report was built from.
pub struct RunRecords {
    sent: DashMap<RecordKey, String>,
    acked: DashMap<RecordKey, String>,
    initial_latencies: Mutex<Vec<u64>>,
    post_restart_latencies: Mutex<Vec<u64>>,
}

impl RunRecords {
    pub fn new() -> Self {
        Self {
            sent: DashMap::new(),
            acked: DashMap::new(),
            initial_latencies: Mutex::new(Vec::new()),
            post_restart_latencies: Mutex::new(Vec::new()),
        }
    }

    /// Record what a station is about to transmit.
    pub fn record_sent(&self, phase: Phase, station_id: &str, payload: &str) {
        self.sent
            .insert(RecordKey::new(phase, station_id), payload.to_string());
    }

    /// Record a payload the server acknowledged.
    pub fn record_acked(&self, phase: Phase, station_id: &str, payload: &str) {
        self.acked
            .insert(RecordKey::new(phase, station_id), payload.to_string());
    }

    /// Append one latency sample for a completed attempt.
    pub fn record_latency(&self, phase: Phase, millis: u64) {
        self.latencies(phase).lock().push(millis);
    }

    fn latencies(&self, phase: Phase) -> &Mutex<Vec<u64>> {
        match phase {
            Phase::Initial => &self.initial_latencies,
            Phase::PostRestart => &self.post_restart_latencies,
        }
    }

    /// Copy of the phase's samples at this instant.
    pub fn latency_snapshot(&self, phase: Phase) -> Vec<u64> {
        self.latencies(phase).lock().clone()
    }

    pub fn sample_count(&self, phase: Phase) -> usize {
        self.latencies(phase).lock().len()
    }

    /// Sorted copy of the sent map.
    pub fn sent_snapshot(&self) -> BTreeMap<RecordKey, String> {
        self.sent
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Sorted copy of the ack map.
    pub fn acked_snapshot(&self) -> BTreeMap<RecordKey, String> {
        self.acked
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

impl Default for RunRecords {
    fn default() -> Self {
        Self::new()
    }
}
