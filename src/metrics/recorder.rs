//! Metrics recorder for harness upload operations
//!
//! Records counters and latency observations for every upload attempt.

use crate::records::Phase;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::sync::atomic::{AtomicBool, Ordering};

static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize metric descriptions (call once at startup)
pub fn init_metrics() {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        return; // Already initialized
    }

    describe_counter!(
        "stationprobe_uploads_attempted_total",
        "Total number of upload attempts"
    );
    describe_counter!(
        "stationprobe_uploads_acknowledged_total",
        "Total number of uploads the server acknowledged"
    );
    describe_counter!(
        "stationprobe_uploads_failed_total",
        "Total number of uploads that failed or went unacknowledged"
    );

    describe_histogram!(
        "stationprobe_upload_latency_ms",
        "Latency of completed upload attempts in milliseconds"
    );
}

/// Record an upload attempt starting
pub fn record_upload_attempt(phase: Phase) {
    counter!("stationprobe_uploads_attempted_total", "phase" => phase.label()).increment(1);
}

/// Record a server acknowledgment
pub fn record_upload_acknowledged(phase: Phase) {
    counter!("stationprobe_uploads_acknowledged_total", "phase" => phase.label()).increment(1);
}

/// Record a failed or unacknowledged upload
pub fn record_upload_failed(phase: Phase, reason: &'static str) {
    counter!("stationprobe_uploads_failed_total", "phase" => phase.label(), "reason" => reason)
        .increment(1);
}

/// Record the latency of a completed attempt
pub fn record_upload_latency(phase: Phase, millis: u64) {
    histogram!("stationprobe_upload_latency_ms", "phase" => phase.label()).record(millis as f64);
}
