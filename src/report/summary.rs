//! Per-phase latency summaries and the final console report.

use crate::oracle::ConsistencyReport;
use crate::records::Phase;
use crate::report::error::{ReportError, ReportResult};

/// Latency summary for one completed phase.
#[derive(Debug, Clone)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub samples: Vec<u64>,
    pub mean_ms: u64,
}

impl PhaseSummary {
    /// Arithmetic mean as truncating integer division.
    ///
    /// A phase with zero samples is an explicit error, never a
    /// division by zero or a silent zero mean.
    pub fn from_samples(phase: Phase, samples: Vec<u64>) -> ReportResult<Self> {
        if samples.is_empty() {
            return Err(ReportError::EmptyPhase(phase));
        }
        let mean_ms = samples.iter().sum::<u64>() / samples.len() as u64;
        Ok(Self {
            phase,
            samples,
            mean_ms,
        })
    }
}

/// Everything one run produced.
///
/// Phase summaries stay as results so an empty phase is reported
/// explicitly while the rest of the run still renders.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: String,
    pub generated_at: String,
    pub initial: ReportResult<PhaseSummary>,
    pub post_restart: ReportResult<PhaseSummary>,
    pub consistency: ConsistencyReport,
}

impl RunReport {
    pub fn new(
        run_id: String,
        initial: ReportResult<PhaseSummary>,
        post_restart: ReportResult<PhaseSummary>,
        consistency: ConsistencyReport,
    ) -> Self {
        Self {
            run_id,
            generated_at: chrono::Utc::now().to_rfc3339(),
            initial,
            post_restart,
            consistency,
        }
    }

    /// Render the whole report to stdout.
    pub fn render(&self) {
        println!("\nMetrics Summary");
        println!("----------------------------");
        println!("Run {} at {}", self.run_id, self.generated_at);

        Self::render_phase(&self.initial);
        Self::render_phase(&self.post_restart);

        println!("\nData Consistency Check:");
        println!(
            "Data consistency maintained: {}",
            if self.consistency.consistent {
                "Yes"
            } else {
                "No"
            }
        );

        if !self.consistency.consistent {
            println!("Inconsistent data detected!");
            for key in &self.consistency.missing_acks {
                println!("  Never acknowledged: {}", key);
            }
            for key in &self.consistency.unexpected_acks {
                println!("  Acknowledged but never sent: {}", key);
            }
            for mismatch in &self.consistency.mismatched {
                println!(
                    "  Payload mismatch at {}: sent {} acked {}",
                    mismatch.key, mismatch.sent, mismatch.acked
                );
            }
            println!("Sent Data:");
            for (key, payload) in &self.consistency.sent {
                println!("  {} => {}", key, payload);
            }
            println!("Acknowledged Data:");
            for (key, payload) in &self.consistency.acked {
                println!("  {} => {}", key, payload);
            }
        }
    }

    fn render_phase(summary: &ReportResult<PhaseSummary>) {
        match summary {
            Ok(summary) => {
                println!(
                    "\n{} upload latency (ms): {:?}",
                    summary.phase, summary.samples
                );
                println!(
                    "Average {} latency: {} ms ({} samples)",
                    summary.phase,
                    summary.mean_ms,
                    summary.samples.len()
                );
            }
            Err(e) => println!("\n{}", e),
        }
    }
}
