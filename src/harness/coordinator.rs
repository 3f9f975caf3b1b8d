use crate::client::StationClient;
use crate::config::HarnessConfig;
use crate::driver::PhaseDriver;
use crate::harness::error::HarnessResult;
use crate::harness::state_machine::HarnessStateMachine;
use crate::harness::types::HarnessEvent;
use crate::oracle::ConsistencyVerifier;
use crate::records::{Phase, RunRecords};
use crate::report::{PhaseSummary, RunReport};
use std::future::Future;
use std::sync::Arc;

/// Orchestrates one full harness run.
///
/// Owns the per-run records and wires the client and driver to them;
/// nothing here is reusable across runs, which is what keeps the
/// shared state free of process-wide singletons.
pub struct HarnessCoordinator {
    config: HarnessConfig,
    records: Arc<RunRecords>,
    driver: PhaseDriver,
    state: HarnessStateMachine,
    run_id: String,
}

impl HarnessCoordinator {
    pub fn new(config: HarnessConfig) -> Self {
        let records = Arc::new(RunRecords::new());
        let client = Arc::new(StationClient::from_config(&config, records.clone()));
        let driver = PhaseDriver::new(client, records.clone(), config.join_timeout);

        Self {
            config,
            records,
            driver,
            state: HarnessStateMachine::new(),
            run_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// The run's shared records, for post-run inspection.
    pub fn records(&self) -> Arc<RunRecords> {
        self.records.clone()
    }

    /// Drive the full run: initial phase, manual restart gate,
    /// post-restart phase, consistency check, report.
    ///
    /// `restart_signal` is the operator-supplied synchronization point
    /// between the two phases. Production passes
    /// [`gate::await_operator_restart`](crate::harness::gate::await_operator_restart);
    /// tests pass a ready future to run both phases back to back.
    pub async fn run<S>(&self, restart_signal: S) -> HarnessResult<RunReport>
    where
        S: Future<Output = ()>,
    {
        self.state.transition(HarnessEvent::StartRun)?;
        tracing::info!(
            "Run {}: {} stations against {}:{}",
            self.run_id,
            self.config.station_count,
            self.config.host,
            self.config.port
        );

        println!("Testing initial data uploads...");
        let initial = self
            .driver
            .run_phase(Phase::Initial, self.config.station_count)
            .await;
        self.state.transition(HarnessEvent::PhaseComplete {
            phase: Phase::Initial,
            samples: initial.len(),
        })?;

        restart_signal.await;
        self.state.transition(HarnessEvent::RestartConfirmed)?;

        println!("Testing data consistency and reconnections after restart...");
        let post_restart = self
            .driver
            .run_phase(Phase::PostRestart, self.config.station_count)
            .await;
        self.state.transition(HarnessEvent::PhaseComplete {
            phase: Phase::PostRestart,
            samples: post_restart.len(),
        })?;

        let consistency = ConsistencyVerifier::verify(&self.records);
        let report = RunReport::new(
            self.run_id.clone(),
            PhaseSummary::from_samples(Phase::Initial, initial),
            PhaseSummary::from_samples(Phase::PostRestart, post_restart),
            consistency,
        );
        report.render();
        self.state.transition(HarnessEvent::ReportRendered)?;

        Ok(report)
    }
}
