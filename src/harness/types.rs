use crate::records::Phase;

/// Process-level state of a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessState {
    Idle,
    CollectingInitial,
    /// Blocked on the operator restarting the aggregation server.
    AwaitingRestart,
    CollectingPostRestart,
    Reporting,
    Done,
}

impl HarnessState {
    pub fn is_collecting(&self) -> bool {
        matches!(
            self,
            HarnessState::CollectingInitial | HarnessState::CollectingPostRestart
        )
    }

    pub fn is_done(&self) -> bool {
        matches!(self, HarnessState::Done)
    }
}

/// Events that move a run forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessEvent {
    StartRun,
    PhaseComplete { phase: Phase, samples: usize },
    RestartConfirmed,
    ReportRendered,
}
