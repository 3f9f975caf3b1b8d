use crate::harness::error::{HarnessError, HarnessResult};
use crate::harness::types::{HarnessEvent, HarnessState};
use crate::records::Phase;
use parking_lot::RwLock;

/// Tracks the run through its fixed sequence:
/// collect initial → await manual restart → collect post-restart →
/// report → done. Phase sequencing is the only ordering guarantee the
/// harness makes, so out-of-order events are errors.
pub struct HarnessStateMachine {
    state: RwLock<HarnessState>,
}

impl Default for HarnessStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessStateMachine {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HarnessState::Idle),
        }
    }

    /// Get current state
    pub fn current_state(&self) -> HarnessState {
        self.state.read().clone()
    }

    /// Transition state based on event
    pub fn transition(&self, event: HarnessEvent) -> HarnessResult<HarnessState> {
        let mut state = self.state.write();

        let new_state = match (&*state, &event) {
            (HarnessState::Idle, HarnessEvent::StartRun) => HarnessState::CollectingInitial,

            (
                HarnessState::CollectingInitial,
                HarnessEvent::PhaseComplete {
                    phase: Phase::Initial,
                    ..
                },
            ) => HarnessState::AwaitingRestart,

            (HarnessState::AwaitingRestart, HarnessEvent::RestartConfirmed) => {
                HarnessState::CollectingPostRestart
            }

            (
                HarnessState::CollectingPostRestart,
                HarnessEvent::PhaseComplete {
                    phase: Phase::PostRestart,
                    ..
                },
            ) => HarnessState::Reporting,

            (HarnessState::Reporting, HarnessEvent::ReportRendered) => HarnessState::Done,

            // Invalid transition
            _ => {
                return Err(HarnessError::InvalidTransition(format!(
                    "Cannot handle {:?} in state {:?}",
                    event, *state
                )));
            }
        };

        *state = new_state.clone();
        Ok(new_state)
    }
}
