pub mod coordinator;
pub mod error;
pub mod gate;
pub mod state_machine;
pub mod types;

pub use coordinator::HarnessCoordinator;
pub use error::{HarnessError, HarnessResult};
pub use state_machine::HarnessStateMachine;
pub use types::{HarnessEvent, HarnessState};
