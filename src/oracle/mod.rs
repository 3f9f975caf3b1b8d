pub mod types;
pub mod verifier;

pub use types::{ConsistencyReport, ValueMismatch};
pub use verifier::ConsistencyVerifier;
