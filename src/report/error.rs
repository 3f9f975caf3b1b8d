use crate::records::Phase;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("No latency samples recorded for {0} phase")]
    EmptyPhase(Phase),
}

pub type ReportResult<T> = Result<T, ReportError>;
