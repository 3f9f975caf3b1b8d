use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
