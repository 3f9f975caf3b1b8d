use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),

    #[error("Timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
