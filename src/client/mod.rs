pub mod error;
pub mod upload;

pub use error::{ClientError, ClientResult};
pub use upload::{StationClient, UploadOutcome};
