pub mod store;
pub mod types;

pub use store::RunRecords;
pub use types::{Phase, RecordKey};
