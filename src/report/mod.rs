pub mod error;
pub mod summary;

pub use error::{ReportError, ReportResult};
pub use summary::{PhaseSummary, RunReport};
