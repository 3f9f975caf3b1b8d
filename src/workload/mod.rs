pub mod generator;
pub mod types;

pub use generator::ReadingGenerator;
pub use types::StationReading;
