use crate::workload::types::StationReading;

/// Deterministic workload source: station `i` always produces the
/// same reading, so a run can be replayed against the server and the
/// consistency check has a fixed expectation to compare against.
pub struct ReadingGenerator;

impl ReadingGenerator {
    /// Reading for station index `i`: id `station_<i>`, temperature `20 + i`.
    pub fn reading_for(index: usize) -> StationReading {
        StationReading {
            id: format!("station_{}", index),
            temperature: (20 + index).to_string(),
        }
    }
}
