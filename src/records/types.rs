use serde::{Deserialize, Serialize};
use std::fmt;

/// Test stage relative to the manual server restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Initial,
    PostRestart,
}

impl Phase {
    /// Stable label used for log lines and metric dimensions.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Initial => "initial",
            Phase::PostRestart => "post_restart",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of one upload record: which station, in which phase.
///
/// Keying by phase keeps the two collection rounds separate, so the
/// final consistency check verifies pre- and post-restart uploads
/// independently instead of only the last writer per station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub phase: Phase,
    pub station_id: String,
}

impl RecordKey {
    pub fn new(phase: Phase, station_id: impl Into<String>) -> Self {
        Self {
            phase,
            station_id: station_id.into(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.phase, self.station_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Initial.label(), "initial");
        assert_eq!(Phase::PostRestart.label(), "post_restart");
    }

    #[test]
    fn test_record_key_display() {
        let key = RecordKey::new(Phase::Initial, "station_3");
        assert_eq!(key.to_string(), "initial/station_3");
    }

    #[test]
    fn test_record_key_ordering_groups_by_phase() {
        let a = RecordKey::new(Phase::Initial, "station_9");
        let b = RecordKey::new(Phase::PostRestart, "station_0");
        assert!(a < b);
    }
}
