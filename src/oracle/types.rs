use crate::records::RecordKey;
use std::collections::BTreeMap;

/// One sent/acknowledged payload divergence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMismatch {
    pub key: RecordKey,
    pub sent: String,
    pub acked: String,
}

/// Result of the post-run consistency check.
///
/// Carries full sorted snapshots of both maps so an inconsistent run
/// can be dumped in its entirety for diagnosis.
#[derive(Debug, Clone)]
pub struct ConsistencyReport {
    pub consistent: bool,
    pub sent: BTreeMap<RecordKey, String>,
    pub acked: BTreeMap<RecordKey, String>,
    /// Sent but never acknowledged.
    pub missing_acks: Vec<RecordKey>,
    /// Acknowledged without a matching sent entry.
    pub unexpected_acks: Vec<RecordKey>,
    /// Acknowledged with a payload that differs from what was sent.
    pub mismatched: Vec<ValueMismatch>,
}
