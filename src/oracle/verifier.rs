use crate::oracle::types::{ConsistencyReport, ValueMismatch};
use crate::records::RunRecords;

/// Compares what the harness intended to send against what the server
/// acknowledged.
pub struct ConsistencyVerifier;

impl ConsistencyVerifier {
    /// Read-only check over both phases.
    ///
    /// Call once after the final phase's join point; consistent iff
    /// the sent and ack maps have identical key sets and byte-identical
    /// payloads per key. Takes no repair action.
    pub fn verify(records: &RunRecords) -> ConsistencyReport {
        let sent = records.sent_snapshot();
        let acked = records.acked_snapshot();

        let mut missing_acks = Vec::new();
        let mut mismatched = Vec::new();
        for (key, sent_payload) in &sent {
            match acked.get(key) {
                None => missing_acks.push(key.clone()),
                Some(acked_payload) if acked_payload != sent_payload => {
                    mismatched.push(ValueMismatch {
                        key: key.clone(),
                        sent: sent_payload.clone(),
                        acked: acked_payload.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        let unexpected_acks: Vec<_> = acked
            .keys()
            .filter(|key| !sent.contains_key(*key))
            .cloned()
            .collect();

        let consistent =
            missing_acks.is_empty() && unexpected_acks.is_empty() && mismatched.is_empty();

        ConsistencyReport {
            consistent,
            sent,
            acked,
            missing_acks,
            unexpected_acks,
            mismatched,
        }
    }
}
