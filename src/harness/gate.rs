//! Manual-restart checkpoint between the two collection phases.

use tokio::io::{stdin, AsyncBufReadExt, BufReader};

/// Block until the operator confirms the aggregation server has been
/// restarted, by pressing Enter on the console.
///
/// Deliberately has no timeout: this is a manual checkpoint, not
/// automated recovery detection. A failed console read (closed stdin
/// in an unattended run) is logged and treated as confirmation so the
/// run can still produce its best-effort report.
pub async fn await_operator_restart() {
    println!("Please restart the aggregation server now, then press Enter to continue...");

    let mut line = String::new();
    let mut reader = BufReader::new(stdin());
    if let Err(e) = reader.read_line(&mut line).await {
        tracing::warn!("Console read failed, continuing without confirmation: {}", e);
    }
}
