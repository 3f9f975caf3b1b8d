//! Fault-tolerance and consistency harness for a weather-data
//! aggregation server.
//!
//! Drives concurrent simulated weather stations that upload JSON
//! readings over a line-based HTTP-like protocol, measures per-upload
//! latency before and after a manually triggered server restart, and
//! verifies that everything sent was acknowledged and observable
//! across the recovery.

pub mod client;
pub mod config;
pub mod driver;
pub mod harness;
pub mod metrics;
pub mod oracle;
pub mod records;
pub mod report;
pub mod workload;
