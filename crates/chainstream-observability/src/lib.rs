//! # chainstream-observability
//!
//! Structured logging for ChainStream binaries. Library crates only emit
//! `tracing` events; this crate installs the subscriber.
//!
//! Log levels are configurable per component, with optional JSON output
//! compatible with ELK, Loki, CloudWatch.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
