//! chainstream-export — delimited-text export of stream history.
//!
//! The column layout is a stable contract: one row per event with
//! `action,direction,counterparty,amount,timestamp`.
//!
//! ```rust
//! use chainstream_export::HistoryExporter;
//!
//! let csv = HistoryExporter::new().to_csv_string(&[]).unwrap();
//! assert_eq!(csv, "action,direction,counterparty,amount,timestamp\n");
//! ```

pub mod error;
pub mod exporter;

pub use error::ExportError;
pub use exporter::{format_timestamp, ExportRow, HistoryExporter, HEADER};
