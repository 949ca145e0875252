//! CSV writer for reconciled history.

use chainstream_core::address::MISSING_LABEL;
use chainstream_core::DisplayRecord;
use chrono::DateTime;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ExportError;

/// Column names, in order.
pub const HEADER: [&str; 5] = ["action", "direction", "counterparty", "amount", "timestamp"];

/// `2022-04-15, 05:20:00` in UTC.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d, %H:%M:%S";

/// Render unix seconds the way the export's `timestamp` column does.
/// Out-of-range values fall back to the raw number.
pub fn format_timestamp(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => unix_secs.to_string(),
    }
}

/// One exported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub action: String,
    pub direction: String,
    pub counterparty: String,
    pub amount: String,
    pub timestamp: String,
}

impl ExportRow {
    /// Exports keep the full counterparty address and the untruncated rate.
    pub fn from_record(record: &DisplayRecord) -> Self {
        let amount = match &record.token_symbol {
            Some(symbol) => format!("{} {}", record.rate_per_sec, symbol),
            None => record.rate_per_sec.clone(),
        };
        Self {
            action: record.kind.to_string(),
            direction: record.direction.map(|d| d.to_string()).unwrap_or_default(),
            counterparty: record
                .counterparty_address
                .clone()
                .unwrap_or_else(|| MISSING_LABEL.to_string()),
            amount,
            timestamp: format_timestamp(record.occurred_at),
        }
    }

    fn fields(&self) -> [&str; 5] {
        [
            &self.action,
            &self.direction,
            &self.counterparty,
            &self.amount,
            &self.timestamp,
        ]
    }
}

/// Writes history as delimited text. The header is always written, even for
/// an empty history.
#[derive(Debug, Clone)]
pub struct HistoryExporter {
    delimiter: u8,
}

impl HistoryExporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write `records` to `writer`; returns the number of data rows.
    pub fn write_csv<W: Write>(&self, records: &[DisplayRecord], writer: W) -> Result<usize, ExportError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for record in records {
            wtr.write_record(ExportRow::from_record(record).fields())?;
        }
        wtr.flush()?;

        debug!(rows = records.len(), "wrote history export");
        Ok(records.len())
    }

    pub fn to_csv_string(&self, records: &[DisplayRecord]) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write_csv(records, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_file(&self, records: &[DisplayRecord], path: &Path) -> Result<usize, ExportError> {
        let file = std::fs::File::create(path)?;
        let rows = self.write_csv(records, std::io::BufWriter::new(file))?;
        info!(path = %path.display(), rows, "history exported");
        Ok(rows)
    }
}

impl Default for HistoryExporter {
    fn default() -> Self {
        Self::new()
    }
}
