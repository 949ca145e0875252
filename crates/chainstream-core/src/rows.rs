//! History row rendering.
//!
//! Each event is classified on its own; there is no running state between
//! rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::AddressLabel;
use crate::error::FeedError;
use crate::reconcile::{DisplayRecord, Reconciler};
use crate::types::{EventKind, RawHistoryEvent};

/// Indicator attached to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowTag {
    /// A newly created stream (positive indicator).
    Started,
    /// A cancelled stream (negative indicator).
    Cancelled,
    /// The terms a modification replaced.
    Superseded,
    /// The terms a modification installed.
    Current,
}

impl RowTag {
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Started => "Incoming stream",
            Self::Cancelled => "Cancelled stream",
            Self::Superseded | Self::Current => "Modified Stream",
        }
    }
}

/// Visual link from a superseded row to its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    ChangedTo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub tag: RowTag,
    pub payer: AddressLabel,
    pub payee: AddressLabel,
    pub rate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
}

impl HistoryRow {
    fn from_record(record: &DisplayRecord, tag: RowTag) -> Self {
        Self {
            tag,
            payer: record.payer_label.clone(),
            payee: record.payee_label.clone(),
            rate: record.rate_display.clone(),
            separator: None,
        }
    }
}

impl fmt::Display for HistoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} {}", self.payer, self.payee, self.rate)?;
        if self.separator == Some(Separator::ChangedTo) {
            f.write_str(" »")?;
        }
        Ok(())
    }
}

/// Rows for one reconciled record: one for creations and cancellations, the
/// superseded terms followed by the current terms for modifications.
pub fn render(record: &DisplayRecord) -> Vec<HistoryRow> {
    match record.kind {
        EventKind::Created => vec![HistoryRow::from_record(record, RowTag::Started)],
        EventKind::Cancelled => vec![HistoryRow::from_record(record, RowTag::Cancelled)],
        EventKind::Modified => {
            let mut rows = Vec::with_capacity(2);
            if let Some(prev) = record.previous.as_deref() {
                let mut row = HistoryRow::from_record(prev, RowTag::Superseded);
                row.separator = Some(Separator::ChangedTo);
                rows.push(row);
            }
            rows.push(HistoryRow::from_record(record, RowTag::Current));
            rows
        }
    }
}

/// Reconcile and render a raw feed entry. Unknown event types render to no
/// rows.
pub fn render_raw(reconciler: &Reconciler, raw: &RawHistoryEvent) -> Result<Vec<HistoryRow>, FeedError> {
    Ok(match raw.to_event()? {
        Some(event) => render(&reconciler.reconcile(&event)),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawNumber, RawStream, StreamEvent, StreamSnapshot};
    use alloy_primitives::U256;

    fn snap(payer: &str, payee: &str, raw: u64) -> StreamSnapshot {
        StreamSnapshot::new(payer, payee, 0, U256::from(raw))
    }

    #[test]
    fn created_renders_one_started_row() {
        let event = StreamEvent::created(0, snap("0xAAA", "0xBBB", 5));
        let rows = render(&Reconciler::new("0xBBB").reconcile(&event));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tag, RowTag::Started);
        assert_eq!(rows[0].to_string(), "0xAAA → You 5");
    }

    #[test]
    fn cancelled_renders_one_cancelled_row() {
        let event = StreamEvent::cancelled(0, snap("0xAAA", "0xBBB", 5));
        let rows = render(&Reconciler::new("0xAAA").reconcile(&event));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tag, RowTag::Cancelled);
        assert_eq!(rows[0].tag.tooltip(), "Cancelled stream");
    }

    #[test]
    fn modified_renders_superseded_then_current() {
        let event = StreamEvent::modified(0, Some(snap("0xAAA", "0xBBB", 1)), snap("0xAAA", "0xBBB", 2));
        let rows = render(&Reconciler::new("0xAAA").reconcile(&event));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tag, RowTag::Superseded);
        assert_eq!(rows[0].separator, Some(Separator::ChangedTo));
        assert_eq!(rows[0].rate, "1");
        assert_eq!(rows[1].tag, RowTag::Current);
        assert_eq!(rows[1].separator, None);
        assert_eq!(rows[1].rate, "2");
        assert_eq!(rows[0].to_string(), "You → 0xBBB 1 »");
    }

    #[test]
    fn modified_without_previous_still_two_rows() {
        let event = StreamEvent::modified(0, None, snap("0xAAA", "0xBBB", 2));
        let rows = render(&Reconciler::new("0xAAA").reconcile(&event));
        assert_eq!(rows.len(), 2);
        assert!(rows[0].payer.is_missing());
        assert!(rows[0].payee.is_missing());
    }

    #[test]
    fn unknown_raw_kind_renders_nothing() {
        let raw = RawHistoryEvent {
            id: None,
            event_type: "StreamPaused".into(),
            created_timestamp: RawNumber::Int(1),
            tx_hash: None,
            stream: RawStream::default(),
            old_stream: None,
        };
        let rows = render_raw(&Reconciler::new("0xAAA"), &raw).unwrap();
        assert!(rows.is_empty());
    }
}
