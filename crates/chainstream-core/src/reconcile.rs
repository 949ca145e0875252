//! Stream event reconciliation.
//!
//! Turns a [`StreamEvent`] into a [`DisplayRecord`] from one viewer's point
//! of view. Pure and total: the same event and viewer always give the same
//! record, and no input shape produces an error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::{same_address, AddressLabel};
use crate::amount::truncate_display;
use crate::types::{EventKind, StreamEvent, StreamSnapshot};

/// Which way value flows relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incoming => "Incoming",
            Self::Outgoing => "Outgoing",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered in place of a rate the indexer never reported.
const MISSING_RATE: &str = "NaN";

/// Display-ready view of one snapshot (and, for modifications, its predecessor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub kind: EventKind,
    pub occurred_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// `None` when the viewer is neither party or the parties are unknown.
    pub direction: Option<Direction>,
    /// The other party from the viewer's side.
    pub counterparty: AddressLabel,
    /// Full counterparty address, for exports and explorer links.
    pub counterparty_address: Option<String>,
    pub payer_label: AddressLabel,
    pub payee_label: AddressLabel,
    /// Exact token-denominated rate per second.
    pub rate_per_sec: String,
    /// `rate_per_sec` bounded for a table cell.
    pub rate_display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Box<DisplayRecord>>,
}

impl DisplayRecord {
    /// Number of history rows this record renders to.
    pub fn row_count(&self) -> usize {
        if self.previous.is_some() {
            2
        } else {
            1
        }
    }
}

/// Reconciles events for a single viewer.
#[derive(Debug, Clone)]
pub struct Reconciler {
    viewer: String,
}

impl Reconciler {
    pub fn new(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
        }
    }

    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    /// Direction of a snapshot for this viewer. The payee check wins when the
    /// viewer streams to itself.
    pub fn direction(&self, snapshot: &StreamSnapshot) -> Option<Direction> {
        let (payer, payee) = snapshot.parties()?;
        if same_address(&self.viewer, payee) {
            Some(Direction::Incoming)
        } else if same_address(&self.viewer, payer) {
            Some(Direction::Outgoing)
        } else {
            None
        }
    }

    /// Build the display record for `event`.
    ///
    /// Modifications always carry a `previous` record. When the old stream is
    /// unknown or incomplete, its address slots hold the
    /// [`AddressLabel::DoesNotExist`] sentinel.
    pub fn reconcile(&self, event: &StreamEvent) -> DisplayRecord {
        let mut record = self.snapshot_record(event, &event.current);
        if event.kind == EventKind::Modified {
            let previous = match &event.previous {
                Some(prev) => self.snapshot_record(event, prev),
                None => self.missing_record(event),
            };
            record.previous = Some(Box::new(previous));
        }
        record
    }

    pub fn reconcile_all(&self, events: &[StreamEvent]) -> Vec<DisplayRecord> {
        events.iter().map(|e| self.reconcile(e)).collect()
    }

    fn snapshot_record(&self, event: &StreamEvent, snapshot: &StreamSnapshot) -> DisplayRecord {
        let rate = snapshot
            .rate_per_sec()
            .unwrap_or_else(|| MISSING_RATE.to_string());
        let mut record = DisplayRecord {
            kind: event.kind,
            occurred_at: event.occurred_at,
            tx_hash: event.tx_hash.clone(),
            direction: None,
            counterparty: AddressLabel::DoesNotExist,
            counterparty_address: None,
            payer_label: AddressLabel::DoesNotExist,
            payee_label: AddressLabel::DoesNotExist,
            rate_display: truncate_display(&rate),
            rate_per_sec: rate,
            token_symbol: snapshot.token_symbol.clone(),
            previous: None,
        };

        let Some((payer, payee)) = snapshot.parties() else {
            return record;
        };

        let direction = self.direction(snapshot);
        let other = match direction {
            Some(Direction::Incoming) => payer,
            Some(Direction::Outgoing) | None => payee,
        };

        record.direction = direction;
        record.counterparty = AddressLabel::for_slot(Some(other), &self.viewer);
        record.counterparty_address = Some(other.to_string());
        record.payer_label = AddressLabel::for_slot(Some(payer), &self.viewer);
        record.payee_label = AddressLabel::for_slot(Some(payee), &self.viewer);
        record
    }

    fn missing_record(&self, event: &StreamEvent) -> DisplayRecord {
        DisplayRecord {
            kind: event.kind,
            occurred_at: event.occurred_at,
            tx_hash: event.tx_hash.clone(),
            direction: None,
            counterparty: AddressLabel::DoesNotExist,
            counterparty_address: None,
            payer_label: AddressLabel::DoesNotExist,
            payee_label: AddressLabel::DoesNotExist,
            rate_per_sec: MISSING_RATE.to_string(),
            rate_display: MISSING_RATE.to_string(),
            token_symbol: event.current.token_symbol.clone(),
            previous: None,
        }
    }
}
