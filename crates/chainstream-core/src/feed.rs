//! Event feed adapters.
//!
//! A feed hands out pages of raw history entries for one viewer. Fetching is
//! async because real feeds talk to an indexer; everything after
//! [`collect_history`] is synchronous.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::FeedError;
use crate::types::{RawHistoryEvent, StreamEvent};

/// Default number of entries requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A window into the viewer's history (`skip` / `first`, as the indexer pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: usize,
    pub first: usize,
}

impl PageRequest {
    pub fn first_page(size: usize) -> Self {
        Self {
            skip: 0,
            first: size.max(1),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            skip: self.skip + self.first,
            first: self.first,
        }
    }
}

/// Source of raw history entries.
#[async_trait]
pub trait EventFeed: Send + Sync {
    /// Fetch one page of the viewer's history. A page shorter than
    /// `page.first` marks the end.
    async fn fetch_page(
        &self,
        viewer: &str,
        page: PageRequest,
    ) -> Result<Vec<RawHistoryEvent>, FeedError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}

/// Fetch every page, convert, drop unknown kinds, and order newest first.
pub async fn collect_history(
    feed: &dyn EventFeed,
    viewer: &str,
    page_size: usize,
) -> Result<Vec<StreamEvent>, FeedError> {
    let mut page = PageRequest::first_page(page_size);
    let mut events = Vec::new();

    loop {
        let batch = feed.fetch_page(viewer, page).await?;
        debug!(
            feed = feed.name(),
            skip = page.skip,
            fetched = batch.len(),
            "fetched history page"
        );

        for raw in &batch {
            match raw.to_event()? {
                Some(event) => events.push(event),
                None => debug!(
                    feed = feed.name(),
                    event_type = %raw.event_type,
                    "suppressing history entry with unknown event type"
                ),
            }
        }

        if batch.len() < page.first {
            break;
        }
        page = page.next();
    }

    // stable: entries sharing a timestamp keep feed order
    events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    Ok(events)
}

// ─── MemoryFeed ───────────────────────────────────────────────────────────────

/// In-process feed over a fixed list of entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeed {
    entries: Vec<RawHistoryEvent>,
}

impl MemoryFeed {
    pub fn new(entries: Vec<RawHistoryEvent>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl EventFeed for MemoryFeed {
    async fn fetch_page(
        &self,
        _viewer: &str,
        page: PageRequest,
    ) -> Result<Vec<RawHistoryEvent>, FeedError> {
        Ok(self
            .entries
            .iter()
            .skip(page.skip)
            .take(page.first)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ─── JsonFileFeed ─────────────────────────────────────────────────────────────

/// Feed backed by a saved indexer response.
///
/// Accepted documents:
/// - a bare array of history entries
/// - `{ "history": [...] }`
/// - `{ "data": { "user": { "historicalEvents": [...] } } }`
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
    inner: MemoryFeed,
}

impl JsonFileFeed {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref().to_path_buf();
        let content = tokio::fs::read_to_string(&path).await?;
        let entries = parse_history_document(&content)?;
        if entries.is_empty() {
            warn!(path = %path.display(), "history document has no entries");
        }
        Ok(Self {
            path,
            inner: MemoryFeed::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventFeed for JsonFileFeed {
    async fn fetch_page(
        &self,
        viewer: &str,
        page: PageRequest,
    ) -> Result<Vec<RawHistoryEvent>, FeedError> {
        self.inner.fetch_page(viewer, page).await
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// Parse any of the document shapes [`JsonFileFeed`] accepts.
pub fn parse_history_document(content: &str) -> Result<Vec<RawHistoryEvent>, FeedError> {
    let doc: serde_json::Value = serde_json::from_str(content)?;

    let list = if doc.is_array() {
        doc
    } else if let Some(history) = doc.get("history") {
        history.clone()
    } else if let Some(events) = doc.pointer("/data/user/historicalEvents") {
        events.clone()
    } else if doc.pointer("/data/user").is_some_and(|u| u.is_null()) {
        // the indexer returns `user: null` for addresses it has never seen
        serde_json::Value::Null
    } else {
        return Err(FeedError::UnrecognisedDocument {
            reason: "expected an array, `history`, or `data.user.historicalEvents`".into(),
        });
    };

    if list.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(list)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, RawAccount, RawNumber, RawStream, RawToken};

    fn entry(event_type: &str, ts: u64) -> RawHistoryEvent {
        RawHistoryEvent {
            id: None,
            event_type: event_type.into(),
            created_timestamp: RawNumber::Int(ts),
            tx_hash: None,
            stream: RawStream {
                stream_id: None,
                payer: Some(RawAccount { id: "0xaaa".into() }),
                payee: Some(RawAccount { id: "0xbbb".into() }),
                token: Some(RawToken {
                    address: None,
                    symbol: None,
                    decimals: 0,
                }),
                amount_per_sec: Some(RawNumber::Int(ts)),
            },
            old_stream: None,
        }
    }

    #[test]
    fn page_request_advances() {
        let p = PageRequest::first_page(0);
        assert_eq!(p.first, 1);
        assert_eq!(PageRequest::first_page(10).next(), PageRequest { skip: 10, first: 10 });
    }

    #[tokio::test]
    async fn collects_across_pages_newest_first() {
        let feed = MemoryFeed::new((1..=5).map(|t| entry("StreamCreated", t)).collect());
        let events = collect_history(&feed, "0xbbb", 2).await.unwrap();
        let stamps: Vec<i64> = events.iter().map(|e| e.occurred_at).collect();
        assert_eq!(stamps, vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn exact_multiple_of_page_size_terminates() {
        let feed = MemoryFeed::new((1..=4).map(|t| entry("StreamCreated", t)).collect());
        let events = collect_history(&feed, "0xbbb", 2).await.unwrap();
        assert_eq!(events.len(), 4);
    }

    #[tokio::test]
    async fn unknown_kinds_are_suppressed() {
        let feed = MemoryFeed::new(vec![
            entry("StreamCreated", 1),
            entry("StreamPaused", 2),
            entry("StreamCancelled", 3),
        ]);
        let events = collect_history(&feed, "0xbbb", DEFAULT_PAGE_SIZE).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Cancelled);
        assert_eq!(events[1].kind, EventKind::Created);
    }

    #[tokio::test]
    async fn malformed_entry_fails_collection() {
        let mut bad = entry("StreamCreated", 1);
        bad.stream.amount_per_sec = Some(RawNumber::Text("lots".into()));
        let feed = MemoryFeed::new(vec![bad]);
        let err = collect_history(&feed, "0xbbb", 10).await.unwrap_err();
        assert!(matches!(err, FeedError::InvalidAmount { .. }));
    }

    #[tokio::test]
    async fn bad_old_stream_amount_keeps_history() {
        let mut modified = entry("StreamModified", 2);
        modified.old_stream = Some(RawStream {
            amount_per_sec: Some(RawNumber::Text("".into())),
            ..modified.stream.clone()
        });
        let feed = MemoryFeed::new(vec![entry("StreamCreated", 1), modified]);

        let events = collect_history(&feed, "0xbbb", 10).await.unwrap();
        assert_eq!(events.len(), 2);
        let prev = events[0].previous.as_ref().expect("previous snapshot");
        assert_eq!(prev.parties(), Some(("0xaaa", "0xbbb")));
        assert_eq!(prev.amount_per_sec, None);
    }

    #[test]
    fn parses_all_document_shapes() {
        let one = serde_json::to_value(vec![entry("StreamCreated", 1)]).unwrap();

        let bare = one.to_string();
        let wrapped = serde_json::json!({ "history": one }).to_string();
        let graph = serde_json::json!({ "data": { "user": { "historicalEvents": one } } }).to_string();

        for doc in [bare, wrapped, graph] {
            assert_eq!(parse_history_document(&doc).unwrap().len(), 1);
        }
    }

    #[test]
    fn null_user_is_empty_history() {
        let doc = r#"{ "history": null }"#;
        assert!(parse_history_document(doc).unwrap().is_empty());
        let doc = r#"{ "data": { "user": null } }"#;
        assert!(parse_history_document(doc).unwrap().is_empty());
    }

    #[test]
    fn unknown_document_is_rejected() {
        let err = parse_history_document(r#"{ "streams": [] }"#).unwrap_err();
        assert!(matches!(err, FeedError::UnrecognisedDocument { .. }));
    }
}
