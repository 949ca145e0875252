//! Golden fixture integration tests for chainstream-core.
//!
//! Each single-event fixture in `fixtures/history/` holds a raw indexer entry,
//! the viewer, and the expected reconciled view. `user-history.json` is a
//! full indexer response exercised through `JsonFileFeed`.

use chainstream_core::{
    collect_history, rows, AddressLabel, JsonFileFeed, RawHistoryEvent, Reconciler, RowTag,
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/history");
    p.push(name);
    p
}

fn load_fixture(name: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(fixture_path(name)).expect("fixture not found");
    serde_json::from_str(&content).expect("invalid fixture JSON")
}

fn check_fixture(name: &str) -> chainstream_core::DisplayRecord {
    let f = load_fixture(name);
    let raw: RawHistoryEvent =
        serde_json::from_value(f["event"].clone()).expect("invalid event in fixture");
    let event = raw.to_event().expect("convert").expect("known event kind");
    let reconciler = Reconciler::new(f["viewer"].as_str().unwrap());
    let record = reconciler.reconcile(&event);

    assert_eq!(
        record.direction.map(|d| d.to_string()).as_deref(),
        f["expectedDirection"].as_str(),
        "direction mismatch in {name}"
    );
    assert_eq!(
        record.counterparty.to_string(),
        f["expectedCounterparty"].as_str().unwrap(),
        "counterparty mismatch in {name}"
    );
    assert_eq!(record.rate_per_sec, f["expectedRate"].as_str().unwrap());
    assert_eq!(
        rows::render(&record).len() as u64,
        f["expectedRows"].as_u64().unwrap(),
        "row count mismatch in {name}"
    );
    record
}

// ─── Single events ────────────────────────────────────────────────────────────

#[test]
fn golden_created_incoming() {
    let record = check_fixture("created-incoming.json");
    assert_eq!(record.payee_label, AddressLabel::You);
    assert_eq!(record.token_symbol.as_deref(), Some("DAI"));
    assert!(record.tx_hash.is_some());
}

#[test]
fn golden_modified_missing_prior() {
    let f = load_fixture("modified-missing-prior.json");
    let record = check_fixture("modified-missing-prior.json");
    let prev = record.previous.as_deref().expect("previous record");

    let sentinel = f["expectedPreviousLabel"].as_str().unwrap();
    assert_eq!(prev.payer_label.to_string(), sentinel);
    assert_eq!(prev.payee_label.to_string(), sentinel);
    assert_eq!(prev.rate_per_sec, f["expectedPreviousRate"].as_str().unwrap());
}

#[test]
fn golden_cancelled_outgoing() {
    let record = check_fixture("cancelled-outgoing.json");
    let rendered = rows::render(&record);
    assert_eq!(rendered[0].tag, RowTag::Cancelled);
    assert_eq!(rendered[0].payer, AddressLabel::You);
}

// ─── Full history document ────────────────────────────────────────────────────

#[tokio::test]
async fn golden_user_history_document() {
    let feed = JsonFileFeed::open(fixture_path("user-history.json"))
        .await
        .expect("open history fixture");
    let viewer = "0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045";
    let events = collect_history(&feed, viewer, 2).await.expect("collect");

    // the paused entry is suppressed
    assert_eq!(events.len(), 3);
    assert!(events.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));

    let reconciler = Reconciler::new(viewer);
    let records = reconciler.reconcile_all(&events);
    let total_rows: usize = records.iter().map(|r| rows::render(r).len()).sum();
    assert_eq!(total_rows, 4);

    for record in &records {
        assert_eq!(record.payer_label, AddressLabel::You);
        assert_eq!(record.counterparty.to_string(), "0x71c7...976f");
        assert!(record.rate_display.len() <= 13);
    }
}
