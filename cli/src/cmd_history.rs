//! `chainstream history` and `chainstream export`.
//!
//! Both commands load a stream-history document, reconcile it for one
//! viewer, and print it (table / JSON) or write it as CSV.

use anyhow::{Context, Result};
use chainstream_core::amount::{amount_per_period, format_amount};
use chainstream_core::rows::render;
use chainstream_core::{collect_history, DisplayRecord, JsonFileFeed, Period, Reconciler, StreamEvent};
use chainstream_export::{format_timestamp, HistoryExporter};
use chainstream_networks::tokens::{is_blacklisted, whitelisted};
use chainstream_networks::{NetworkRegistry, StaticNetworks, DEFAULT_EXPLORER_LABEL};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

// ─── Shared loading ───────────────────────────────────────────────────────────

/// Load, order, and reconcile the history in `file` for `viewer`.
async fn load(file: &Path, viewer: &str, page_size: usize) -> Result<(Vec<StreamEvent>, Vec<DisplayRecord>)> {
    let feed = JsonFileFeed::open(file)
        .await
        .with_context(|| format!("load history file '{}'", file.display()))?;

    let events = collect_history(&feed, viewer, page_size)
        .await
        .context("collect stream history")?;
    let events = apply_token_lists(events);

    let records = Reconciler::new(viewer).reconcile_all(&events);
    info!(viewer, events = records.len(), "history reconciled");
    Ok((events, records))
}

/// Drop streams of blacklisted tokens and name whitelisted tokens the feed
/// left without a symbol.
fn apply_token_lists(events: Vec<StreamEvent>) -> Vec<StreamEvent> {
    events
        .into_iter()
        .filter(|event| {
            let blocked = event
                .current
                .token_address
                .as_deref()
                .is_some_and(is_blacklisted);
            if blocked {
                debug!(occurred_at = event.occurred_at, "skipping blacklisted token stream");
            }
            !blocked
        })
        .map(|mut event| {
            for snapshot in std::iter::once(&mut event.current).chain(event.previous.as_mut()) {
                if snapshot.token_symbol.is_none() {
                    snapshot.token_symbol = snapshot
                        .token_address
                        .as_deref()
                        .and_then(whitelisted)
                        .map(|token| token.name.to_string());
                }
            }
            event
        })
        .collect()
}

// ─── history ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    record: &'a DisplayRecord,
    amount_per_period: String,
    period: Period,
    #[serde(skip_serializing_if = "Option::is_none")]
    explorer_url: Option<String>,
}

pub async fn run_history(
    file: &Path,
    viewer: &str,
    chain_id: u64,
    page_size: usize,
    period: Period,
    as_json: bool,
) -> Result<()> {
    let (events, records) = load(file, viewer, page_size).await?;
    let networks = StaticNetworks::builtin();
    let explorer = networks.explorer_name_or(chain_id, DEFAULT_EXPLORER_LABEL);

    if as_json {
        let entries: Vec<JsonEntry<'_>> = events
            .iter()
            .zip(&records)
            .map(|(event, record)| JsonEntry {
                record,
                amount_per_period: projected(event, period),
                period,
                explorer_url: record
                    .tx_hash
                    .as_deref()
                    .and_then(|hash| networks.tx_url(chain_id, hash)),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No stream history for {viewer}");
        return Ok(());
    }

    println!("Stream history for {viewer}");
    println!();
    for (event, record) in events.iter().zip(&records) {
        let direction = record.direction.map(|d| d.as_str()).unwrap_or("-");
        let symbol = record.token_symbol.as_deref().unwrap_or("");
        println!(
            "{}  {:<9}  {:<8}  {:<13}  {} {} / {}",
            format_timestamp(record.occurred_at),
            record.kind,
            direction,
            record.counterparty.to_string(),
            projected(event, period),
            symbol,
            period,
        );
        for row in render(record) {
            println!("    [{}] {}", row.tag.tooltip(), row);
        }
        if let Some(url) = record.tx_hash.as_deref().and_then(|h| networks.tx_url(chain_id, h)) {
            println!("    {explorer}: {url}");
        }
    }
    Ok(())
}

fn projected(event: &StreamEvent, period: Period) -> String {
    match &event.current.amount_per_sec {
        Some(raw) => format_amount(amount_per_period(raw, period)),
        None => "NaN".to_string(),
    }
}

// ─── export ──────────────────────────────────────────────────────────────────

pub async fn run_export(
    file: &Path,
    viewer: &str,
    page_size: usize,
    output: Option<&Path>,
    delimiter: char,
) -> Result<()> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .context("delimiter must be a single ASCII character")?;

    let (_, records) = load(file, viewer, page_size).await?;
    let exporter = HistoryExporter::new().with_delimiter(delimiter);

    match output {
        Some(path) => {
            let rows = exporter
                .write_file(&records, path)
                .with_context(|| format!("write CSV to '{}'", path.display()))?;
            eprintln!("Exported {rows} events to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            exporter.write_csv(&records, stdout.lock())?;
        }
    }
    Ok(())
}
