//! Stream snapshots, events, and the indexer wire shape they are built from.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::amount::format_units;
use crate::error::FeedError;

// ─── EventKind ────────────────────────────────────────────────────────────────

/// The three stream mutations the history feed reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Created,
    Modified,
    Cancelled,
}

impl EventKind {
    /// Parse an upstream event name.
    ///
    /// Accepts the indexer names (`StreamCreated`, `StreamModified`,
    /// `StreamCancelled`) and the bare forms, case-insensitively. Anything
    /// else is `None`: feeds are not schema-guaranteed.
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("stream").unwrap_or(&lower);
        match bare {
            "created" => Some(Self::Created),
            "modified" => Some(Self::Modified),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The indexer's name for this kind.
    pub fn upstream_name(&self) -> &'static str {
        match self {
            Self::Created => "StreamCreated",
            Self::Modified => "StreamModified",
            Self::Cancelled => "StreamCancelled",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Modified => "Modified",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── StreamSnapshot ───────────────────────────────────────────────────────────

/// The economic terms of a stream at one instant.
///
/// `payer` / `payee` are optional because predecessor snapshots coming from
/// the indexer can be incomplete (e.g. the creation was never indexed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSnapshot {
    /// Address paying into the stream.
    pub payer: Option<String>,
    /// Address receiving the stream.
    pub payee: Option<String>,
    /// Decimals of the streamed token.
    pub token_decimals: u8,
    /// Rate in the token's smallest unit per second. Absent when the indexer
    /// reported a prior stream without a usable rate.
    #[serde(default, with = "u256_decimal", skip_serializing_if = "Option::is_none")]
    pub amount_per_sec: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
}

impl StreamSnapshot {
    pub fn new(
        payer: impl Into<String>,
        payee: impl Into<String>,
        token_decimals: u8,
        amount_per_sec: U256,
    ) -> Self {
        Self {
            payer: Some(payer.into()),
            payee: Some(payee.into()),
            token_decimals,
            amount_per_sec: Some(amount_per_sec),
            token_symbol: None,
            token_address: None,
            stream_id: None,
        }
    }

    /// A snapshot whose parties are unknown.
    pub fn without_parties(token_decimals: u8, amount_per_sec: U256) -> Self {
        Self {
            payer: None,
            payee: None,
            token_decimals,
            amount_per_sec: Some(amount_per_sec),
            token_symbol: None,
            token_address: None,
            stream_id: None,
        }
    }

    pub fn with_token_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.token_symbol = Some(symbol.into());
        self
    }

    pub fn with_stream_id(mut self, id: impl Into<String>) -> Self {
        self.stream_id = Some(id.into());
        self
    }

    /// `(payer, payee)` when both are known.
    pub fn parties(&self) -> Option<(&str, &str)> {
        match (&self.payer, &self.payee) {
            (Some(payer), Some(payee)) => Some((payer.as_str(), payee.as_str())),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.parties().is_some()
    }

    /// Exact token-denominated rate per second, `None` when the rate is
    /// unknown.
    pub fn rate_per_sec(&self) -> Option<String> {
        self.amount_per_sec
            .as_ref()
            .map(|raw| format_units(raw, self.token_decimals))
    }
}

// ─── StreamEvent ──────────────────────────────────────────────────────────────

/// One state transition of a stream.
///
/// `previous` is only meaningful for [`EventKind::Modified`]; the
/// constructors keep it absent for the other kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub kind: EventKind,
    /// Unix seconds.
    pub occurred_at: i64,
    /// State after the event (for cancellations: the terminal rate).
    pub current: StreamSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<StreamSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

impl StreamEvent {
    pub fn created(occurred_at: i64, current: StreamSnapshot) -> Self {
        Self {
            kind: EventKind::Created,
            occurred_at,
            current,
            previous: None,
            tx_hash: None,
        }
    }

    pub fn cancelled(occurred_at: i64, current: StreamSnapshot) -> Self {
        Self {
            kind: EventKind::Cancelled,
            occurred_at,
            current,
            previous: None,
            tx_hash: None,
        }
    }

    /// A modification. `previous` may be `None` when the indexer has no
    /// record of the old stream; the reconciler degrades to a sentinel.
    pub fn modified(
        occurred_at: i64,
        previous: Option<StreamSnapshot>,
        current: StreamSnapshot,
    ) -> Self {
        Self {
            kind: EventKind::Modified,
            occurred_at,
            current,
            previous,
            tx_hash: None,
        }
    }

    pub fn with_tx_hash(mut self, hash: impl Into<String>) -> Self {
        self.tx_hash = Some(hash.into());
        self
    }
}

// ─── Wire shape ───────────────────────────────────────────────────────────────

/// A number the indexer may send either as a JSON number or a decimal string.
///
/// JSON integers beyond `u64` reach the deserializer as floats; integral ones
/// are kept as their full decimal expansion in [`RawNumber::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(u64),
    Text(String),
}

impl RawNumber {
    pub fn to_u256(&self) -> Option<U256> {
        match self {
            Self::Int(v) => Some(U256::from(*v)),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                U256::from_str_radix(s, 10).ok()
            }
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => i64::try_from(*v).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl<'de> Deserialize<'de> for RawNumber {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(RawNumberVisitor)
    }
}

struct RawNumberVisitor;

impl<'de> serde::de::Visitor<'de> for RawNumberVisitor {
    type Value = RawNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal string")
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<RawNumber, E> {
        Ok(RawNumber::Int(v))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<RawNumber, E> {
        Ok(match u64::try_from(v) {
            Ok(v) => RawNumber::Int(v),
            Err(_) => RawNumber::Text(v.to_string()),
        })
    }

    fn visit_u128<E: serde::de::Error>(self, v: u128) -> Result<RawNumber, E> {
        Ok(RawNumber::Text(v.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<RawNumber, E> {
        // non-integral or negative values stay unparseable as amounts
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
            Ok(RawNumber::Text(format!("{v:.0}")))
        } else {
            Ok(RawNumber::Text(v.to_string()))
        }
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<RawNumber, E> {
        Ok(RawNumber::Text(v.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<RawNumber, E> {
        Ok(RawNumber::Text(v))
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// An account reference (`{ "id": "0x…" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAccount {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub decimals: u8,
}

/// Stream state as embedded in a history entry. Every field is optional
/// because `oldStream` is frequently partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStream {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<RawAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<RawAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<RawToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_per_sec: Option<RawNumber>,
}

/// One entry of a user's history as returned by the indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHistoryEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub event_type: String,
    pub created_timestamp: RawNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    pub stream: RawStream,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_stream: Option<RawStream>,
}

impl RawHistoryEvent {
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::parse(&self.event_type)
    }

    /// Convert into a [`StreamEvent`].
    ///
    /// Returns `Ok(None)` for an unknown event type. A stray `oldStream` on a
    /// creation or cancellation is dropped. A partial `oldStream` on a
    /// modification is kept with whatever parties it has; its decimals fall
    /// back to the current token's.
    pub fn to_event(&self) -> Result<Option<StreamEvent>, FeedError> {
        let Some(kind) = self.kind() else {
            return Ok(None);
        };

        let occurred_at =
            self.created_timestamp
                .to_i64()
                .ok_or_else(|| FeedError::InvalidTimestamp {
                    value: self.created_timestamp.to_string(),
                })?;

        let current = self.stream.to_snapshot("stream")?;
        let previous = match (kind, &self.old_stream) {
            (EventKind::Modified, Some(old)) => Some(old.to_prior_snapshot(current.token_decimals)),
            _ => None,
        };

        Ok(Some(StreamEvent {
            kind,
            occurred_at,
            current,
            previous,
            tx_hash: self.tx_hash.clone(),
        }))
    }
}

impl RawStream {
    fn to_snapshot(&self, field: &str) -> Result<StreamSnapshot, FeedError> {
        let token = self.token.as_ref().ok_or_else(|| FeedError::MissingField {
            field: format!("{field}.token"),
        })?;
        let raw = self
            .amount_per_sec
            .as_ref()
            .ok_or_else(|| FeedError::MissingField {
                field: format!("{field}.amountPerSec"),
            })?;
        let amount = parse_amount(raw, field)?;
        Ok(self.build(token.decimals, Some(amount)))
    }

    /// The predecessor is optional data: whatever parties it names are kept,
    /// and a missing or unparseable rate leaves the amount unknown.
    fn to_prior_snapshot(&self, fallback_decimals: u8) -> StreamSnapshot {
        let amount = self.amount_per_sec.as_ref().and_then(|raw| {
            let parsed = raw.to_u256();
            if parsed.is_none() {
                warn!(value = %raw, "ignoring unparseable oldStream.amountPerSec");
            }
            parsed
        });
        let decimals = self.token.as_ref().map_or(fallback_decimals, |t| t.decimals);
        self.build(decimals, amount)
    }

    fn build(&self, token_decimals: u8, amount_per_sec: Option<U256>) -> StreamSnapshot {
        StreamSnapshot {
            payer: self.payer.as_ref().map(|a| a.id.clone()),
            payee: self.payee.as_ref().map(|a| a.id.clone()),
            token_decimals,
            amount_per_sec,
            token_symbol: self.token.as_ref().and_then(|t| t.symbol.clone()),
            token_address: self.token.as_ref().and_then(|t| t.address.clone()),
            stream_id: self.stream_id.clone(),
        }
    }
}

fn parse_amount(raw: &RawNumber, field: &str) -> Result<U256, FeedError> {
    raw.to_u256().ok_or_else(|| FeedError::InvalidAmount {
        field: format!("{field}.amountPerSec"),
        value: raw.to_string(),
    })
}

/// Serialize `U256` as a decimal string; accept a decimal string or a JSON
/// number when reading.
mod u256_decimal {
    use super::RawNumber;
    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<U256>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_some(&v.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<U256>, D::Error> {
        match Option::<RawNumber>::deserialize(d)? {
            Some(raw) => raw
                .to_u256()
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid amount: {raw}"))),
            None => Ok(None),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(n: u128) -> U256 {
        U256::from(n)
    }

    fn raw_event(event_type: &str, old_stream: Option<RawStream>) -> RawHistoryEvent {
        RawHistoryEvent {
            id: None,
            event_type: event_type.into(),
            created_timestamp: RawNumber::Text("1650000000".into()),
            tx_hash: Some("0xfeed".into()),
            stream: RawStream {
                stream_id: Some("0x01".into()),
                payer: Some(RawAccount { id: "0xaaa".into() }),
                payee: Some(RawAccount { id: "0xbbb".into() }),
                token: Some(RawToken {
                    address: None,
                    symbol: Some("DAI".into()),
                    decimals: 18,
                }),
                amount_per_sec: Some(RawNumber::Text("1000000000000000000".into())),
            },
            old_stream,
        }
    }

    #[test]
    fn event_kind_parses_upstream_and_bare_names() {
        assert_eq!(EventKind::parse("StreamCreated"), Some(EventKind::Created));
        assert_eq!(EventKind::parse("streammodified"), Some(EventKind::Modified));
        assert_eq!(EventKind::parse("Cancelled"), Some(EventKind::Cancelled));
        assert_eq!(EventKind::parse("StreamPaused"), None);
        assert_eq!(EventKind::parse(""), None);
    }

    #[test]
    fn upstream_name_roundtrips_through_parse() {
        for kind in [EventKind::Created, EventKind::Modified, EventKind::Cancelled] {
            assert_eq!(EventKind::parse(kind.upstream_name()), Some(kind));
        }
    }

    #[test]
    fn raw_number_rejects_garbage() {
        assert_eq!(RawNumber::Int(7).to_u256(), Some(wei(7)));
        assert_eq!(RawNumber::Text(" 42 ".into()).to_u256(), Some(wei(42)));
        assert_eq!(RawNumber::Text("-1".into()).to_u256(), None);
        assert_eq!(RawNumber::Text("1e18".into()).to_u256(), None);
        assert_eq!(RawNumber::Text("".into()).to_u256(), None);
    }

    #[test]
    fn created_event_drops_stray_old_stream() {
        let raw = raw_event("StreamCreated", Some(RawStream::default()));
        let event = raw.to_event().unwrap().unwrap();
        assert_eq!(event.kind, EventKind::Created);
        assert_eq!(event.occurred_at, 1_650_000_000);
        assert!(event.previous.is_none());
        assert_eq!(event.current.token_symbol.as_deref(), Some("DAI"));
        assert_eq!(event.tx_hash.as_deref(), Some("0xfeed"));
    }

    #[test]
    fn modified_event_prior_inherits_current_decimals() {
        let old = RawStream {
            amount_per_sec: Some(RawNumber::Text("500000000000000000".into())),
            ..Default::default()
        };
        let event = raw_event("StreamModified", Some(old)).to_event().unwrap().unwrap();
        let prev = event.previous.expect("previous snapshot");
        assert_eq!(prev.token_decimals, 18);
        assert!(!prev.is_complete());
        assert_eq!(prev.rate_per_sec().as_deref(), Some("0.5"));
    }

    #[test]
    fn modified_event_without_old_amount_keeps_old_parties() {
        let old = RawStream {
            payer: Some(RawAccount { id: "0xaaa".into() }),
            payee: Some(RawAccount { id: "0xccc".into() }),
            ..Default::default()
        };
        let event = raw_event("StreamModified", Some(old)).to_event().unwrap().unwrap();
        let prev = event.previous.expect("previous snapshot");
        assert_eq!(prev.parties(), Some(("0xaaa", "0xccc")));
        assert_eq!(prev.amount_per_sec, None);
        assert_eq!(prev.rate_per_sec(), None);
    }

    #[test]
    fn unparseable_old_amount_is_not_an_error() {
        let old = RawStream {
            payer: Some(RawAccount { id: "0xaaa".into() }),
            payee: Some(RawAccount { id: "0xbbb".into() }),
            amount_per_sec: Some(RawNumber::Text("".into())),
            ..Default::default()
        };
        let event = raw_event("StreamModified", Some(old)).to_event().unwrap().unwrap();
        let prev = event.previous.expect("previous snapshot");
        assert!(prev.is_complete());
        assert_eq!(prev.amount_per_sec, None);
    }

    #[test]
    fn numeric_amount_beyond_u64_deserializes() {
        let json = r#"{
            "eventType": "StreamCreated",
            "createdTimestamp": 1650000000,
            "stream": {
                "payer": { "id": "0xAAA" },
                "payee": { "id": "0xBBB" },
                "token": { "decimals": 18, "symbol": "DAI" },
                "amountPerSec": 100000000000000000000
            }
        }"#;
        let raw: RawHistoryEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            raw.stream.amount_per_sec,
            Some(RawNumber::Text("100000000000000000000".into()))
        );
        let event = raw.to_event().unwrap().unwrap();
        assert_eq!(event.current.rate_per_sec().as_deref(), Some("100"));
    }

    #[test]
    fn fractional_numeric_amount_is_rejected() {
        let raw: RawNumber = serde_json::from_str("1.5").unwrap();
        assert_eq!(raw.to_u256(), None);
        let raw: RawNumber = serde_json::from_str("-3").unwrap();
        assert_eq!(raw.to_u256(), None);
        let raw: RawNumber = serde_json::from_str("7").unwrap();
        assert_eq!(raw, RawNumber::Int(7));
    }

    #[test]
    fn unknown_event_type_is_suppressed() {
        let raw = raw_event("StreamPaused", None);
        assert!(raw.to_event().unwrap().is_none());
    }

    #[test]
    fn invalid_timestamp_is_an_error() {
        let mut raw = raw_event("StreamCreated", None);
        raw.created_timestamp = RawNumber::Text("yesterday".into());
        let err = raw.to_event().unwrap_err();
        assert!(matches!(err, FeedError::InvalidTimestamp { .. }));
        assert!(err.is_data_error());
    }

    #[test]
    fn missing_token_is_an_error() {
        let mut raw = raw_event("StreamCreated", None);
        raw.stream.token = None;
        match raw.to_event() {
            Err(FeedError::MissingField { field }) => assert_eq!(field, "stream.token"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn wire_shape_deserializes_indexer_json() {
        let json = r#"{
            "eventType": "StreamModified",
            "createdTimestamp": 1650000000,
            "stream": {
                "payer": { "id": "0xAAA" },
                "payee": { "id": "0xBBB" },
                "token": { "decimals": 6, "symbol": "USDC" },
                "amountPerSec": "2500000"
            },
            "oldStream": {
                "payer": { "id": "0xAAA" },
                "payee": { "id": "0xCCC" },
                "amountPerSec": "1000000"
            }
        }"#;
        let raw: RawHistoryEvent = serde_json::from_str(json).unwrap();
        let event = raw.to_event().unwrap().unwrap();
        assert_eq!(event.current.rate_per_sec().as_deref(), Some("2.5"));
        assert_eq!(event.previous.unwrap().payee.as_deref(), Some("0xCCC"));
    }

    #[test]
    fn snapshot_amount_serializes_as_decimal_string() {
        let snap = StreamSnapshot::new("0xa", "0xb", 18, wei(1_000_000_000_000_000_000));
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["amount_per_sec"], "1000000000000000000");
        let back: StreamSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }
}
