//! Address comparison and display labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker shown in place of an address that is the viewer's own.
pub const SELF_LABEL: &str = "You";

/// Marker shown when the indexer did not supply an address.
pub const MISSING_LABEL: &str = "DNE";

/// Addresses up to this many characters are shown whole.
const SHORTEN_THRESHOLD: usize = 10;
const HEAD_CHARS: usize = 6;
const TAIL_CHARS: usize = 4;

/// Case-insensitive address equality (EVM addresses differ only by checksum case).
pub fn same_address(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Shorten an address for a table cell: `0xd8dA…6045` becomes `0xd8dA...6045`.
/// Short inputs are returned unchanged.
pub fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.trim().chars().collect();
    if chars.len() <= SHORTEN_THRESHOLD {
        return chars.into_iter().collect();
    }
    let head: String = chars[..HEAD_CHARS].iter().collect();
    let tail: String = chars[chars.len() - TAIL_CHARS..].iter().collect();
    format!("{head}...{tail}")
}

/// What to show in one address slot of a history row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AddressLabel {
    /// The slot holds the viewer's own address.
    You,
    /// Someone else; holds the shortened address.
    Address(String),
    /// The upstream data had no address for this slot.
    DoesNotExist,
}

impl AddressLabel {
    /// Label a slot from the viewer's point of view.
    pub fn for_slot(address: Option<&str>, viewer: &str) -> Self {
        match address {
            None => Self::DoesNotExist,
            Some(a) if same_address(a, viewer) => Self::You,
            Some(a) => Self::Address(shorten(a)),
        }
    }

    pub fn is_you(&self) -> bool {
        matches!(self, Self::You)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::DoesNotExist)
    }
}

impl fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::You => f.write_str(SELF_LABEL),
            Self::Address(short) => f.write_str(short),
            Self::DoesNotExist => f.write_str(MISSING_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    #[test]
    fn same_address_ignores_case() {
        assert!(same_address(VITALIK, &VITALIK.to_lowercase()));
        assert!(!same_address(VITALIK, "0xd8da"));
    }

    #[test]
    fn shorten_long_address() {
        assert_eq!(shorten(VITALIK), "0xd8dA...6045");
    }

    #[test]
    fn shorten_keeps_short_input() {
        assert_eq!(shorten("0xAAA"), "0xAAA");
        assert_eq!(shorten("0x12345678"), "0x12345678");
    }

    #[test]
    fn slot_labels() {
        assert_eq!(AddressLabel::for_slot(Some("0xABC"), "0xabc"), AddressLabel::You);
        assert_eq!(
            AddressLabel::for_slot(Some("0xAAA"), "0xbbb"),
            AddressLabel::Address("0xAAA".into())
        );
        assert_eq!(AddressLabel::for_slot(None, "0xbbb"), AddressLabel::DoesNotExist);
    }

    #[test]
    fn label_display() {
        assert_eq!(AddressLabel::You.to_string(), "You");
        assert_eq!(AddressLabel::DoesNotExist.to_string(), "DNE");
        assert_eq!(AddressLabel::Address("0xAAA".into()).to_string(), "0xAAA");
    }
}
