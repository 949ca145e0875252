//! Token allow / deny lists applied when presenting token pickers and balances.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub address: &'static str,
    pub name: &'static str,
    pub logo_uri: &'static str,
    pub verified: bool,
}

/// Tokens never offered for streaming.
pub const BLACKLIST: &[&str] = &[
    "0x5729cb3716a315d0bde3b5e489163bf8b9659436",
    "0x6abaedab0ba368f1df52d857f24154cc76c8c972",
];

/// Tokens with curated metadata.
pub const WHITELIST: &[TokenInfo] = &[TokenInfo {
    address: "0x687a6294d0d6d63e751a059bf1ca68e4ae7b13e2",
    name: "Meter",
    logo_uri: "https://assets.coingecko.com/coins/images/12149/large/Meter-Logo-Vertical-Gray-Light-Blue-rgb-200x200px.png?1597618760",
    verified: true,
}];

pub fn is_blacklisted(address: &str) -> bool {
    BLACKLIST.iter().any(|a| a.eq_ignore_ascii_case(address.trim()))
}

pub fn whitelisted(address: &str) -> Option<&'static TokenInfo> {
    WHITELIST
        .iter()
        .find(|t| t.address.eq_ignore_ascii_case(address.trim()))
}
