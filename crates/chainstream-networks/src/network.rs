//! Network metadata record.

use serde::{Deserialize, Serialize};

/// The chain's gas token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: 18,
        }
    }
}

/// Everything the app needs to talk to one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDetails {
    /// EVM chain ID.
    pub chain_id: u64,
    /// Display name, e.g. "Avalanche".
    pub name: String,
    pub rpc_url: String,
    /// Stream history indexer endpoint.
    pub subgraph_endpoint: String,
    /// Stream factory contract.
    pub stream_factory: String,
    pub disperse: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
    pub vesting_factory: String,
    /// Vesting reason contract; the zero address when none is deployed.
    pub vesting_reason: String,
    /// Token escrow contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments_contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments_graph_api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_subgraph: Option<String>,
    pub block_explorer_url: String,
    pub block_explorer_name: String,
    /// Asset-repository prefix (`ethereum`, `avax`, ...).
    pub prefix: String,
    pub logo_uri: String,
    /// Token list identifier, when the chain has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_list_id: Option<String>,
    pub native_currency: NativeCurrency,
    #[serde(default)]
    pub testnet: bool,
    /// Offered in the chain picker.
    #[serde(default)]
    pub listed: bool,
}

impl NetworkDetails {
    /// Link to a transaction on this chain's explorer.
    pub fn tx_url(&self, tx_hash: &str) -> String {
        join_url(&self.block_explorer_url, "tx", tx_hash)
    }

    /// Link to an address on this chain's explorer.
    pub fn address_url(&self, address: &str) -> String {
        join_url(&self.block_explorer_url, "address", address)
    }

    pub fn has_vesting_reason(&self) -> bool {
        !self.vesting_reason.eq_ignore_ascii_case(crate::ZERO_ADDRESS)
    }
}

fn join_url(base: &str, segment: &str, value: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), segment, value)
}
