//! Chain-id keyed network lookup.
//!
//! The built-in table is built on first use and shared for the life of the
//! process. Lookups of unknown chains return `None`; there is no default
//! network.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::network::NetworkDetails;

/// Read-only lookup of network metadata by chain ID.
pub trait NetworkRegistry: Send + Sync {
    fn get(&self, chain_id: u64) -> Option<&NetworkDetails>;

    /// All known chain IDs, ascending.
    fn chain_ids(&self) -> Vec<u64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Explorer name for `chain_id`, or `fallback` when the chain is unknown.
    fn explorer_name_or<'a>(&'a self, chain_id: u64, fallback: &'a str) -> &'a str {
        self.get(chain_id)
            .map(|n| n.block_explorer_name.as_str())
            .unwrap_or(fallback)
    }

    fn tx_url(&self, chain_id: u64, tx_hash: &str) -> Option<String> {
        self.get(chain_id).map(|n| n.tx_url(tx_hash))
    }

    fn address_url(&self, chain_id: u64, address: &str) -> Option<String> {
        self.get(chain_id).map(|n| n.address_url(address))
    }
}

/// Immutable in-memory network table.
#[derive(Debug, Clone, Default)]
pub struct StaticNetworks {
    by_chain_id: BTreeMap<u64, NetworkDetails>,
}

static BUILTIN: OnceLock<StaticNetworks> = OnceLock::new();

impl StaticNetworks {
    /// The bundled deployment table.
    pub fn builtin() -> &'static StaticNetworks {
        BUILTIN.get_or_init(|| Self::from_entries(crate::builtin::entries()))
    }

    /// Build a table from explicit entries. Later entries replace earlier
    /// ones with the same chain ID.
    pub fn from_entries(entries: impl IntoIterator<Item = NetworkDetails>) -> Self {
        Self {
            by_chain_id: entries.into_iter().map(|n| (n.chain_id, n)).collect(),
        }
    }

    /// Load a table from a JSON array of [`NetworkDetails`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<NetworkDetails> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Networks offered in the chain picker, mainnets first, then by name.
    pub fn listed(&self) -> Vec<&NetworkDetails> {
        let mut out: Vec<&NetworkDetails> = self.by_chain_id.values().filter(|n| n.listed).collect();
        out.sort_by(|a, b| a.testnet.cmp(&b.testnet).then_with(|| a.name.cmp(&b.name)));
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkDetails> {
        self.by_chain_id.values()
    }

    /// Case-insensitive lookup by display name.
    pub fn by_name(&self, name: &str) -> Option<&NetworkDetails> {
        self.by_chain_id
            .values()
            .find(|n| n.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl NetworkRegistry for StaticNetworks {
    fn get(&self, chain_id: u64) -> Option<&NetworkDetails> {
        self.by_chain_id.get(&chain_id)
    }

    fn chain_ids(&self) -> Vec<u64> {
        self.by_chain_id.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.by_chain_id.len()
    }
}
