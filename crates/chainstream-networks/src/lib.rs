//! chainstream-networks — per-chain deployment metadata.
//!
//! Each supported chain maps to its RPC endpoint, subgraph, stream factory,
//! disperse / vesting / escrow contracts, and block explorer.
//!
//! # Quick start
//! ```rust
//! use chainstream_networks::{NetworkRegistry, StaticNetworks, DEFAULT_EXPLORER_LABEL};
//!
//! let networks = StaticNetworks::builtin();
//! assert_eq!(networks.explorer_name_or(43114, DEFAULT_EXPLORER_LABEL), "Snowtrace");
//! assert_eq!(networks.explorer_name_or(999_999, DEFAULT_EXPLORER_LABEL), "Block Explorer");
//! ```

pub mod network;
pub mod registry;
pub mod tokens;

mod builtin;

pub use network::{NativeCurrency, NetworkDetails};
pub use registry::{NetworkRegistry, StaticNetworks};

/// Label callers fall back to when a chain has no known explorer.
pub const DEFAULT_EXPLORER_LABEL: &str = "Block Explorer";

/// The zero address, used as the "no vesting reason" marker.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Chains where the payment bot contract is deployed.
pub const BOT_DEPLOYED_ON: &[u64] = &[43114, 5, 1, 137, 10, 250, 56];

pub fn bot_deployed(chain_id: u64) -> bool {
    BOT_DEPLOYED_ON.contains(&chain_id)
}
