//! `chainstream networks list|show` and `chainstream explorer`.

use anyhow::{anyhow, Result};
use chainstream_networks::{
    bot_deployed, NetworkDetails, NetworkRegistry, StaticNetworks, DEFAULT_EXPLORER_LABEL,
};

pub fn run_list(all: bool, as_json: bool) -> Result<()> {
    let networks = StaticNetworks::builtin();
    let entries: Vec<&NetworkDetails> = if all {
        networks.iter().collect()
    } else {
        networks.listed()
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:>8}  {:<20} {:<7}  {}", "CHAIN", "NAME", "SYMBOL", "EXPLORER");
    for n in entries {
        println!(
            "{:>8}  {:<20} {:<7}  {}{}",
            n.chain_id,
            n.name,
            n.native_currency.symbol,
            n.block_explorer_name,
            if n.testnet { "  (testnet)" } else { "" },
        );
    }
    Ok(())
}

/// `chain` is a numeric id or a display name.
pub fn run_show(chain: &str, as_json: bool) -> Result<()> {
    let networks = StaticNetworks::builtin();
    let details = resolve(networks, chain)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(details)?);
        return Ok(());
    }

    println!("{} (chain {})", details.name, details.chain_id);
    println!("  Native currency:  {} ({} decimals)", details.native_currency.symbol, details.native_currency.decimals);
    println!("  RPC:              {}", details.rpc_url);
    println!("  Subgraph:         {}", details.subgraph_endpoint);
    println!("  Stream factory:   {}", details.stream_factory);
    println!("  Disperse:         {}", details.disperse);
    println!("  Vesting factory:  {}", details.vesting_factory);
    if details.has_vesting_reason() {
        println!("  Vesting reason:   {}", details.vesting_reason);
    }
    if let Some(escrow) = &details.payments_contract {
        println!("  Payments:         {escrow}");
    }
    if let Some(bot) = &details.bot {
        let status = if bot_deployed(details.chain_id) { "" } else { " (not deployed)" };
        println!("  Bot:              {bot}{status}");
    }
    println!("  Explorer:         {} <{}>", details.block_explorer_name, details.block_explorer_url);
    println!("  Testnet:          {}", details.testnet);
    Ok(())
}

/// Print the explorer label and, when the chain is known, a link for the
/// transaction or address.
pub fn run_explorer(chain_id: u64, tx: Option<&str>, address: Option<&str>) -> Result<()> {
    let networks = StaticNetworks::builtin();
    let label = networks.explorer_name_or(chain_id, DEFAULT_EXPLORER_LABEL);

    let link = match (tx, address) {
        (Some(hash), _) => networks.tx_url(chain_id, hash),
        (None, Some(addr)) => networks.address_url(chain_id, addr),
        (None, None) => networks.get(chain_id).map(|n| n.block_explorer_url.clone()),
    };

    match link {
        Some(url) => println!("View on {label}: {url}"),
        None => println!("{label} (chain {chain_id} is not supported)"),
    }
    Ok(())
}

fn resolve<'a>(networks: &'a StaticNetworks, chain: &str) -> Result<&'a NetworkDetails> {
    let found = match chain.trim().parse::<u64>() {
        Ok(id) => networks.get(id),
        Err(_) => networks.by_name(chain),
    };
    found.ok_or_else(|| anyhow!("unknown chain '{chain}'; run `chainstream networks list --all`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_by_id_or_name() {
        let networks = StaticNetworks::builtin();
        assert_eq!(resolve(networks, "43114").unwrap().name, "Avalanche");
        assert_eq!(resolve(networks, "avalanche").unwrap().chain_id, 43114);
    }

    #[test]
    fn resolve_unknown_chain_fails() {
        let err = resolve(StaticNetworks::builtin(), "999999").unwrap_err();
        assert!(err.to_string().contains("unknown chain"));
    }

    #[test]
    fn explorer_for_unknown_chain_is_not_an_error() {
        assert!(run_explorer(999_999, Some("0xabc"), None).is_ok());
    }
}
