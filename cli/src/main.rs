//! ChainStream CLI — inspect payment-stream history and network metadata.
//!
//! # Commands
//! ```text
//! chainstream history  --file <history.json> --viewer <addr> [--period month] [--json]
//! chainstream export   --file <history.json> --viewer <addr> [--output <out.csv>]
//! chainstream networks list [--all] [--json]
//! chainstream networks show <chain-id | name>
//! chainstream explorer --chain-id <id> [--tx <hash> | --address <addr>]
//! chainstream info
//! ```

use anyhow::Result;
use chainstream_core::Period;
use chainstream_observability::init_tracing;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd_history;
mod cmd_networks;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(
    name = "chainstream",
    about = "Payment-stream history and network metadata — ChainStream CLI",
    long_about = "
ChainStream CLI: reconcile stream lifecycle events (created, modified,
cancelled) into per-viewer history, export it as CSV, and look up the
per-chain deployment metadata.

ENVIRONMENT VARIABLES:
  RUST_LOG    Log filter; overrides the config file and --verbose
",
    version
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file (log, viewer, chain_id, page_size)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reconciled stream history for a viewer
    History {
        /// History document (indexer response or bare event array)
        #[arg(short, long)]
        file: PathBuf,
        /// Viewer address (default: `viewer` from the config file)
        #[arg(long)]
        viewer: Option<String>,
        /// Chain used for explorer links (default: config, then 1)
        #[arg(long)]
        chain_id: Option<u64>,
        /// Period to project rates onto: hour, day, week, biweek, month, year
        #[arg(long, default_value = "month")]
        period: Period,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export reconciled stream history as CSV
    Export {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        viewer: Option<String>,
        /// Output CSV path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },

    /// Supported networks
    Networks {
        #[command(subcommand)]
        action: NetworksAction,
    },

    /// Block explorer label and link for a chain
    Explorer {
        #[arg(long)]
        chain_id: u64,
        /// Transaction hash to link
        #[arg(long, conflicts_with = "address")]
        tx: Option<String>,
        /// Address to link
        #[arg(long)]
        address: Option<String>,
    },

    /// Show ChainStream build and capability info
    Info,
}

#[derive(Subcommand)]
enum NetworksAction {
    /// List networks offered in the chain picker
    List {
        /// Include unlisted networks
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show the deployment details of one network
    Show {
        /// Chain id or display name
        chain: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    let log = if cli.verbose { config.log.clone().verbose() } else { config.log.clone() };
    if let Err(err) = init_tracing(&log) {
        eprintln!("warning: logging not initialised: {err}");
    }

    match cli.command {
        Commands::History { file, viewer, chain_id, period, json } => {
            let viewer = config.resolve_viewer(viewer)?;
            let chain_id = chain_id.unwrap_or(config.chain_id);
            cmd_history::run_history(&file, &viewer, chain_id, config.page_size, period, json).await
        }

        Commands::Export { file, viewer, output, delimiter } => {
            let viewer = config.resolve_viewer(viewer)?;
            cmd_history::run_export(&file, &viewer, config.page_size, output.as_deref(), delimiter).await
        }

        Commands::Networks { action } => match action {
            NetworksAction::List { all, json } => cmd_networks::run_list(all, json),
            NetworksAction::Show { chain, json } => cmd_networks::run_show(&chain, json),
        },

        Commands::Explorer { chain_id, tx, address } => {
            cmd_networks::run_explorer(chain_id, tx.as_deref(), address.as_deref())
        }

        Commands::Info => cmd_info(),
    }
}

fn cmd_info() -> Result<()> {
    use chainstream_networks::StaticNetworks;

    let networks = StaticNetworks::builtin();
    println!("ChainStream v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Capabilities:");
    println!("  ✓ Stream history reconciliation  (created / modified / cancelled)");
    println!("  ✓ Exact token-rate rendering     (alloy-primitives U256)");
    println!("  ✓ Per-period projections         (hour … year)");
    println!("  ✓ CSV export                     (csv)");
    println!("  ✓ Network registry               ({} chains, {} listed)", networks.iter().count(), networks.listed().len());
    println!();
    println!("History input:                     indexer `historicalEvents` response,");
    println!("                                   `history` object, or bare event array");
    Ok(())
}
