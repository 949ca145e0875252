//! Bundled deployment table.

use crate::network::{NativeCurrency, NetworkDetails};
use crate::ZERO_ADDRESS;

// Stream factories
const FACTORY_RINKEBY: &str = "0xde1C04855c2828431ba637675B6929A684f84C7F";
const FACTORY_KOVAN: &str = "0xd43bb75cc924e8475dff2604b962f39089e4f842";
const FACTORY_FUJI: &str = "0xc4705f96030D347F421Fbe01d9A19F18B26a7d30";
const FACTORY_GOERLI: &str = "0xcCDd688d7eDcF89bFa217492E247d1395FcEC23D";
const FACTORY_AVALANCHE: &str = "0x7d507b4c2d7e54da5731f643506996da8525f4a3";
const FACTORY_DEFAULT: &str = "0xde1C04855c2828431ba637675B6929A684f84C7F";
const FACTORY_METER: &str = "0xc666badd040d5e471d2b77296fef46165ffe5132";
const FACTORY_METIS: &str = "0x43634d1C608f16Fb0f4926c12b54124C93030600";
const FACTORY_KAVA: &str = "0xCA052D073591C0C059675B6F7F95cE75a4Ab8fc8";

// Vesting factories
const VESTING_DEFAULT: &str = "0xB93427b83573C8F27a08A909045c3e809610411a";
const VESTING_GOERLI: &str = "0x985A0DD877aD2E445e6E7BB58d5600b3F04dDC31";
const VESTING_METER: &str = "0x6B24Fe659D1E91f8800E86600DE577A4cA8814a6";
const VESTING_REASON: &str = "0xA83965c2EBCD3d809f59030D2f7d3c6C646deD3D";

// Disperse
const DISPERSE_DEFAULT: &str = "0xD152f549545093347A162Dce210e7293f1452150";
const DISPERSE_V2: &str = "0x6F9fB43274e9011804Bf516e78CaF5e89856301A";
const DISPERSE_FUJI: &str = "0x267F83942214d11fDce5E8AA98351AFF6392946A";
const DISPERSE_METER: &str = "0x8e5455983a70da3d1e66719636e907d63eca40b7";

// Payment bots
const BOT_DEFAULT: &str = "0xc5A4fec44fbDE08A7c9dE6e07b60De60aC074Ab9";
const BOT_AVALANCHE: &str = "0x57547F79d8344ACCAb21DC0a9c9d186e240353d7";
const BOT_ARBITRUM: &str = "0xB1870E647c4F7eE5DccFB3e4A98be9F888b184e0";

const GRAPH: &str = "https://api.thegraph.com/subgraphs/name/nemusonaneko";
const LOGOS: &str = "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains";

fn graph(name: &str) -> String {
    format!("{GRAPH}/{name}")
}

fn logo(chain: &str) -> String {
    format!("{LOGOS}/{chain}/info/logo.png")
}

/// Fields shared by most deployments; each entry overrides the rest.
fn base(chain_id: u64, name: &str, currency: NativeCurrency) -> NetworkDetails {
    NetworkDetails {
        chain_id,
        name: name.into(),
        rpc_url: String::new(),
        subgraph_endpoint: String::new(),
        stream_factory: FACTORY_DEFAULT.into(),
        disperse: DISPERSE_DEFAULT.into(),
        bot: None,
        vesting_factory: VESTING_DEFAULT.into(),
        vesting_reason: ZERO_ADDRESS.into(),
        payments_contract: None,
        payments_graph_api: None,
        bot_subgraph: None,
        block_explorer_url: String::new(),
        block_explorer_name: String::new(),
        prefix: String::new(),
        logo_uri: String::new(),
        token_list_id: None,
        native_currency: currency,
        testnet: false,
        listed: true,
    }
}

pub(crate) fn entries() -> Vec<NetworkDetails> {
    let eth = || NativeCurrency::new("Ether", "ETH");
    let avax = || NativeCurrency::new("Avalanche", "AVAX");

    vec![
        NetworkDetails {
            rpc_url: "https://rpc.ankr.com/eth_rinkeby".into(),
            subgraph_endpoint: graph("llamapay-rinkeby"),
            stream_factory: FACTORY_RINKEBY.into(),
            block_explorer_url: "https://rinkeby.etherscan.io/".into(),
            block_explorer_name: "Etherscan".into(),
            prefix: "ethereum".into(),
            logo_uri: logo("ethereum"),
            testnet: true,
            listed: false,
            ..base(4, "Rinkeby", eth())
        },
        NetworkDetails {
            rpc_url: "https://kovan.poa.network".into(),
            subgraph_endpoint: graph("llamapay-kovan"),
            stream_factory: FACTORY_KOVAN.into(),
            block_explorer_url: "https://kovan.etherscan.io/".into(),
            block_explorer_name: "Etherscan".into(),
            prefix: "ethereum".into(),
            logo_uri: logo("ethereum"),
            testnet: true,
            listed: false,
            ..base(42, "Kovan", eth())
        },
        NetworkDetails {
            rpc_url: "https://api.avax-test.network/ext/bc/C/rpc".into(),
            subgraph_endpoint: graph("llamapay-fuji"),
            stream_factory: FACTORY_FUJI.into(),
            disperse: DISPERSE_FUJI.into(),
            block_explorer_url: "https://testnet.snowtrace.io/".into(),
            block_explorer_name: "Snowtrace".into(),
            prefix: "avax".into(),
            logo_uri: logo("avalanchex"),
            testnet: true,
            ..base(43113, "Fuji", avax())
        },
        NetworkDetails {
            rpc_url: "https://rpc.ankr.com/avalanche".into(),
            subgraph_endpoint: graph("llamapay-avalanche-mainnet"),
            stream_factory: FACTORY_AVALANCHE.into(),
            disperse: DISPERSE_V2.into(),
            bot: Some(BOT_AVALANCHE.into()),
            payments_contract: Some("0x4c48F145e0c80d97bFbc983dd2CbEbEE5d84FA0c".into()),
            payments_graph_api: Some(graph("token-escrow-avalanche")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-avax")),
            block_explorer_url: "https://snowtrace.io/".into(),
            block_explorer_name: "Snowtrace".into(),
            prefix: "avax".into(),
            logo_uri: logo("avalanchex"),
            token_list_id: Some("avalanche".into()),
            ..base(43114, "Avalanche", avax())
        },
        NetworkDetails {
            rpc_url: "https://polygon-rpc.com/".into(),
            subgraph_endpoint: graph("llamapay-polygon"),
            bot: Some(BOT_DEFAULT.into()),
            payments_contract: Some("0x02266E3b5cE26d62Ea73Ea7f2C542EBc24121c01".into()),
            payments_graph_api: Some(graph("token-escrow-polygon")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-polygon")),
            block_explorer_url: "https://polygonscan.com/".into(),
            block_explorer_name: "Polygonscan".into(),
            prefix: "polygon".into(),
            logo_uri: logo("polygon"),
            token_list_id: Some("polygon-pos".into()),
            ..base(137, "Polygon", NativeCurrency::new("Matic", "MATIC"))
        },
        NetworkDetails {
            rpc_url: "https://rpc.ftm.tools/".into(),
            subgraph_endpoint: graph("llamapay-fantom"),
            bot: Some(BOT_DEFAULT.into()),
            payments_contract: Some("0xDa33d4B2753B3C2439cA52678E1A506e4C5294d1".into()),
            payments_graph_api: Some(graph("token-escrow-fantom")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-fantom")),
            block_explorer_url: "https://ftmscan.com/".into(),
            block_explorer_name: "FTMScan".into(),
            prefix: "fantom".into(),
            logo_uri: logo("fantom"),
            token_list_id: Some("fantom".into()),
            ..base(250, "Fantom", NativeCurrency::new("Fantom", "FTM"))
        },
        NetworkDetails {
            rpc_url: "https://rpc.ankr.com/eth".into(),
            subgraph_endpoint: graph("llamapay-mainnet"),
            bot: Some(BOT_DEFAULT.into()),
            vesting_reason: VESTING_REASON.into(),
            payments_contract: Some("0x056e39bDD2D35F4EB27478369BdAde51e0532b72".into()),
            payments_graph_api: Some(graph("token-escrow-mainnet")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-mainnet")),
            block_explorer_url: "https://etherscan.io/".into(),
            block_explorer_name: "Etherscan".into(),
            prefix: "ethereum".into(),
            logo_uri: logo("ethereum"),
            token_list_id: Some("ethereum".into()),
            ..base(1, "Ethereum", eth())
        },
        NetworkDetails {
            rpc_url: "https://mainnet.optimism.io".into(),
            subgraph_endpoint: graph("llamapay-optimism"),
            bot: Some(BOT_DEFAULT.into()),
            payments_contract: Some("0xb4E9D1F7b32937f04B856ec1Ca39AC83E9404779".into()),
            payments_graph_api: Some(graph("token-escrow-optimism")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-optimism")),
            block_explorer_url: "https://optimistic.etherscan.io/".into(),
            block_explorer_name: "Etherscan".into(),
            prefix: "optimism".into(),
            logo_uri: logo("optimism"),
            token_list_id: Some("optimistic-ethereum".into()),
            ..base(10, "Optimism", eth())
        },
        NetworkDetails {
            rpc_url: "https://arb1.arbitrum.io/rpc".into(),
            subgraph_endpoint: graph("llamapay-arbitrum"),
            disperse: DISPERSE_V2.into(),
            bot: Some(BOT_ARBITRUM.into()),
            payments_contract: Some("0x1564d7bFa4bc921A748Aedb3b71E578672528734".into()),
            payments_graph_api: Some(graph("token-escrow-arbitrum")),
            block_explorer_url: "https://arbiscan.io/".into(),
            block_explorer_name: "Arbiscan".into(),
            prefix: "arbitrum".into(),
            logo_uri: logo("arbitrum"),
            token_list_id: Some("arbitrum-one".into()),
            ..base(42161, "Arbitrum One", eth())
        },
        NetworkDetails {
            rpc_url: "https://rpc.ankr.com/bsc".into(),
            subgraph_endpoint: "https://api.polarsync.app/bsc/defillama/llamapay".into(),
            bot: Some(BOT_DEFAULT.into()),
            payments_contract: Some("0x02266E3b5cE26d62Ea73Ea7f2C542EBc24121c01".into()),
            payments_graph_api: Some(graph("token-escrow-bsc")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-bsc")),
            block_explorer_url: "https://www.bscscan.com/".into(),
            block_explorer_name: "BscScan".into(),
            prefix: "bsc".into(),
            logo_uri: logo("binance"),
            token_list_id: Some("binance-smart-chain".into()),
            ..base(56, "BSC", NativeCurrency::new("BNB", "BNB"))
        },
        NetworkDetails {
            rpc_url: "https://xdai-rpc.gateway.pokt.network".into(),
            subgraph_endpoint: graph("llamapay-xdai"),
            block_explorer_url: "https://blockscout.com/xdai/mainnet/".into(),
            block_explorer_name: "Blockscout".into(),
            prefix: "xdai".into(),
            logo_uri: logo("xdai"),
            token_list_id: Some("xdai".into()),
            ..base(100, "Gnosis", NativeCurrency::new("xDAI", "xDAI"))
        },
        NetworkDetails {
            rpc_url: "https://rpc.meter.io".into(),
            subgraph_endpoint:
                "https://graph-meter.voltswap.finance/subgraphs/name/nemusonaneko/llamapay-subgraph".into(),
            stream_factory: FACTORY_METER.into(),
            disperse: DISPERSE_METER.into(),
            vesting_factory: VESTING_METER.into(),
            block_explorer_url: "https://scan.meter.io/".into(),
            block_explorer_name: "Meter Blockchain Explorer".into(),
            prefix: "meter".into(),
            logo_uri: "https://assets.coingecko.com/coins/images/11848/large/mtrg-logo.png?1595062273".into(),
            token_list_id: Some("meter".into()),
            ..base(82, "Meter", NativeCurrency::new("Meter", "MTR"))
        },
        NetworkDetails {
            rpc_url: "https://rpc.ankr.com/eth_goerli".into(),
            subgraph_endpoint: graph("llamapay-goerli"),
            stream_factory: FACTORY_GOERLI.into(),
            disperse: DISPERSE_V2.into(),
            bot: Some(BOT_DEFAULT.into()),
            vesting_factory: VESTING_GOERLI.into(),
            vesting_reason: VESTING_REASON.into(),
            payments_contract: Some("0x02266E3b5cE26d62Ea73Ea7f2C542EBc24121c01".into()),
            payments_graph_api: Some(graph("token-escrow-goerli")),
            bot_subgraph: Some(graph("llamapay-bot-subgraph-goerli")),
            block_explorer_url: "https://goerli.etherscan.io/".into(),
            block_explorer_name: "Etherscan".into(),
            prefix: "ethereum".into(),
            logo_uri: logo("ethereum"),
            testnet: true,
            ..base(5, "Goerli", eth())
        },
        NetworkDetails {
            rpc_url: "https://andromeda.metis.io/?owner=1088".into(),
            subgraph_endpoint: "https://andromeda-graph.metis.io/subgraphs/name/maia-dao/llama-pay".into(),
            stream_factory: FACTORY_METIS.into(),
            disperse: DISPERSE_V2.into(),
            block_explorer_url: "https://andromeda-explorer.metis.io/".into(),
            block_explorer_name: "Andromeda Metis Explorer".into(),
            prefix: "metis".into(),
            logo_uri: logo("metis"),
            token_list_id: Some("metis-andromeda".into()),
            listed: false,
            ..base(1088, "Metis", NativeCurrency::new("Metis", "METIS"))
        },
        NetworkDetails {
            rpc_url: "https://evm.kava.io".into(),
            subgraph_endpoint: "https://the-graph.kava.io/subgraphs/name/nemusonaneko/llamapay-subgraph/".into(),
            stream_factory: FACTORY_KAVA.into(),
            disperse: DISPERSE_V2.into(),
            block_explorer_url: "https://explorer.kava.io/".into(),
            block_explorer_name: "Kava Explorer".into(),
            prefix: "kava".into(),
            logo_uri: logo("kava"),
            token_list_id: Some("kava-evm".into()),
            ..base(2222, "Kava", NativeCurrency::new("Kava", "KAVA"))
        },
    ]
}
