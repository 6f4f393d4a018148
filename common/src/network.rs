//! Networks the board is deployed to.

/// EVM chain id.
pub type ChainId = u64;

/// Static definition of a network the wallet can be pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: &'static str,
    pub chain_id: ChainId,
    pub rpc_url: &'static str,
    /// Native currency metadata, needed when registering the chain with a
    /// wallet that has never seen it.
    pub currency_name: &'static str,
    pub currency_symbol: &'static str,
    pub testnet: bool,
}

impl NetworkConfig {
    /// Chain id in the 0x-prefixed hex form wallet RPC methods expect.
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }
}

pub const MONAD: NetworkConfig = NetworkConfig {
    name: "Monad",
    chain_id: 10143,
    rpc_url: "https://testnet-rpc.monad.xyz",
    currency_name: "Nomad",
    currency_symbol: "NMD",
    testnet: true,
};

pub const LOCALHOST: NetworkConfig = NetworkConfig {
    name: "Localhost",
    chain_id: 1337,
    rpc_url: "http://localhost:8545",
    currency_name: "Nomad",
    currency_symbol: "NMD",
    testnet: true,
};

/// All known networks.
pub const NETWORKS: &[NetworkConfig] = &[MONAD, LOCALHOST];

/// The network writes must target. Reads degrade gracefully; writes on any
/// other chain are refused before reaching the wallet.
pub const REQUIRED_NETWORK: &NetworkConfig = &MONAD;

/// Look a network up by chain id.
pub fn by_chain_id(chain_id: ChainId) -> Option<&'static NetworkConfig> {
    NETWORKS.iter().find(|n| n.chain_id == chain_id)
}
