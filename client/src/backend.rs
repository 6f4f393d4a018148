//! Seams to the three data sources and the wallet.
//!
//! The contract and wallet boundaries are traits so the core never depends
//! on a particular signer or transport; the selection logic below decides
//! which source an operation targets for a given connection mode.

use serde_json::{json, Value};
use thiserror::Error;
use tokio::sync::mpsc;

use corkboard_common::message::RawMessage;
use corkboard_common::network::{ChainId, NetworkConfig};

use crate::error::ClientError;
use crate::session::ConnectionMode;

/// A submitted on-chain transaction: a hash now, a confirmation later.
#[allow(async_fn_in_trait)]
pub trait PendingTx {
    fn hash(&self) -> String;

    /// Suspend until the transaction is mined.
    async fn wait(self) -> Result<(), ClientError>;
}

/// Signer-bound binding of the message board contract.
#[allow(async_fn_in_trait)]
pub trait MessageContract {
    type Tx: PendingTx;

    async fn get_messages(&self) -> Result<Vec<RawMessage>, ClientError>;
    async fn post_message(&self, content: &str) -> Result<Self::Tx, ClientError>;
    async fn like_message(&self, id: u64) -> Result<Self::Tx, ClientError>;
}

/// Notification pushed by the wallet provider after a handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The wallet's account set changed; empty means access was revoked.
    AccountsChanged(Vec<String>),
    ChainChanged(ChainId),
}

/// Everything a successful wallet handshake yields.
pub struct Handshake<C> {
    pub address: String,
    pub chain_id: ChainId,
    pub contract: C,
    /// Account and chain notifications for the life of the session.
    pub events: mpsc::Receiver<ProviderEvent>,
}

/// Wire-level RPC failure, with the provider's numeric code preserved so
/// callers can branch on well-known values.
#[derive(Debug, Error)]
#[error("provider rpc error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Black-box wallet boundary: runs the selection flow, yields a
/// signer-bound contract handle, and accepts raw RPC requests.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    type Contract: MessageContract;

    /// Open the wallet-selection flow and hand back a live session.
    async fn connect(&self) -> Result<Handshake<Self::Contract>, ClientError>;

    /// Raw provider request (`wallet_switchEthereumChain` and friends).
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError>;

    /// Forget any cached authorization so the next connect starts a fresh
    /// selection flow.
    fn clear_cached_session(&self);
}

/// Provider code for a chain the wallet does not know yet.
const UNRECOGNIZED_CHAIN: i64 = 4902;

/// Ask the wallet to switch networks, registering the chain first when the
/// wallet reports it as unrecognized.
pub async fn switch_chain<P: WalletProvider>(
    provider: &P,
    network: &NetworkConfig,
) -> Result<(), ClientError> {
    let chain_hex = network.chain_id_hex();
    let switch_params = json!([{ "chainId": chain_hex }]);
    match provider
        .request("wallet_switchEthereumChain", switch_params)
        .await
    {
        Ok(_) => Ok(()),
        Err(err) if err.code == UNRECOGNIZED_CHAIN => {
            let add_params = json!([{
                "chainId": chain_hex,
                "chainName": network.name,
                "rpcUrls": [network.rpc_url],
                "nativeCurrency": {
                    "name": network.currency_name,
                    "symbol": network.currency_symbol,
                    "decimals": 18,
                },
            }]);
            provider
                .request("wallet_addEthereumChain", add_params)
                .await
                .map(|_| ())
                .map_err(|err| {
                    ClientError::backend_unreachable(format!(
                        "wallet refused to add chain {}",
                        network.name
                    ))
                    .with_source(err)
                })
        }
        Err(err) => Err(ClientError::backend_unreachable(format!(
            "wallet refused to switch to chain {}",
            network.name
        ))
        .with_source(err)),
    }
}

/// Read sources in the order the synchronizer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadBackend {
    /// The in-memory feed itself; terminal, nothing to pull.
    LocalFeed,
    Contract,
    Mirror,
    /// Canned data; always succeeds.
    MockData,
}

/// Write target for the mutation pipeline. There is no mirror variant: a
/// write must never be redirected to a replica that cannot execute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBackend {
    LocalFeed,
    Contract,
}

/// Ordered read plan for the current mode. A simulated session never leaves
/// the local feed; everything else degrades contract → mirror → canned data.
pub fn read_plan(mode: ConnectionMode, has_contract: bool) -> Vec<ReadBackend> {
    match mode {
        ConnectionMode::Simulated => vec![ReadBackend::LocalFeed],
        _ if has_contract => vec![
            ReadBackend::Contract,
            ReadBackend::Mirror,
            ReadBackend::MockData,
        ],
        _ => vec![ReadBackend::Mirror, ReadBackend::MockData],
    }
}

/// Write target for the current mode; `None` means the operation is refused.
pub fn write_backend(mode: ConnectionMode) -> Option<WriteBackend> {
    match mode {
        ConnectionMode::Disconnected => None,
        ConnectionMode::Simulated => Some(WriteBackend::LocalFeed),
        ConnectionMode::Live => Some(WriteBackend::Contract),
    }
}
