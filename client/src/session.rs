//! Connection-mode state.
//!
//! A session tracks which backend family operations target and who the
//! active signer is. There is exactly one per client value; observers read
//! cloneable snapshots, never the session itself (the contract handle stays
//! private to the core).

use corkboard_common::network::ChainId;

/// Operating mode of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionMode {
    /// No session. Reads fall back to the mirror, writes are refused.
    #[default]
    Disconnected,
    /// Offline session with a synthetic identity; the local feed is
    /// canonical and nothing touches the network.
    Simulated,
    /// Wallet-backed session with a signer-bound contract handle.
    Live,
}

/// Wallet session state. `contract` is the signer-bound handle; present
/// exactly when the mode is [`ConnectionMode::Live`].
#[derive(Debug)]
pub(crate) struct Session<C> {
    pub mode: ConnectionMode,
    pub address: Option<String>,
    pub chain_id: Option<ChainId>,
    pub contract: Option<C>,
}

impl<C> Default for Session<C> {
    fn default() -> Self {
        Self {
            mode: ConnectionMode::Disconnected,
            address: None,
            chain_id: None,
            contract: None,
        }
    }
}

impl<C> Session<C> {
    /// Successful wallet handshake.
    pub fn go_live(&mut self, address: String, chain_id: ChainId, contract: C) {
        self.mode = ConnectionMode::Live;
        self.address = Some(address);
        self.chain_id = Some(chain_id);
        self.contract = Some(contract);
    }

    /// Simulated connect: synthetic identity, no chain, no handle.
    pub fn go_simulated(&mut self, address: String) {
        self.mode = ConnectionMode::Simulated;
        self.address = Some(address);
        self.chain_id = None;
        self.contract = None;
    }

    /// Explicit disconnect. Drops the contract handle with the rest.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            address: self.address.clone(),
            chain_id: self.chain_id,
        }
    }
}

/// Cloneable view of the session, safe to hand to observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub mode: ConnectionMode,
    pub address: Option<String>,
    pub chain_id: Option<ChainId>,
}

impl SessionSnapshot {
    pub fn is_connected(&self) -> bool {
        self.mode != ConnectionMode::Disconnected
    }
}
