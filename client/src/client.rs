//! The client core: one state surface over contract, mirror, and canned
//! data.
//!
//! All state lives behind this value (session, feed, fetch guard), so
//! independent clients never share anything. Observers read snapshots; only
//! the synchronizer and the mutation pipeline write.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, watch, RwLock};

use corkboard_common::message::Message;
use corkboard_common::network::{ChainId, REQUIRED_NETWORK};

use crate::backend::{
    read_plan, write_backend, MessageContract, PendingTx, ProviderEvent, ReadBackend,
    WalletProvider, WriteBackend,
};
use crate::error::{error_chain, ClientError};
use crate::mirror::MirrorApi;
use crate::mock;
use crate::session::{ConnectionMode, Session, SessionSnapshot};
use crate::sync::{FetchGuard, FETCH_COOLDOWN};

/// Successful mutation outcome. `tx_hash` is absent for local (simulated)
/// writes, which never reach a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReceipt {
    pub tx_hash: Option<String>,
}

enum Mutation<'a> {
    Post(&'a str),
    Like(u64),
}

/// Client for the corkboard feed, generic over the wallet boundary and the
/// mirror so both can be stubbed out.
pub struct BoardClient<P: WalletProvider, M: MirrorApi> {
    provider: P,
    mirror: M,
    required_chain: ChainId,
    session: RwLock<Session<P::Contract>>,
    session_tx: watch::Sender<SessionSnapshot>,
    feed: RwLock<Vec<Message>>,
    guard: FetchGuard,
}

impl<P: WalletProvider, M: MirrorApi> BoardClient<P, M> {
    pub fn new(provider: P, mirror: M) -> Self {
        Self::with_config(provider, mirror, REQUIRED_NETWORK.chain_id, FETCH_COOLDOWN)
    }

    /// Full-control constructor; `new` picks the deployed network and the
    /// standard refresh cooldown.
    pub fn with_config(
        provider: P,
        mirror: M,
        required_chain: ChainId,
        cooldown: Duration,
    ) -> Self {
        let (session_tx, _) = watch::channel(SessionSnapshot::default());
        Self {
            provider,
            mirror,
            required_chain,
            session: RwLock::new(Session::default()),
            session_tx,
            feed: RwLock::new(Vec::new()),
            guard: FetchGuard::new(cooldown),
        }
    }

    // ─── observers ───────────────────────────────────────────────────────

    /// Current session state.
    pub async fn session(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    /// Watch session transitions. Every transition is published before the
    /// call that caused it returns.
    pub fn watch_session(&self) -> watch::Receiver<SessionSnapshot> {
        self.session_tx.subscribe()
    }

    /// Consistent copy of the feed.
    pub async fn feed(&self) -> Vec<Message> {
        self.feed.read().await.clone()
    }

    // ─── wallet session manager ──────────────────────────────────────────

    /// Run the wallet-selection flow and go live, then pull the feed.
    /// Returns the provider's notification stream; feed it to
    /// [`BoardClient::drive_provider_events`] or handle events directly.
    pub async fn connect(&self) -> Result<mpsc::Receiver<ProviderEvent>, ClientError> {
        let handshake = match self.provider.connect().await {
            Ok(handshake) => handshake,
            Err(err) => {
                tracing::error!(error = %error_chain(&err), "wallet connect failed");
                return Err(err);
            }
        };
        tracing::info!(
            address = %handshake.address,
            chain_id = handshake.chain_id,
            "wallet connected"
        );
        {
            let mut session = self.session.write().await;
            session.go_live(handshake.address, handshake.chain_id, handshake.contract);
            self.session_tx.send_replace(session.snapshot());
        }
        self.refresh_feed().await;
        Ok(handshake.events)
    }

    /// Offline session: synthetic identity and a canned feed, no network
    /// interaction at all.
    pub async fn connect_simulated(&self) -> SessionSnapshot {
        let address = random_address();
        tracing::info!(address = %address, "simulated wallet connected");
        let seed = mock::seed_feed(&address);
        let mut session = self.session.write().await;
        session.go_simulated(address);
        let snapshot = session.snapshot();
        *self.feed.write().await = seed;
        self.session_tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Tear the session down. Clears cached wallet authorization so the
    /// next connect starts a fresh selection flow.
    pub async fn disconnect(&self) {
        {
            let mut session = self.session.write().await;
            session.clear();
            self.session_tx.send_replace(session.snapshot());
        }
        self.guard.reset_in_progress();
        self.provider.clear_cached_session();
        tracing::info!("wallet disconnected");
    }

    /// Apply an account or chain notification from the wallet provider.
    /// Ignored unless the session is live.
    pub async fn handle_provider_event(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => match accounts.into_iter().next() {
                None => {
                    let mode = self.session.read().await.mode;
                    if mode != ConnectionMode::Live {
                        return;
                    }
                    tracing::info!("wallet revoked all accounts, disconnecting");
                    self.disconnect().await;
                }
                Some(address) => {
                    let mut session = self.session.write().await;
                    if session.mode != ConnectionMode::Live {
                        return;
                    }
                    tracing::info!(address = %address, "active account changed");
                    session.address = Some(address);
                    self.session_tx.send_replace(session.snapshot());
                }
            },
            ProviderEvent::ChainChanged(chain_id) => {
                {
                    let mut session = self.session.write().await;
                    if session.mode != ConnectionMode::Live {
                        return;
                    }
                    tracing::info!(chain_id, "active chain changed");
                    session.chain_id = Some(chain_id);
                    self.session_tx.send_replace(session.snapshot());
                }
                // In-flight mutations are left to finish; this refresh
                // reconciles the feed against the now-active chain.
                self.refresh_feed().await;
            }
        }
    }

    /// Drain provider notifications until the channel closes.
    pub async fn drive_provider_events(&self, mut events: mpsc::Receiver<ProviderEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_provider_event(event).await;
        }
    }

    // ─── feed synchronizer ───────────────────────────────────────────────

    /// Bring the feed up to date. Never fails: backend errors degrade
    /// through the mirror and finally canned data. A call made while a
    /// refresh is running, or inside the cooldown window, is dropped.
    pub async fn refresh_feed(&self) {
        let (mode, plan) = {
            let session = self.session.read().await;
            (session.mode, read_plan(session.mode, session.contract.is_some()))
        };
        if mode == ConnectionMode::Simulated {
            tracing::debug!("simulated session, local feed is canonical");
            return;
        }
        if !self.guard.try_begin() {
            tracing::debug!("refresh already running or inside cooldown, dropped");
            return;
        }
        self.run_refresh(&plan).await;
        self.guard.end();
    }

    async fn run_refresh(&self, plan: &[ReadBackend]) {
        for backend in plan {
            match backend {
                ReadBackend::LocalFeed => return,
                ReadBackend::Contract => match self.read_contract().await {
                    Ok(messages) => {
                        tracing::debug!(count = messages.len(), "feed refreshed from contract");
                        *self.feed.write().await = messages;
                        return;
                    }
                    Err(err) => {
                        tracing::warn!(error = %error_chain(&err), "contract read failed, falling back");
                    }
                },
                ReadBackend::Mirror => match self.mirror.messages().await {
                    Ok(messages) => {
                        tracing::debug!(count = messages.len(), "feed refreshed from mirror");
                        *self.feed.write().await = messages;
                        return;
                    }
                    Err(err) => {
                        tracing::warn!(error = %error_chain(&err), "mirror read failed, falling back");
                    }
                },
                ReadBackend::MockData => {
                    tracing::warn!("all backends failed, installing canned feed");
                    *self.feed.write().await = mock::fallback_feed();
                    return;
                }
            }
        }
    }

    async fn read_contract(&self) -> Result<Vec<Message>, ClientError> {
        let session = self.session.read().await;
        let contract = session
            .contract
            .as_ref()
            .ok_or_else(|| ClientError::no_backend("no contract handle bound"))?;
        let raw = contract.get_messages().await?;
        Ok(raw.into_iter().map(Message::from).collect())
    }

    // ─── mutation pipeline ───────────────────────────────────────────────

    /// Append a message to the board.
    pub async fn post_message(&self, content: &str) -> Result<MutationReceipt, ClientError> {
        match self.submit(Mutation::Post(content)).await {
            Ok(receipt) => {
                tracing::info!(
                    tx = receipt.tx_hash.as_deref().unwrap_or("local"),
                    "message posted"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(error = %error_chain(&err), "post failed");
                Err(err)
            }
        }
    }

    /// Register a like for the message at feed index `id`.
    pub async fn like_message(&self, id: u64) -> Result<MutationReceipt, ClientError> {
        match self.submit(Mutation::Like(id)).await {
            Ok(receipt) => {
                tracing::info!(
                    id,
                    tx = receipt.tx_hash.as_deref().unwrap_or("local"),
                    "message liked"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(id, error = %error_chain(&err), "like failed");
                Err(err)
            }
        }
    }

    async fn submit(&self, mutation: Mutation<'_>) -> Result<MutationReceipt, ClientError> {
        let session = self.session.read().await;
        match write_backend(session.mode) {
            None => Err(ClientError::no_backend("not connected")),
            Some(WriteBackend::LocalFeed) => {
                let address = session.address.clone().unwrap_or_default();
                drop(session);
                self.apply_local(mutation, address).await;
                Ok(MutationReceipt { tx_hash: None })
            }
            Some(WriteBackend::Contract) => {
                let contract = session.contract.as_ref().ok_or_else(|| {
                    ClientError::no_backend("live session without a contract handle")
                })?;
                if session.chain_id != Some(self.required_chain) {
                    let connected = session
                        .chain_id
                        .map_or_else(|| "unknown".to_string(), |id| id.to_string());
                    return Err(ClientError::chain_mismatch(format!(
                        "wallet is on chain {connected}, writes require chain {}",
                        self.required_chain
                    )));
                }
                let tx = match mutation {
                    Mutation::Post(content) => contract.post_message(content).await?,
                    Mutation::Like(id) => contract.like_message(id).await?,
                };
                let tx_hash = tx.hash();
                tracing::debug!(tx = %tx_hash, "transaction submitted, awaiting receipt");
                tx.wait().await?;
                drop(session);
                self.refresh_feed().await;
                Ok(MutationReceipt {
                    tx_hash: Some(tx_hash),
                })
            }
        }
    }

    /// Simulated write: mutate under the feed lock so readers only ever see
    /// the finished snapshot.
    async fn apply_local(&self, mutation: Mutation<'_>, address: String) {
        let mut feed = self.feed.write().await;
        match mutation {
            Mutation::Post(content) => {
                feed.insert(
                    0,
                    Message {
                        sender: address,
                        content: content.to_string(),
                        timestamp: Utc::now().timestamp(),
                        likes: 0,
                    },
                );
            }
            Mutation::Like(id) => {
                match usize::try_from(id).ok().and_then(|idx| feed.get_mut(idx)) {
                    Some(message) => message.likes += 1,
                    None => tracing::debug!(id, "like outside the feed, ignored"),
                }
            }
        }
    }
}

/// Synthetic wallet address: 20 random bytes, hex, 0x-prefixed.
fn random_address() -> String {
    let bytes: [u8; 20] = rand::random();
    format!("0x{}", hex::encode(bytes))
}
