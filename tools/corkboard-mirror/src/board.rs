//! In-process stand-in for the on-chain message board.

use std::collections::HashSet;
use std::fmt;

use chrono::Utc;
use tokio::sync::RwLock;

use corkboard_common::message::Message;

/// Rejections the board reports back to handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRejection {
    MessageNotFound,
    AlreadyLiked,
}

impl fmt::Display for BoardRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MessageNotFound => "message does not exist",
            Self::AlreadyLiked => "you already liked this message",
        })
    }
}

/// Append-only feed plus a per-sender like registry, mirroring the
/// contract's own bookkeeping.
#[derive(Default)]
pub struct SimulatedBoard {
    inner: RwLock<BoardState>,
}

#[derive(Default)]
struct BoardState {
    messages: Vec<Message>,
    /// Index-aligned with `messages`: who already liked each entry.
    liked_by: Vec<HashSet<String>>,
}

impl SimulatedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consistent copy of the feed, oldest first.
    pub async fn messages(&self) -> Vec<Message> {
        self.inner.read().await.messages.clone()
    }

    /// Append a message; returns the synthetic transaction hash.
    pub async fn post(&self, sender: &str, content: &str) -> String {
        let mut state = self.inner.write().await;
        state.messages.push(Message {
            sender: sender.to_string(),
            content: content.to_string(),
            timestamp: Utc::now().timestamp(),
            likes: 0,
        });
        state.liked_by.push(HashSet::new());
        fake_tx_hash()
    }

    /// Register a like. Each sender may like a given message once.
    pub async fn like(&self, sender: &str, id: u64) -> Result<String, BoardRejection> {
        let mut state = self.inner.write().await;
        let idx = usize::try_from(id)
            .ok()
            .filter(|idx| *idx < state.messages.len())
            .ok_or(BoardRejection::MessageNotFound)?;
        if !state.liked_by[idx].insert(sender.to_string()) {
            return Err(BoardRejection::AlreadyLiked);
        }
        state.messages[idx].likes += 1;
        Ok(fake_tx_hash())
    }
}

/// 32 random bytes, hex, shaped like a real transaction hash.
fn fake_tx_hash() -> String {
    let bytes: [u8; 32] = rand::random();
    format!("0x{}", hex::encode(bytes))
}
