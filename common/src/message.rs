use serde::{Deserialize, Serialize};

/// A single feed entry, as stored by the message board contract and served
/// by the REST mirror.
///
/// Entries are immutable once confirmed on-chain; only the simulated feed
/// mutates a like count in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Wallet address of the author.
    pub sender: String,
    pub content: String,
    /// Unix seconds.
    pub timestamp: i64,
    pub likes: u64,
}

/// A feed entry as returned by a contract read.
///
/// The contract speaks in full-width words, so the numeric fields arrive
/// wider than anything the feed needs and must be coerced before display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub sender: String,
    pub content: String,
    pub timestamp: u128,
    pub likes: u128,
}

impl From<RawMessage> for Message {
    /// Narrow the wide numeric fields, clamping values that cannot fit.
    fn from(raw: RawMessage) -> Self {
        Message {
            sender: raw.sender,
            content: raw.content,
            timestamp: i64::try_from(raw.timestamp).unwrap_or(i64::MAX),
            likes: u64::try_from(raw.likes).unwrap_or(u64::MAX),
        }
    }
}
