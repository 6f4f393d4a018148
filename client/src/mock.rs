//! Canned feed contents for offline operation, newest first.

use chrono::Utc;

use corkboard_common::message::Message;

const WELCOME_SENDER: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
const ANNOUNCE_SENDER: &str = "0x90F79bf6EB2c4f870365E785982E1f101E93b906";
const FALLBACK_SENDER: &str = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";

/// Seed feed installed by a simulated connect. The newest entry is authored
/// by the session's own synthetic address.
pub fn seed_feed(address: &str) -> Vec<Message> {
    let now = Utc::now().timestamp();
    vec![
        Message {
            sender: address.to_string(),
            content: "You are using a simulated wallet. Messages you post here stay local and \
                      are not saved anywhere."
                .to_string(),
            timestamp: now - 300,
            likes: 1,
        },
        Message {
            sender: ANNOUNCE_SENDER.to_string(),
            content: "This is a simulated message. In production, entries live on the Monad \
                      blockchain."
                .to_string(),
            timestamp: now - 1800,
            likes: 3,
        },
        Message {
            sender: WELCOME_SENDER.to_string(),
            content: "Welcome to the corkboard! This is a simulated message.".to_string(),
            timestamp: now - 3600,
            likes: 5,
        },
    ]
}

/// Shown when both the contract and the mirror are unreachable, so the feed
/// is never left empty or broken.
pub fn fallback_feed() -> Vec<Message> {
    let now = Utc::now().timestamp();
    vec![
        Message {
            sender: FALLBACK_SENDER.to_string(),
            content: "Once a backend is reachable again you will see real messages from the \
                      blockchain or the mirror here."
                .to_string(),
            timestamp: now - 600,
            likes: 1,
        },
        Message {
            sender: ANNOUNCE_SENDER.to_string(),
            content: "This is a simulated message. In production, entries live on the Monad \
                      blockchain."
                .to_string(),
            timestamp: now - 1800,
            likes: 3,
        },
        Message {
            sender: WELCOME_SENDER.to_string(),
            content: "Welcome to the corkboard! This is canned data shown because no backend \
                      is accessible."
                .to_string(),
            timestamp: now - 3600,
            likes: 5,
        },
    ]
}
