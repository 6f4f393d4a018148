//! REST mirror for the corkboard feed.
//!
//! Serves the message feed from an in-process simulated board plus profile
//! CRUD, for clients that cannot reach the chain. The feed here is a
//! stand-in, not a replica: it exists so the read-fallback path always has
//! something to answer with.

pub mod board;
pub mod http;
pub mod profiles;
