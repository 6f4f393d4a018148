//! Client-side synchronization core for the corkboard message feed.
//!
//! The feed lives canonically on a blockchain contract, with a REST mirror
//! and canned offline data as read fallbacks. This crate mediates between
//! the three sources behind one state surface: a connection-mode machine
//! (disconnected / simulated / live) gates which backend every operation
//! targets, a single-flight guard keeps refreshes from stampeding, and the
//! mutation pipeline validates the active chain before anything reaches the
//! wallet.

pub mod backend;
pub mod client;
pub mod error;
pub mod mirror;
pub mod mock;
pub mod profile;
pub mod session;
pub mod sync;
