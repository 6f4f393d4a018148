pub mod message;
pub mod network;
pub mod profile;
