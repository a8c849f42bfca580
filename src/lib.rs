//! Timestamped Message Action Service
//!
//! A minimal HTTP endpoint that advertises a blockchain action for storing
//! a message on-chain and, on invocation, builds the unsigned `storeMessage`
//! transaction for the client to sign and broadcast.

pub mod api;
pub mod chain;
pub mod config;
pub mod metadata;
pub mod transaction;
pub mod types;
