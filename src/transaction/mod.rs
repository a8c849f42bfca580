//! Transaction Building
//!
//! Builds the unsigned `storeMessage` transaction for a validated message
//! and serializes it into the transport encoding a signing client consumes.
//! No network calls, no chain reads, no signing key access.

use alloy::primitives::{Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use thiserror::Error;

use crate::chain::{self, fuji};
use crate::types::{BuilderConfig, ExecutionResponse};

pub mod timestamp;

sol! {
    #[allow(missing_docs)]
    interface IMessageStore {
        function storeMessage(string message, uint256 timestamp) external;
    }
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("failed to serialize transaction: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Build the unsigned call to `storeMessage(message, timestamp)` on the
/// configured contract.
///
/// The timestamp is either the raw current time or the optimized value
/// (current time plus the message-derived offset), per the builder config.
/// Deterministic for a fixed `(message, now_secs)` pair.
pub fn build_transaction(
    message: &str,
    now_secs: u64,
    config: &BuilderConfig,
) -> TransactionRequest {
    let stamp = if config.use_optimized_timestamp {
        timestamp::optimized(message, now_secs)
    } else {
        now_secs
    };

    let call = IMessageStore::storeMessageCall {
        message: message.to_string(),
        timestamp: U256::from(stamp),
    };

    let mut tx = TransactionRequest::default()
        .to(config.contract_address)
        .input(Bytes::from(call.abi_encode()).into());
    tx.chain_id = Some(fuji::CHAIN_ID);
    tx
}

/// Encode an unsigned transaction as JSON.
///
/// The encoding is lossless: deserializing reproduces the target address,
/// calldata (selector and arguments), and chain id exactly.
pub fn serialize_transaction(tx: &TransactionRequest) -> Result<String, TransactionError> {
    Ok(serde_json::to_string(tx)?)
}

/// Build the `storeMessage` transaction for `message` and wrap it in an
/// [`ExecutionResponse`] alongside the chain identifier.
///
/// The caller is responsible for rejecting missing or empty messages
/// before construction starts.
pub fn build_and_serialize(
    message: &str,
    now_secs: u64,
    config: &BuilderConfig,
) -> Result<ExecutionResponse, TransactionError> {
    let tx = build_transaction(message, now_secs, config);
    let serialized = serialize_transaction(&tx)?;

    Ok(ExecutionResponse {
        serialized_transaction: serialized,
        chain_id: chain::chain_id_string(config.chain_id_format),
    })
}
