//! Timestamped Message Action - Type Definitions
//!
//! Shared types for the action descriptor, the execution response,
//! and the service configuration.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

// ─── Action Descriptor ───────────────────────────────────────────

/// Machine-readable description of the service and its invokable actions.
///
/// This is the document a wallet client fetches to render the action UI.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Absolute URL of the action endpoint.
    pub url: String,
    /// Icon shown next to the action in the client UI.
    pub icon: String,
    pub title: String,
    /// Absolute base URL of the serving host.
    pub base_url: String,
    pub description: String,
    /// Ordered, non-empty list of invokable actions.
    pub actions: Vec<ActionSpec>,
}

/// One invokable action within the descriptor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSpec {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: String,
    pub description: String,
    pub chains: ChainRef,
    /// Relative path of the route that executes this action.
    pub path: String,
    pub params: Vec<ParamSpec>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Dynamic,
}

/// Source chain reference for an action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainRef {
    pub source: String,
}

/// One user-supplied input parameter of an action.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub value_type: ParamType,
    pub required: bool,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Text,
    Number,
    Bool,
}

// ─── Execution Response ──────────────────────────────────────────

/// Result of invoking an action: the unsigned transaction for the client
/// to sign and broadcast, plus the chain it targets.
///
/// Lives for a single HTTP response; nothing persists between requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    /// JSON encoding of the unsigned `TransactionRequest`.
    pub serialized_transaction: String,
    pub chain_id: String,
}

// ─── Configuration ───────────────────────────────────────────────

/// Process-wide service configuration, loaded once at startup and
/// injected into the router state.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Public base URL advertised in the descriptor. When unset, the base
    /// URL is derived from request headers.
    pub base_url: Option<String>,
    pub builder: BuilderConfig,
}

/// Settings for the transaction request builder.
#[derive(Clone, Copy, Debug)]
pub struct BuilderConfig {
    /// Address of the deployed message-store contract.
    pub contract_address: Address,
    /// Apply the message-derived timestamp offset instead of raw time.
    pub use_optimized_timestamp: bool,
    pub chain_id_format: ChainIdFormat,
}

/// Which representation of the target chain goes into
/// `ExecutionResponse.chainId`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChainIdFormat {
    /// Numeric chain id, e.g. "43113".
    Numeric,
    /// Human-readable chain name, e.g. "Avalanche Fuji".
    Name,
}
