//! Service Configuration
//!
//! Loads the service configuration from environment variables, merging
//! missing values with defaults. Loaded once at startup; the builders
//! receive it by injection and never read the environment themselves.

use std::env;

use tracing::warn;

use crate::chain::fuji;
use crate::types::{BuilderConfig, ChainIdFormat, ServiceConfig};

/// Port the listener binds when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Returns the default `ServiceConfig`: localhost-derived base URL, the
/// default deployed contract, optimized timestamps, and the chain name
/// as the response chain identifier.
pub fn default_config() -> ServiceConfig {
    ServiceConfig {
        port: DEFAULT_PORT,
        base_url: None,
        builder: BuilderConfig {
            contract_address: fuji::MESSAGE_STORE,
            use_optimized_timestamp: true,
            chain_id_format: ChainIdFormat::Name,
        },
    }
}

/// Load the service config from the environment.
///
/// Recognized variables: `PORT`, `BASE_URL`, `CONTRACT_ADDRESS`,
/// `OPTIMIZED_TIMESTAMP` (`0`/`false` to disable), and `CHAIN_ID_FORMAT`
/// (`numeric` or `name`). Unset or unparsable values fall back to the
/// defaults with a warning.
pub fn load_config() -> ServiceConfig {
    let mut config = default_config();

    if let Ok(port) = env::var("PORT") {
        match port.parse() {
            Ok(port) => config.port = port,
            Err(_) => warn!("Ignoring unparsable PORT value: {port:?}"),
        }
    }

    if let Ok(base_url) = env::var("BASE_URL") {
        if !base_url.is_empty() {
            config.base_url = Some(base_url);
        }
    }

    if let Ok(address) = env::var("CONTRACT_ADDRESS") {
        match address.parse() {
            Ok(address) => config.builder.contract_address = address,
            Err(_) => warn!("Ignoring unparsable CONTRACT_ADDRESS value: {address:?}"),
        }
    }

    if let Ok(value) = env::var("OPTIMIZED_TIMESTAMP") {
        config.builder.use_optimized_timestamp =
            !(value == "0" || value.eq_ignore_ascii_case("false"));
    }

    if let Ok(format) = env::var("CHAIN_ID_FORMAT") {
        match format.to_ascii_lowercase().as_str() {
            "numeric" => config.builder.chain_id_format = ChainIdFormat::Numeric,
            "name" => config.builder.chain_id_format = ChainIdFormat::Name,
            _ => warn!("Ignoring unknown CHAIN_ID_FORMAT value: {format:?}"),
        }
    }

    config
}
