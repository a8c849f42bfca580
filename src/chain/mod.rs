//! Chain Constants
//!
//! Fixed parameters for the target chain and the deployed message-store
//! contract. The service only ever builds transactions for one chain.

use crate::types::ChainIdFormat;

/// Chain parameters for the Avalanche Fuji testnet.
pub mod fuji {
    use alloy::primitives::Address;

    const fn hex_literal_20(s: &str) -> [u8; 20] {
        let bytes = s.as_bytes();
        let mut out = [0u8; 20];
        let mut i = 0;
        while i < 20 {
            let hi = hex_val(bytes[i * 2]);
            let lo = hex_val(bytes[i * 2 + 1]);
            out[i] = (hi << 4) | lo;
            i += 1;
        }
        out
    }

    const fn hex_val(c: u8) -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("invalid hex character"),
        }
    }

    pub const CHAIN_ID: u64 = 43113;
    pub const NAME: &str = "Avalanche Fuji";
    /// Chain slug used in the action descriptor's `chains.source` field.
    pub const SLUG: &str = "fuji";
    /// Default deployed message-store contract.
    pub const MESSAGE_STORE: Address =
        Address::new(hex_literal_20("5ee75a1B1648C023e885E58bD3735Ae273f2cc52"));
}

/// Render the target chain identifier in the requested format.
pub fn chain_id_string(format: ChainIdFormat) -> String {
    match format {
        ChainIdFormat::Numeric => fuji::CHAIN_ID.to_string(),
        ChainIdFormat::Name => fuji::NAME.to_string(),
    }
}
