//! Timestamp Optimization
//!
//! Derives a bounded, message-dependent offset that is added to the current
//! Unix time before the timestamp is stored on-chain. The offset is a pure
//! function of the message, so repeated builds of the same message at the
//! same time produce identical transactions.

/// Offsets are reduced modulo one hour.
const MAX_OFFSET_SECS: u64 = 3600;

/// Current time plus the message-derived offset.
pub fn optimized(message: &str, now_secs: u64) -> u64 {
    now_secs + offset(message)
}

/// Sum each character's code point weighted by its 1-based position, then
/// reduce modulo one hour. Always in `0..3600`.
pub fn offset(message: &str) -> u64 {
    let sum: u64 = message
        .chars()
        .enumerate()
        .map(|(i, c)| c as u64 * (i as u64 + 1))
        .sum();
    sum % MAX_OFFSET_SECS
}
