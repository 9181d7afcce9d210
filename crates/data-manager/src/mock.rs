//! Deterministic placeholder values
//!
//! Stands in for the aggregation API that is not part of this checkout.
//! Values are derived from a hash of the row's identity so that repeated
//! renders of the same request produce the same numbers.

use observatory_shared::IndicatorKind;

/// FNV-1a over the seed parts.
fn hash(parts: &[&str]) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for part in parts {
        for byte in part.as_bytes() {
            h ^= u64::from(*byte);
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        }
        h ^= 0xff;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

/// Placeholder metric value for one aggregated row.
///
/// Rate indicators produce one-decimal values in [2.0, 52.0); absolute
/// indicators produce integers in [10, 510).
pub fn placeholder_value(kind: IndicatorKind, seed: &[&str]) -> f64 {
    let h = hash(seed);
    match kind {
        IndicatorKind::Rate => 2.0 + (h % 500) as f64 / 10.0,
        IndicatorKind::Absolute => (10 + h % 500) as f64,
    }
}
