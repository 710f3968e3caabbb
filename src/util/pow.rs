// SPDX-License-Identifier: CC0-1.0

//! Utility for difficulty targets
//!
//! Expands the compact `nBits` form carried by block headers into a full
//! target.
//!

use rug::Integer;

/// Expands compact `bits` into the target it encodes.
///
/// The top byte is a base-256 exponent and the low 23 bits the mantissa. The
/// sign bit (`0x0080_0000`) never produces a valid target and yields zero.
pub fn target_from_compact(bits: u32) -> Integer {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;
    if bits & 0x0080_0000 != 0 {
        return Integer::new();
    }
    if size <= 3 {
        Integer::from(word >> (8 * (3 - size)))
    } else {
        Integer::from(word) << (8 * (size - 3))
    }
}

#[cfg(test)]
mod tests {
    use rug::Integer;

    use super::target_from_compact;
    use crate::consensus::params::pow_limit;

    #[test]
    fn compact_expansion() {
        assert_eq!(target_from_compact(0x1d00ffff), Integer::from(0xffff) << 208u32);
        assert_eq!(target_from_compact(0x1e0ffff0), Integer::from(0x0ffff0) << 216u32);
        assert_eq!(target_from_compact(0x03123456), Integer::from(0x123456));
        assert_eq!(target_from_compact(0x02123456), Integer::from(0x1234));
        assert_eq!(target_from_compact(0x01123456), Integer::from(0x12));
        assert_eq!(target_from_compact(0x04923456), Integer::new());
    }

    #[test]
    fn genesis_bits_within_pow_limit() {
        let target = target_from_compact(0x1e0ffff0);
        assert!(target <= pow_limit());
        assert!(target_from_compact(0x1f0fffff) > pow_limit());
    }
}
