//! Power-of-five reconstruction and base-conversion log estimates.

// The asserted input ranges keep every index and exponent cast far
// below the signed limits.
#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use super::{
    tables::{POW5_ERRORS, POW5_INV_ERRORS, POW5_INV_SPLIT, POW5_SPLIT, POW5_TABLE},
    uint256::{self, u256},
};

/// Significant bits carried by the split tables.
pub(crate) const POW5_BITCOUNT: i32 = 249;
/// Significant bits carried by the inverse split tables.
pub(crate) const POW5_INV_BITCOUNT: i32 = 249;

/// The split stride: exact powers cover `5^0` through `5^55`.
const STRIDE: u32 = POW5_TABLE.len() as u32;

/// Returns `floor(log10(2^e))` for `0 <= e <= 2^15`.
pub(crate) const fn log10_pow2(e: i32) -> i32 {
    debug_assert!(0 <= e && e <= 1 << 15);

    ((e as u64 * 0x9A209A84FBCF) >> 49) as i32
}

/// Returns `floor(log10(5^e))` for `0 <= e <= 2^15`.
pub(crate) const fn log10_pow5(e: i32) -> i32 {
    debug_assert!(0 <= e && e <= 1 << 15);

    ((e as u64 * 0xB2EFB2BD8218) >> 48) as i32
}

/// Returns the bit length of `5^e`, i.e. `ceil(log2(5^e))` for `e > 0`,
/// for `0 <= e <= 2^15`.
pub(crate) const fn pow5bits(e: i32) -> i32 {
    debug_assert!(0 <= e && e <= 1 << 15);

    (((e as u64 * 163391164108059) >> 46) + 1) as i32
}

/// Computes `5^i` normalized to 249 significant bits, rounded down.
///
/// An index beyond the correction tables is a caller bug and panics.
pub(crate) fn compute_pow5(i: u32) -> u256 {
    let base = i / STRIDE;
    let base2 = base * STRIDE;

    #[allow(
        clippy::indexing_slicing,
        reason = "out-of-range indices violate the exponent contract and must panic"
    )]
    let mul = &POW5_SPLIT[base as usize];
    if i == base2 {
        return *mul;
    }

    // 5^i = 5^offset * 5^base2, renormalized by the width difference
    // and nudged back up by the precomputed truncation error.
    #[allow(clippy::indexing_slicing, reason = "`offset` is within the stride")]
    let m = POW5_TABLE[(i - base2) as usize];
    let delta = (pow5bits(i as i32) - pow5bits(base2 as i32)).unsigned_abs();
    #[allow(
        clippy::indexing_slicing,
        reason = "out-of-range indices violate the exponent contract and must panic"
    )]
    let corr = (POW5_ERRORS[(i / 32) as usize] >> (2 * (i % 32))) & 3;
    uint256::mul_shift_trunc(m, mul, delta, corr)
}

/// Computes `5^-i` as `ceil(2^(248 + pow5bits(i)) / 5^i)`.
///
/// An index beyond the correction tables is a caller bug and panics.
pub(crate) fn compute_inv_pow5(i: u32) -> u256 {
    let base = (i + STRIDE - 1) / STRIDE;
    let base2 = base * STRIDE;

    #[allow(
        clippy::indexing_slicing,
        reason = "out-of-range indices violate the exponent contract and must panic"
    )]
    let mul = &POW5_INV_SPLIT[base as usize];
    if i == base2 {
        // The table stores the floor; restore the ceiling.
        return mul.add_small(1);
    }

    // 5^-i = 5^offset * 5^-base2; the stored corrections fold in the
    // +1 that turns the truncated quotient into a ceiling.
    #[allow(clippy::indexing_slicing, reason = "`offset` is within the stride")]
    let m = POW5_TABLE[(base2 - i) as usize];
    let delta = (pow5bits(base2 as i32) - pow5bits(i as i32)).unsigned_abs();
    #[allow(
        clippy::indexing_slicing,
        reason = "out-of-range indices violate the exponent contract and must panic"
    )]
    let corr = ((POW5_INV_ERRORS[(i / 32) as usize] >> (2 * (i % 32))) & 3) + 1;
    uint256::mul_shift_trunc(m, mul, delta, corr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow5_table_exact() {
        let mut want = 1u128;
        for (k, &got) in POW5_TABLE.iter().enumerate() {
            assert_eq!(got, want, "k={k}");
            want = want.checked_mul(5).unwrap_or(0);
        }
    }

    #[test]
    fn test_log10_pow2() {
        assert_eq!(log10_pow2(0), 0);
        assert_eq!(log10_pow2(1), 0);
        assert_eq!(log10_pow2(5), 1);
        assert_eq!(log10_pow2(16383), 4931);
        assert_eq!(log10_pow2(32768), 9864);
    }

    #[test]
    fn test_log10_pow5() {
        assert_eq!(log10_pow5(0), 0);
        assert_eq!(log10_pow5(1), 0);
        assert_eq!(log10_pow5(2), 1);
        assert_eq!(log10_pow5(3), 2);
        assert_eq!(log10_pow5(16494), 11528);
        assert_eq!(log10_pow5(32768), 22903);
    }

    #[test]
    fn test_pow5bits() {
        assert_eq!(pow5bits(0), 1);
        for (e, &p) in POW5_TABLE.iter().enumerate() {
            assert_eq!(pow5bits(e as i32), (128 - p.leading_zeros()) as i32, "{e}");
        }
        assert_eq!(pow5bits(4896), 11369);
        assert_eq!(pow5bits(4967), 11534);
    }

    #[test]
    fn test_compute_pow5_small() {
        // 5^1 at 249 bits: 5 << 246.
        assert_eq!(compute_pow5(1), u256::new(5u128 << 118, 0));
        // 5^55 spans exactly 128 bits, so it sits at 5^55 << 121.
        assert_eq!(
            compute_pow5(55),
            u256::new(
                0x01a19e96a19fc40ecbffe969c7ee839e,
                0xda000000000000000000000000000000,
            )
        );
    }

    #[test]
    fn test_compute_pow5_on_split_boundary() {
        assert_eq!(compute_pow5(0), POW5_SPLIT[0]);
        assert_eq!(compute_pow5(56), POW5_SPLIT[1]);
        assert_eq!(compute_pow5(88 * 56), POW5_SPLIT[88]);
    }

    #[test]
    fn test_compute_pow5_top_of_range() {
        assert_eq!(
            compute_pow5(4967),
            u256::new(
                0x010301cb10aa5e540cf2083feb0c3671,
                0x0a0b17576956c1a06e07770996e272cd,
            )
        );
    }

    #[test]
    fn test_compute_inv_pow5() {
        assert_eq!(compute_inv_pow5(0), POW5_INV_SPLIT[0].add_small(1));
        assert_eq!(compute_inv_pow5(56), POW5_INV_SPLIT[1].add_small(1));
        assert_eq!(
            compute_inv_pow5(10),
            u256::new(
                0x01b7cdfd9d7bdbab7d6ae6881cb5109a,
                0x365f7e0df99d2255b971b0845d4079a3,
            )
        );
        assert_eq!(
            compute_inv_pow5(4896),
            u256::new(
                0x01ca449542be72fb3052c1165a1599b5,
                0x86e238d6c4d88d7b13e184bfc36afe0b,
            )
        );
    }
}
