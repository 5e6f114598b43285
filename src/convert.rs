//! Shortest-decimal conversion of decomposed binary floats.

use crate::{
    arith,
    dec::Decimal,
    pow5::{self, log10_pow2, log10_pow5, pow5bits},
    uint256::{self, u256},
};

mod private {
    pub trait Sealed {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
}

/// The working width of the digit-removal loop.
///
/// Everything a conversion scales into the decimal domain fits the
/// chosen width; the narrow width exists so that the common formats
/// stay on single-word arithmetic.
trait Word: private::Sealed + Copy + Ord + From<u8> + core::ops::Sub<Output = Self> {
    const BITS: u32;

    /// Returns bits `[j, j + 128)` of `m * mul`, truncated to `Self`.
    fn mul_shift(m: u128, mul: &u256, j: u32) -> Self;

    /// Returns `(self / 10, self % 10)`.
    fn divrem10(self) -> (Self, u8);

    /// Returns `self / 10`.
    fn div10(self) -> Self;

    fn is_even(self) -> bool;

    fn into_u128(self) -> u128;
}

impl Word for u64 {
    const BITS: u32 = 64;

    fn mul_shift(m: u128, mul: &u256, j: u32) -> Self {
        // The projected bounds fit 64 bits for every precision routed
        // to this width, so the truncation is lossless.
        uint256::mul_shift(m, mul, j) as u64
    }

    fn divrem10(self) -> (Self, u8) {
        (self / 10, (self % 10) as u8)
    }

    fn div10(self) -> Self {
        self / 10
    }

    fn is_even(self) -> bool {
        self & 1 == 0
    }

    fn into_u128(self) -> u128 {
        u128::from(self)
    }
}

impl Word for u128 {
    const BITS: u32 = 128;

    fn mul_shift(m: u128, mul: &u256, j: u32) -> Self {
        uint256::mul_shift(m, mul, j)
    }

    fn divrem10(self) -> (Self, u8) {
        arith::divrem10(self)
    }

    fn div10(self) -> Self {
        arith::div10(self)
    }

    fn is_even(self) -> bool {
        self & 1 == 0
    }

    fn into_u128(self) -> u128 {
        self
    }
}

/// Converts `sign * c * 2^e` to the shortest decimal that reads back
/// as the same value, where `c` carries `precision` bits.
#[allow(clippy::cast_possible_wrap, reason = "the widths are 64 and 128")]
fn to_decimal<W: Word>(sign: bool, c: u128, e: i32, precision: u32) -> Decimal {
    debug_assert!(precision >= 1 && precision <= 113);
    debug_assert!(c >> precision == 0);

    if c == 0 {
        return Decimal::zero(sign);
    }

    // Two extra bits of scale turn the halfway points to the
    // neighboring floats into integers.
    let e2 = e - 2;
    let even = c & 1 == 0;
    let accept_bounds = even;
    let mv = c << 2;
    // The gap below is a full ulp exactly when c is not at the start
    // of a binade.
    let mm_shift = u128::from(c != 1u128 << (precision - 1));

    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;

    // Scale the value and both halfway bounds into the decimal
    // domain, tracking whether the scaled values are exact.
    let e10;
    let (mut vr, mut vp, mut vm);
    if e2 >= 0 {
        let q = log10_pow2(e2) - i32::from(e2 > 3);
        e10 = q;
        let k = pow5::POW5_INV_BITCOUNT + pow5bits(q) - 1;
        let i = (-e2 + q + k).unsigned_abs();
        let pow5 = pow5::compute_inv_pow5(q.unsigned_abs());
        vr = W::mul_shift(mv, &pow5, i);
        vp = W::mul_shift(mv + 2, &pow5, i);
        vm = W::mul_shift(mv - 1 - mm_shift, &pow5, i);
        if q <= 55 {
            // Only one of mv, mv + 2, and mv - 1 - mm_shift can be a
            // multiple of five, if any.
            if arith::divrem5(mv).1 == 0 {
                vr_is_trailing_zeros =
                    q != 0 && arith::multiple_of_pow5(mv, q.unsigned_abs() - 1);
            } else if accept_bounds {
                vm_is_trailing_zeros =
                    arith::multiple_of_pow5(mv - 1 - mm_shift, q.unsigned_abs());
            } else if arith::multiple_of_pow5(mv + 2, q.unsigned_abs()) {
                vp = vp - W::from(1u8);
            }
        }
    } else {
        let q = log10_pow5(-e2) - i32::from(-e2 > 1);
        e10 = q + e2;
        let i = -e2 - q;
        let k = pow5bits(i) - pow5::POW5_BITCOUNT;
        let j = (q - k).unsigned_abs();
        let pow5 = pow5::compute_pow5(i.unsigned_abs());
        vr = W::mul_shift(mv, &pow5, j);
        vp = W::mul_shift(mv + 2, &pow5, j);
        vm = W::mul_shift(mv - 1 - mm_shift, &pow5, j);
        if q <= 1 {
            // mv = 4c always has two trailing zero bits.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mv - 1 - mm_shift has one trailing zero iff
                // mm_shift is 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mv + 2 always has one.
                vp = vp - W::from(1u8);
            }
        } else if q < W::BITS as i32 - 1 {
            vr_is_trailing_zeros = arith::multiple_of_pow2(mv, q.unsigned_abs() - 1);
        }
    }

    // Strip digits until the candidates collapse onto one value,
    // remembering the last digit removed from vr for rounding.
    let mut removed = 0;
    let mut last_removed_digit = 0u8;
    loop {
        let vp_div10 = vp.div10();
        let (vm_div10, vm_mod10) = vm.divrem10();
        if vp_div10 <= vm_div10 {
            break;
        }
        vm_is_trailing_zeros &= vm_mod10 == 0;
        vr_is_trailing_zeros &= last_removed_digit == 0;
        let (vr_div10, vr_mod10) = vr.divrem10();
        last_removed_digit = vr_mod10;
        vr = vr_div10;
        vp = vp_div10;
        vm = vm_div10;
        removed += 1;
    }

    if vm_is_trailing_zeros {
        // The lower bound is still exact: keep shaving zeros so an
        // exactly-representable short value is emitted as such.
        loop {
            let (vm_div10, vm_mod10) = vm.divrem10();
            if vm_mod10 != 0 {
                break;
            }
            vr_is_trailing_zeros &= last_removed_digit == 0;
            // All three candidates share a quotient here, so vr's
            // digit can come off vm's division.
            last_removed_digit = (vr.into_u128() - 10 * vm_div10.into_u128()) as u8;
            vr = vm_div10;
            vp = vm_div10;
            vm = vm_div10;
            removed += 1;
        }
    }

    if vr_is_trailing_zeros && last_removed_digit == 5 && vr.is_even() {
        // An exact .5000... tail rounds to even.
        last_removed_digit = 4;
    }

    // Take vr + 1 when vr fell on an excluded lower bound or the
    // removed tail weighs at least a half.
    let out_of_bounds = vr == vm && (!accept_bounds || !vm_is_trailing_zeros);
    Decimal {
        sign,
        digits: vr.into_u128() + u128::from(out_of_bounds || last_removed_digit >= 5),
        exponent: e10 + removed,
    }
}

/// Precisions at or below this run the digit loop at 64 bits: the
/// scaled candidates stay below `100 * 2^(precision + 2)`.
const SMALL_PRECISION: u32 = 55;

/// Converts a decomposed binary floating point number,
/// `sign * coefficient * 2^exponent`, to its shortest decimal form.
/// The coefficient holds `mantissa_bits` bits of precision including
/// any leading one.
///
/// A zero coefficient yields a zero decimal with the given sign. NaN
/// and infinity pass through: supply
/// [`Decimal::EXCEPTIONAL_EXPONENT`] as the exponent with a
/// coefficient of 1 or 0 respectively.
///
/// # Panics
///
/// Panics when `mantissa_bits` is 0 or exceeds 113, when a nonzero
/// coefficient does not fit `mantissa_bits`, or when the exponent of a
/// nonzero value falls outside the binary128 range.
pub fn convert(sign: bool, coefficient: u128, exponent: i32, mantissa_bits: u32) -> Decimal {
    if exponent == Decimal::EXCEPTIONAL_EXPONENT {
        debug_assert!(coefficient <= 1);
        return Decimal {
            sign,
            digits: coefficient,
            exponent,
        };
    }
    assert!(mantissa_bits >= 1 && mantissa_bits <= 113);
    assert!(coefficient >> mantissa_bits == 0);
    assert!(coefficient == 0 || exponent.unsigned_abs() < 1 << 15);

    if mantissa_bits <= SMALL_PRECISION {
        to_decimal::<u64>(sign, coefficient, exponent, mantissa_bits)
    } else {
        to_decimal::<u128>(sign, coefficient, exponent, mantissa_bits)
    }
}

impl Decimal {
    /// Converts a raw IEEE 754 interchange encoding with an implicit
    /// leading significand bit: one sign bit, `exponent_bits` of
    /// biased exponent, then `mantissa_bits` of fraction.
    ///
    /// # Panics
    ///
    /// Panics when the layout exceeds 128 bits, `exponent_bits` is not
    /// in `[2, 15]`, or the precision `mantissa_bits + 1` exceeds 113.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "field widths are at most 15 and 112 bits"
    )]
    pub fn from_bits(bits: u128, mantissa_bits: u32, exponent_bits: u32) -> Self {
        assert!(exponent_bits >= 2 && exponent_bits <= 15);
        assert!(mantissa_bits + exponent_bits < 128);

        let sign = (bits >> (mantissa_bits + exponent_bits)) & 1 == 1;
        let mantissa = bits & ((1 << mantissa_bits) - 1);
        let exponent = ((bits >> mantissa_bits) & ((1 << exponent_bits) - 1)) as u32;

        if exponent == (1 << exponent_bits) - 1 {
            // Infinity when the fraction is clear, NaN otherwise.
            return if mantissa == 0 {
                Self::infinity(sign)
            } else {
                Self::nan(sign)
            };
        }
        if exponent == 0 && mantissa == 0 {
            return Self::zero(sign);
        }

        let bias = (1i32 << (exponent_bits - 1)) - 1;
        let (c, e) = if exponent == 0 {
            (mantissa, 1 - bias - mantissa_bits as i32)
        } else {
            (
                mantissa | 1 << mantissa_bits,
                exponent as i32 - bias - mantissa_bits as i32,
            )
        };
        convert(sign, c, e, mantissa_bits + 1)
    }

    /// Converts a binary16 encoding.
    pub fn from_f16_bits(bits: u16) -> Self {
        Self::from_bits(u128::from(bits), 10, 5)
    }

    /// Converts a binary128 encoding.
    pub fn from_f128_bits(bits: u128) -> Self {
        Self::from_bits(bits, 112, 15)
    }

    /// Converts an encoding with an explicit leading significand bit,
    /// such as the x87 80-bit format: one sign bit, `exponent_bits` of
    /// biased exponent, then `mantissa_bits` of significand whose top
    /// bit is the integer bit.
    ///
    /// # Panics
    ///
    /// Panics like [`from_bits`][Self::from_bits], with the precision
    /// being `mantissa_bits` itself.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "field widths are at most 15 and 113 bits"
    )]
    pub fn from_extended_bits(bits: u128, mantissa_bits: u32, exponent_bits: u32) -> Self {
        assert!(exponent_bits >= 2 && exponent_bits <= 15);
        assert!(mantissa_bits >= 2 && mantissa_bits + exponent_bits < 128);

        let sign = (bits >> (mantissa_bits + exponent_bits)) & 1 == 1;
        let mantissa = bits & ((1 << mantissa_bits) - 1);
        let exponent = ((bits >> mantissa_bits) & ((1 << exponent_bits) - 1)) as u32;

        if exponent == (1 << exponent_bits) - 1 {
            // The integer bit does not take part in classification.
            return if mantissa & ((1 << (mantissa_bits - 1)) - 1) == 0 {
                Self::infinity(sign)
            } else {
                Self::nan(sign)
            };
        }
        if exponent == 0 && mantissa == 0 {
            return Self::zero(sign);
        }

        let bias = (1i32 << (exponent_bits - 1)) - 1;
        let e = exponent.max(1) as i32 - bias - (mantissa_bits as i32 - 1);
        convert(sign, mantissa, e, mantissa_bits)
    }
}

impl From<f64> for Decimal {
    fn from(x: f64) -> Self {
        Self::from_bits(u128::from(x.to_bits()), 52, 11)
    }
}

impl From<f32> for Decimal {
    fn from(x: f32) -> Self {
        Self::from_bits(u128::from(x.to_bits()), 23, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(sign: bool, digits: u128, exponent: i32) -> Decimal {
        Decimal {
            sign,
            digits,
            exponent,
        }
    }

    #[test]
    fn test_f64_basic() {
        assert_eq!(Decimal::from(1.0), dec(false, 1, 0));
        assert_eq!(Decimal::from(0.1), dec(false, 1, -1));
        assert_eq!(Decimal::from(-0.3), dec(true, 3, -1));
        assert_eq!(Decimal::from(299792458.0), dec(false, 299792458, 0));
        assert_eq!(Decimal::from(0.000625), dec(false, 625, -6));
    }

    #[test]
    fn test_f64_one_ulp_above_one() {
        let x = f64::from_bits(0x3FF0000000000000 + 1);
        assert_eq!(Decimal::from(x), dec(false, 10000000000000002, -16));
    }

    #[test]
    fn test_f64_extremes() {
        // Smallest positive subnormal.
        assert_eq!(Decimal::from(f64::from_bits(1)), dec(false, 5, -324));
        assert_eq!(
            Decimal::from(f64::MIN_POSITIVE),
            dec(false, 22250738585072014, -324),
        );
        assert_eq!(
            Decimal::from(f64::MAX),
            dec(false, 17976931348623157, 292),
        );
    }

    #[test]
    fn test_f64_specials() {
        assert_eq!(Decimal::from(f64::INFINITY), Decimal::infinity(false));
        assert_eq!(Decimal::from(f64::NEG_INFINITY), Decimal::infinity(true));
        assert!(Decimal::from(f64::NAN).is_nan());
        assert_eq!(Decimal::from(0.0), dec(false, 0, 0));
        assert_eq!(Decimal::from(-0.0), dec(true, 0, 0));
    }

    #[test]
    fn test_f32() {
        assert_eq!(Decimal::from(1.0f32), dec(false, 1, 0));
        assert_eq!(Decimal::from(0.3f32), dec(false, 3, -1));
        assert_eq!(Decimal::from(1.0e-45f32), dec(false, 1, -45));
        assert_eq!(Decimal::from(f32::MAX), dec(false, 34028235, 31));
    }

    #[test]
    fn test_binary16() {
        // (bits, digits, exponent) checked against exact arithmetic.
        let cases = [
            (0x3C00, 1u128, 0),
            (0x3C01, 1001, -3),
            (0x0001, 6, -8),
            (0x7BFF, 655, 2),
            (0x0400, 6104, -8),
            (0x3555, 3333, -4),
        ];
        for (bits, digits, exponent) in cases {
            assert_eq!(
                Decimal::from_f16_bits(bits),
                dec(false, digits, exponent),
                "{bits:#06x}"
            );
        }
    }

    #[test]
    fn test_binary128_spot() {
        assert_eq!(
            Decimal::from_f128_bits(0x3fff << 112),
            dec(false, 1, 0),
        );
        assert_eq!(
            Decimal::from_f128_bits((0x3fff << 112) | 1),
            dec(false, 10000000000000000000000000000000002, -34),
        );
        // Smallest positive subnormal.
        assert_eq!(Decimal::from_f128_bits(1), dec(false, 6, -4966));
    }

    #[test]
    fn test_extended_f80() {
        // 1.0 in x87 extended precision.
        let one = (0x3FFFu128 << 64) | (1 << 63);
        assert_eq!(Decimal::from_extended_bits(one, 64, 15), dec(false, 1, 0));
        // One ulp above 1.0.
        assert_eq!(
            Decimal::from_extended_bits(one | 1, 64, 15),
            dec(false, 10000000000000000001, -19),
        );
        // Specials classify off the fraction alone.
        let inf = (0x7FFFu128 << 64) | (1 << 63);
        assert!(Decimal::from_extended_bits(inf, 64, 15).is_infinite());
        assert!(Decimal::from_extended_bits(inf | 1, 64, 15).is_nan());
    }

    #[test]
    fn test_convert_passthrough() {
        let nan = convert(true, 1, Decimal::EXCEPTIONAL_EXPONENT, 53);
        assert!(nan.is_nan() && nan.sign);
        let inf = convert(false, 0, Decimal::EXCEPTIONAL_EXPONENT, 53);
        assert!(inf.is_infinite() && !inf.sign);
        assert_eq!(convert(true, 0, -7, 53), Decimal::zero(true));
    }

    #[test]
    fn test_convert_decomposed() {
        // 3 * 2^-2: both 0.7 and 0.8 read back as 0.75, and 0.75 sits
        // exactly between them; the odd candidate loses.
        assert_eq!(convert(false, 3, -2, 53), dec(false, 8, -1));
        // 2^-1074, decomposed by hand.
        assert_eq!(convert(false, 1, -1074, 53), dec(false, 5, -324));
    }

    #[test]
    fn test_exact_tie_keeps_even() {
        // 1 * 2^-2: the removed tail of 0.25 is an exact half and the
        // kept digit is even, so the result stays 0.2 instead of
        // rounding up to 0.3. Both parse back to 0.25.
        assert_eq!(convert(false, 1, -2, 53), dec(false, 2, -1));
        // 5 * 2^-2 = 1.25 keeps 1.2 the same way.
        assert_eq!(convert(false, 5, -2, 53), dec(false, 12, -1));
        // 7 * 2^-2 = 1.75 has an odd kept digit and rounds up to 1.8.
        assert_eq!(convert(false, 7, -2, 53), dec(false, 18, -1));
    }

    #[test]
    fn test_widths_agree() {
        // Values representable in both widths convert identically.
        for bits in [0x3C00u16, 0x3C01, 0x0001, 0x7BFF, 0x3555] {
            let narrow = Decimal::from_f16_bits(bits);
            let sign = bits >> 15 == 1;
            let mantissa = u128::from(bits & 0x3FF);
            let exponent = i32::from((bits >> 10) & 0x1F);
            let (c, e) = if exponent == 0 {
                (mantissa, 1 - 15 - 10)
            } else {
                (mantissa | 1 << 10, exponent - 15 - 10)
            };
            let wide = to_decimal::<u128>(sign, c, e, 11);
            assert_eq!(narrow, wide, "{bits:#06x}");
        }
    }
}
