//! The decimal result type.

use core::fmt;

/// The shortest decimal form of a binary floating point number,
/// `sign * digits * 10^exponent`.
///
/// NaN and infinity are carried with
/// [`EXCEPTIONAL_EXPONENT`][Self::EXCEPTIONAL_EXPONENT] in the
/// exponent; every finite value, including signed zero, has a real
/// exponent.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// True for negative values, including -0.0 and negative NaN.
    pub sign: bool,
    /// The decimal significand, free of trailing zeros for nonzero
    /// finite values. 1 for NaN, 0 for infinity.
    pub digits: u128,
    /// The power of ten scaling `digits`.
    pub exponent: i32,
}

impl Decimal {
    /// The exponent marking NaN and infinity.
    pub const EXCEPTIONAL_EXPONENT: i32 = i32::MAX;

    /// Returns a zero with the given sign.
    pub const fn zero(sign: bool) -> Self {
        Self {
            sign,
            digits: 0,
            exponent: 0,
        }
    }

    /// Returns a NaN carrying the given sign.
    pub const fn nan(sign: bool) -> Self {
        Self {
            sign,
            digits: 1,
            exponent: Self::EXCEPTIONAL_EXPONENT,
        }
    }

    /// Returns an infinity with the given sign.
    pub const fn infinity(sign: bool) -> Self {
        Self {
            sign,
            digits: 0,
            exponent: Self::EXCEPTIONAL_EXPONENT,
        }
    }

    /// Reports whether `self` is NaN or infinity.
    pub const fn is_special(self) -> bool {
        self.exponent == Self::EXCEPTIONAL_EXPONENT
    }

    /// Reports whether `self` is NaN.
    pub const fn is_nan(self) -> bool {
        self.is_special() && self.digits != 0
    }

    /// Reports whether `self` is an infinity.
    pub const fn is_infinite(self) -> bool {
        self.is_special() && self.digits == 0
    }

    /// Reports whether `self` is zero of either sign.
    pub const fn is_zero(self) -> bool {
        self.digits == 0 && !self.is_special()
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = u8::from(self.sign);
        if self.is_nan() {
            write!(f, "[{sign},NaN]")
        } else if self.is_infinite() {
            write!(f, "[{sign},inf]")
        } else {
            write!(f, "[{sign},{},{}]", self.digits, self.exponent)
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign { "-" } else { "" };
        if self.is_nan() {
            write!(f, "{sign}NaN")
        } else if self.is_infinite() {
            write!(f, "{sign}Infinity")
        } else {
            write!(f, "{sign}{}e{}", self.digits, self.exponent)
        }
    }
}
