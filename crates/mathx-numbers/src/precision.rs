//! Binary/decimal precision arithmetic.
//!
//! Precision is measured in bits (`prec`) internally and in decimal digits
//! (`dps`) at the language surface. Both conversions round to the nearest
//! integer and never go below one.

/// Bits in the significand of a machine real.
pub const MACHINE_PRECISION_BITS: u32 = 53;

/// Gap between 1.0 and the next machine real, `2^(1 - 53)`.
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// `log2(10)`, bits per decimal digit.
pub const LOG2_10: f64 = std::f64::consts::LOG2_10;

/// Decimal digits corresponding to `bits` of binary precision.
///
/// ```
/// use mathx_numbers::bits_to_decimal_digits;
/// assert_eq!(bits_to_decimal_digits(53), 15);
/// ```
#[must_use]
pub fn bits_to_decimal_digits(bits: u32) -> u32 {
    let digits = (f64::from(bits) / LOG2_10 - 1.0).round();
    clamp_to_u32(digits)
}

/// Bits of binary precision corresponding to `digits` decimal digits.
///
/// ```
/// use mathx_numbers::decimal_digits_to_bits;
/// assert_eq!(decimal_digits_to_bits(15), 53);
/// ```
#[must_use]
pub fn decimal_digits_to_bits(digits: u32) -> u32 {
    let bits = ((f64::from(digits) + 1.0) * LOG2_10).round();
    clamp_to_u32(bits)
}

/// Decimal digits needed to reconstruct a value held at `bits` precision.
///
/// For machine precision this is 17, the threshold above which a decimal
/// literal carries more information than a machine real can hold.
#[must_use]
pub fn reconstruct_digits(bits: u32) -> u32 {
    clamp_to_u32((f64::from(bits) / LOG2_10).ceil() + 1.0)
}

/// Truncates a fractional decimal precision (as produced by accuracy
/// arithmetic) to a digit count of at least 1.
#[must_use]
pub fn digits_from_f64(digits: f64) -> u32 {
    if digits.is_nan() {
        return 1;
    }
    clamp_to_u32(digits.trunc())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u32(value: f64) -> u32 {
    value.clamp(1.0, f64::from(u32::MAX)) as u32
}
