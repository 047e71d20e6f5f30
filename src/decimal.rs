// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal coercion and formatting helpers
//!
//! Everything in this crate rounds half-up, via
//! [`RoundingMode::HalfUp`]. The rounding mode is part of the public
//! contract: amount factories, denomination conversions and formatting
//! all use it, so round-trips behave predictably.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};

/// Loose numeric input accepted by the amount factories.
///
/// Mirrors the inputs callers actually have at hand: an existing decimal,
/// a string from user input or an API response, a primitive number, or
/// nothing at all (`None`). Conversion is total: malformed strings and
/// non-finite floats coerce to zero (with a warning log) rather than fail,
/// and absent input is zero. Callers that need to reject bad input must
/// validate upstream.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use chainunits::IntoDecimal;
///
/// assert_eq!("1.5".into_decimal(), "1.5".parse::<BigDecimal>().unwrap());
/// assert_eq!("not a number".into_decimal(), BigDecimal::from(0));
/// assert_eq!(None::<&str>.into_decimal(), BigDecimal::from(0));
/// ```
pub trait IntoDecimal {
    /// Convert to an owned `BigDecimal`, coercing malformed input to zero.
    fn into_decimal(self) -> BigDecimal;
}

impl IntoDecimal for BigDecimal {
    fn into_decimal(self) -> BigDecimal {
        self
    }
}

impl IntoDecimal for &BigDecimal {
    fn into_decimal(self) -> BigDecimal {
        self.clone()
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> BigDecimal {
        match self.parse::<BigDecimal>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    value = %self,
                    error = %e,
                    "Failed to parse decimal value, using 0"
                );
                BigDecimal::from(0)
            }
        }
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> BigDecimal {
        self.as_str().into_decimal()
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> BigDecimal {
        self.as_str().into_decimal()
    }
}

impl IntoDecimal for f64 {
    fn into_decimal(self) -> BigDecimal {
        match BigDecimal::try_from(self) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    value = %self,
                    error = %e,
                    "Failed to convert float to decimal, using 0"
                );
                BigDecimal::from(0)
            }
        }
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> BigDecimal {
        f64::from(self).into_decimal()
    }
}

macro_rules! into_decimal_from_int {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> BigDecimal {
                    BigDecimal::from(self)
                }
            }
        )*
    };
}

into_decimal_from_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl<T: IntoDecimal> IntoDecimal for Option<T> {
    fn into_decimal(self) -> BigDecimal {
        match self {
            Some(value) => value.into_decimal(),
            None => BigDecimal::from(0),
        }
    }
}

/// Round a value to a fixed number of fractional digits, half-up.
///
/// The result carries exactly `decimal` fractional digits, so formatting it
/// yields a fixed-width string. Produces a fresh value; never aliases input.
pub fn fixed<V: IntoDecimal>(value: V, decimal: u8) -> BigDecimal {
    value
        .into_decimal()
        .with_scale_round(i64::from(decimal), RoundingMode::HalfUp)
}

/// Format a decimal as a plain fixed-width string with `decimal` fractional
/// digits.
///
/// Always uses `.` as the decimal separator, no digit grouping, no
/// scientific notation. Values with more fractional digits than `decimal`
/// are rounded half-up.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use chainunits::format_fixed;
///
/// let value: BigDecimal = "1.5".parse().unwrap();
/// assert_eq!(format_fixed(&value, 8), "1.50000000");
/// assert_eq!(format_fixed(&value, 0), "2");
/// ```
pub fn format_fixed(value: &BigDecimal, decimal: u8) -> String {
    // Precision formatting, not to_string(): Display drops the scale of
    // zero values, which would render "0" instead of "0.00000000"
    let rounded = value.with_scale_round(i64::from(decimal), RoundingMode::HalfUp);
    format!("{rounded:.prec$}", prec = usize::from(decimal))
}

/// Strip trailing fractional zeros (and a then-trailing `.`) from a
/// fixed-format decimal string.
///
/// Strings without a `.` are returned unchanged, so integer strings are
/// never mangled.
///
/// # Examples
///
/// ```
/// use chainunits::trim_zeros;
///
/// assert_eq!(trim_zeros("1.50000000"), "1.5");
/// assert_eq!(trim_zeros("2.00000000"), "2");
/// assert_eq!(trim_zeros("100"), "100");
/// ```
pub fn trim_zeros(value: &str) -> String {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        value.to_string()
    }
}

/// 10^decimal as a `BigDecimal`, for denomination conversion.
pub(crate) fn pow10(decimal: u8) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -i64::from(decimal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_decimal_from_str() {
        assert_eq!("1.5".into_decimal(), "1.5".parse::<BigDecimal>().unwrap());
        assert_eq!("-0.25".into_decimal(), "-0.25".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_into_decimal_malformed_string_is_zero() {
        assert_eq!("".into_decimal(), BigDecimal::from(0));
        assert_eq!("abc".into_decimal(), BigDecimal::from(0));
        assert_eq!("1.2.3".into_decimal(), BigDecimal::from(0));
    }

    #[test]
    fn test_into_decimal_absent_is_zero() {
        assert_eq!(None::<&str>.into_decimal(), BigDecimal::from(0));
        assert_eq!(None::<u64>.into_decimal(), BigDecimal::from(0));
        assert_eq!(Some("2").into_decimal(), BigDecimal::from(2));
    }

    #[test]
    fn test_into_decimal_from_numbers() {
        assert_eq!(1_000_000u64.into_decimal(), BigDecimal::from(1_000_000u64));
        assert_eq!((-42i32).into_decimal(), BigDecimal::from(-42));
        assert_eq!(1.25f64.into_decimal(), "1.25".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_into_decimal_non_finite_float_is_zero() {
        assert_eq!(f64::NAN.into_decimal(), BigDecimal::from(0));
        assert_eq!(f64::INFINITY.into_decimal(), BigDecimal::from(0));
    }

    #[test]
    fn test_fixed_rounds_half_up() {
        assert_eq!(fixed("1.005", 2), "1.01".parse::<BigDecimal>().unwrap());
        assert_eq!(fixed("1.004", 2), "1.00".parse::<BigDecimal>().unwrap());
        assert_eq!(fixed("1.5", 0), BigDecimal::from(2));
    }

    #[test]
    fn test_format_fixed_pads_to_width() {
        let value: BigDecimal = "1.5".parse().unwrap();
        assert_eq!(format_fixed(&value, 8), "1.50000000");
        assert_eq!(format_fixed(&value, 1), "1.5");
        assert_eq!(format_fixed(&BigDecimal::from(0), 8), "0.00000000");
    }

    #[test]
    fn test_format_fixed_pads_zero() {
        // Zero has an empty digit vector in BigDecimal; padding must not
        // depend on Display honoring the scale
        let zero = BigDecimal::from(0);
        assert_eq!(format_fixed(&zero, 8), "0.00000000");
        assert_eq!(format_fixed(&zero, 2), "0.00");
        assert_eq!(format_fixed(&zero, 0), "0");

        let rounds_to_zero: BigDecimal = "0.0000000001".parse().unwrap();
        assert_eq!(format_fixed(&rounds_to_zero, 8), "0.00000000");
    }

    #[test]
    fn test_format_fixed_integer_width() {
        let value: BigDecimal = "123456789".parse().unwrap();
        assert_eq!(format_fixed(&value, 0), "123456789");
    }

    #[test]
    fn test_trim_zeros() {
        assert_eq!(trim_zeros("1.50000000"), "1.5");
        assert_eq!(trim_zeros("2.00000000"), "2");
        assert_eq!(trim_zeros("0.00000001"), "0.00000001");
    }

    #[test]
    fn test_trim_zeros_integer_untouched() {
        assert_eq!(trim_zeros("100"), "100");
        assert_eq!(trim_zeros("0"), "0");
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigDecimal::from(1));
        assert_eq!(pow10(8), BigDecimal::from(100_000_000u64));
    }
}
