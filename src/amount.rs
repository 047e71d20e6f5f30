// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Amount model: asset/base denominations and conversion between them
//!
//! An asset quantity exists in one of two denominations:
//!
//! ```text
//! AssetAmount (human-readable, e.g. 1.5 BTC)
//!     |                          ^
//!     | asset_to_base            | base_to_asset
//!     v                          |
//! BaseAmount (integral on-chain units, e.g. 150000000 sat)
//! ```
//!
//! Both carry the asset's decimal scale so conversion in either direction
//! is a pure local computation. All values are immutable; every transform
//! returns a fresh amount.

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{fixed, format_fixed, pow10, IntoDecimal};

/// Default decimal scale for assets.
///
/// Historically 8, from the Binance Chain assets the identifier scheme
/// started with: RUNE has 8 decimal digits, 0.00000001 RUNE == 1 tor.
pub const ASSET_DECIMAL: u8 = 8;

/// The two denominations an amount can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    /// Human-readable asset units (e.g. 1.5 BTC)
    Asset,
    /// Smallest indivisible on-chain units (e.g. satoshi), always integral
    Base,
}

/// An amount in human-readable asset units.
///
/// The value carries at most `decimal` fractional digits, enforced by
/// half-up rounding at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    value: BigDecimal,
    decimal: u8,
}

/// An amount in base (on-chain) units.
///
/// # Invariant
///
/// The value is always integral: construction rounds half-up to scale 0.
/// `decimal` records the *asset's* scale, not the amount's own. It is the
/// metadata [`base_to_asset`] needs to convert back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAmount {
    value: BigDecimal,
    decimal: u8,
}

impl AssetAmount {
    /// The decimal value, rounded to this amount's scale.
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// Decimal scale (number of fractional digits).
    pub fn decimal(&self) -> u8 {
        self.decimal
    }
}

impl BaseAmount {
    /// The integral value in base units.
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// Decimal scale of the asset this amount belongs to.
    pub fn decimal(&self) -> u8 {
        self.decimal
    }
}

impl fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_fixed(&self.value, self.decimal))
    }
}

impl fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_fixed(&self.value, 0))
    }
}

/// An amount in either denomination.
///
/// Dispatch is by pattern matching on the variant; the denomination is
/// fixed at construction and [`is_asset`](Amount::is_asset) /
/// [`is_base`](Amount::is_base) are mutually exclusive and total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amount {
    /// Human-readable asset units
    Asset(AssetAmount),
    /// Integral base units
    Base(BaseAmount),
}

impl Amount {
    /// The denomination tag of this amount.
    pub fn denomination(&self) -> Denomination {
        match self {
            Amount::Asset(_) => Denomination::Asset,
            Amount::Base(_) => Denomination::Base,
        }
    }

    /// Whether this amount is in asset denomination.
    pub fn is_asset(&self) -> bool {
        matches!(self, Amount::Asset(_))
    }

    /// Whether this amount is in base denomination.
    pub fn is_base(&self) -> bool {
        matches!(self, Amount::Base(_))
    }

    /// Decimal scale of the underlying asset.
    pub fn decimal(&self) -> u8 {
        match self {
            Amount::Asset(amount) => amount.decimal,
            Amount::Base(amount) => amount.decimal,
        }
    }
}

impl From<AssetAmount> for Amount {
    fn from(amount: AssetAmount) -> Self {
        Amount::Asset(amount)
    }
}

impl From<BaseAmount> for Amount {
    fn from(amount: BaseAmount) -> Self {
        Amount::Base(amount)
    }
}

/// Create an [`AssetAmount`], rounding half-up to `decimal` fractional
/// digits.
///
/// Absent (`None`) and malformed input coerce to zero, per
/// [`IntoDecimal`]. Never fails.
///
/// # Examples
///
/// ```
/// use chainunits::{asset_amount, ASSET_DECIMAL};
///
/// let amount = asset_amount("1.23456789", ASSET_DECIMAL);
/// assert_eq!(amount.to_string(), "1.23456789");
///
/// let rounded = asset_amount("1.5", 0);
/// assert_eq!(rounded.to_string(), "2");
/// ```
pub fn asset_amount<V: IntoDecimal>(value: V, decimal: u8) -> AssetAmount {
    AssetAmount {
        value: fixed(value, decimal),
        decimal,
    }
}

/// [`asset_amount`] at the default scale ([`ASSET_DECIMAL`]).
pub fn asset_amount_default<V: IntoDecimal>(value: V) -> AssetAmount {
    asset_amount(value, ASSET_DECIMAL)
}

/// Create a [`BaseAmount`], rounding half-up to an integer.
///
/// `decimal` is the scale of the asset the base units belong to, retained
/// for conversion back to asset denomination. Absent and malformed input
/// coerce to zero. Never fails.
///
/// # Examples
///
/// ```
/// use chainunits::{base_amount, ASSET_DECIMAL};
///
/// let amount = base_amount(150_000_000u64, ASSET_DECIMAL);
/// assert_eq!(amount.to_string(), "150000000");
/// ```
pub fn base_amount<V: IntoDecimal>(value: V, decimal: u8) -> BaseAmount {
    BaseAmount {
        value: fixed(value, 0),
        decimal,
    }
}

/// [`base_amount`] at the default scale ([`ASSET_DECIMAL`]).
pub fn base_amount_default<V: IntoDecimal>(value: V) -> BaseAmount {
    base_amount(value, ASSET_DECIMAL)
}

/// Convert base units to asset denomination: value / 10^decimal, rounded
/// half-up to `decimal` fractional digits, at the same scale.
///
/// # Examples
///
/// ```
/// use chainunits::{base_amount, base_to_asset, ASSET_DECIMAL};
///
/// let base = base_amount(150_000_000u64, ASSET_DECIMAL);
/// assert_eq!(base_to_asset(&base).to_string(), "1.50000000");
/// ```
pub fn base_to_asset(base: &BaseAmount) -> AssetAmount {
    let decimal = base.decimal;
    let value = base.value.clone() / pow10(decimal);
    asset_amount(value, decimal)
}

/// Convert asset units to base denomination: value * 10^decimal, rounded
/// half-up to an integer.
///
/// The result is re-tagged with the default scale ([`ASSET_DECIMAL`])
/// regardless of the source amount's scale. For assets at a non-default
/// scale, convert back with an explicit [`base_amount`] at the original
/// scale instead of relying on the result's metadata.
///
/// # Examples
///
/// ```
/// use chainunits::{asset_amount, asset_to_base, ASSET_DECIMAL};
///
/// let asset = asset_amount("1.5", ASSET_DECIMAL);
/// assert_eq!(asset_to_base(&asset).to_string(), "150000000");
/// ```
pub fn asset_to_base(asset: &AssetAmount) -> BaseAmount {
    let value = (asset.value.clone() * pow10(asset.decimal))
        .with_scale_round(0, RoundingMode::HalfUp);
    base_amount(value, ASSET_DECIMAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_amount_creation() {
        let amount = asset_amount("1.5", 8);
        assert_eq!(amount.decimal(), 8);
        assert_eq!(amount.value(), &"1.5".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_asset_amount_rounds_to_scale() {
        let amount = asset_amount("1.234567895", 8);
        assert_eq!(amount.to_string(), "1.23456790");
        let amount = asset_amount("1.005", 2);
        assert_eq!(amount.to_string(), "1.01");
    }

    #[test]
    fn test_asset_amount_absent_is_zero() {
        let amount = asset_amount(None::<&str>, 8);
        assert_eq!(amount.value(), &BigDecimal::from(0));
    }

    #[test]
    fn test_asset_amount_malformed_is_zero() {
        let amount = asset_amount("not a number", 8);
        assert_eq!(amount.value(), &BigDecimal::from(0));
    }

    #[test]
    fn test_base_amount_is_integral() {
        let amount = base_amount("1.5", 8);
        assert_eq!(amount.to_string(), "2");
        let amount = base_amount(123u64, 8);
        assert_eq!(amount.to_string(), "123");
    }

    #[test]
    fn test_base_amount_retains_decimal_metadata() {
        let amount = base_amount(1_000_000u64, 6);
        assert_eq!(amount.decimal(), 6);
    }

    #[test]
    fn test_base_to_asset() {
        let base = base_amount(123_456_789u64, 8);
        let asset = base_to_asset(&base);
        assert_eq!(asset.to_string(), "1.23456789");
        assert_eq!(asset.decimal(), 8);
    }

    #[test]
    fn test_base_to_asset_respects_scale() {
        let base = base_amount(1_500_000u64, 6);
        let asset = base_to_asset(&base);
        assert_eq!(asset.to_string(), "1.500000");
        assert_eq!(asset.decimal(), 6);
    }

    #[test]
    fn test_asset_to_base() {
        let asset = asset_amount("1.23456789", 8);
        let base = asset_to_base(&asset);
        assert_eq!(base.to_string(), "123456789");
    }

    #[test]
    fn test_asset_to_base_retags_default_scale() {
        // Intentional: the source scale is discarded on this direction
        let asset = asset_amount("1.5", 6);
        let base = asset_to_base(&asset);
        assert_eq!(base.to_string(), "1500000");
        assert_eq!(base.decimal(), ASSET_DECIMAL);
    }

    #[test]
    fn test_round_trip_at_native_scale() {
        let original = asset_amount("1.23456789", 8);
        let round_tripped = base_to_asset(&asset_to_base(&original));
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_narrowing_scale_is_lossy() {
        // 2 fractional digits of scale, so the third digit is rounded away
        let original = asset_amount("1.234", 8);
        let narrow = asset_amount(original.value(), 2);
        assert_eq!(narrow.to_string(), "1.23");
    }

    #[test]
    fn test_amount_predicates() {
        let asset: Amount = asset_amount("1", 8).into();
        let base: Amount = base_amount(1u64, 8).into();

        assert!(asset.is_asset());
        assert!(!asset.is_base());
        assert_eq!(asset.denomination(), Denomination::Asset);

        assert!(base.is_base());
        assert!(!base.is_asset());
        assert_eq!(base.denomination(), Denomination::Base);
    }

    #[test]
    fn test_amount_decimal_passthrough() {
        let asset: Amount = asset_amount("1", 6).into();
        let base: Amount = base_amount(1u64, 6).into();
        assert_eq!(asset.decimal(), 6);
        assert_eq!(base.decimal(), 6);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(asset_amount("1.5", 8).to_string(), "1.50000000");
        assert_eq!(base_amount(500u64, 8).to_string(), "500");
    }

    #[test]
    fn test_zero_amounts_display_fixed_width() {
        assert_eq!(asset_amount("0", 8).to_string(), "0.00000000");
        assert_eq!(asset_amount(None::<&str>, 8).to_string(), "0.00000000");
        assert_eq!(base_amount(0u64, 8).to_string(), "0");
    }

    #[test]
    fn test_serialization() {
        let amount: Amount = asset_amount("1.5", 8).into();
        let json = serde_json::to_string(&amount).unwrap();
        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);

        let amount: Amount = base_amount(150_000_000u64, 8).into();
        let json = serde_json::to_string(&amount).unwrap();
        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);
    }
}
