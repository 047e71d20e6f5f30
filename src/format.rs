// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display formatting for amounts, with currency-specific symbols
//!
//! Plain formatting renders an amount as a fixed-width decimal string.
//! Currency formatting prefixes a glyph resolved from the asset's ticker,
//! with one unit-switching special case: small BTC amounts are rendered in
//! satoshi.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::{asset_to_base, base_to_asset, AssetAmount, BaseAmount};
use crate::asset::{Asset, ASSET_BTC, ASSET_ETH, RUNE_TICKER};
use crate::decimal::{format_fixed, trim_zeros};

/// BTC amounts at or below this many base units (satoshi) are rendered in
/// satoshi rather than BTC.
const SATOSHI_THRESHOLD: u64 = 1_000_000;

/// Display symbol for an asset's currency.
///
/// The fallback variant carries the raw ticker for assets without a
/// dedicated glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCurrencySymbol {
    /// `ᚱ`
    Rune,
    /// `₿`
    Btc,
    /// `⚡`
    Satoshi,
    /// `Ξ`
    Eth,
    /// `$`
    Usd,
    /// No dedicated glyph; the ticker itself is the symbol
    Ticker(String),
}

impl fmt::Display for AssetCurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetCurrencySymbol::Rune => write!(f, "ᚱ"),
            AssetCurrencySymbol::Btc => write!(f, "₿"),
            AssetCurrencySymbol::Satoshi => write!(f, "⚡"),
            AssetCurrencySymbol::Eth => write!(f, "Ξ"),
            AssetCurrencySymbol::Usd => write!(f, "$"),
            AssetCurrencySymbol::Ticker(ticker) => write!(f, "{ticker}"),
        }
    }
}

/// Resolve the display symbol for an asset.
///
/// Precedence, first match wins: RUNE ticker, BTC ticker, ETH ticker,
/// ticker containing `USD` (case-sensitive here), then the raw ticker as
/// fallback.
///
/// # Examples
///
/// ```
/// use chainunits::{currency_symbol_by_asset, AssetCurrencySymbol, ASSET_BTC};
///
/// assert_eq!(currency_symbol_by_asset(&ASSET_BTC), AssetCurrencySymbol::Btc);
/// ```
pub fn currency_symbol_by_asset(asset: &Asset) -> AssetCurrencySymbol {
    let ticker = asset.ticker.as_str();
    if ticker == RUNE_TICKER {
        AssetCurrencySymbol::Rune
    } else if ticker == ASSET_BTC.ticker {
        AssetCurrencySymbol::Btc
    } else if ticker == ASSET_ETH.ticker {
        AssetCurrencySymbol::Eth
    } else if ticker.contains("USD") {
        AssetCurrencySymbol::Usd
    } else {
        AssetCurrencySymbol::Ticker(ticker.to_string())
    }
}

/// Formatting flags for asset amounts.
///
/// `decimal` overrides the number of fractional digits shown (the amount's
/// own scale when `None`). `trim_zeros` strips trailing fractional zeros
/// after fixed-width formatting and wins over `decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Fractional digits to show; the amount's scale when `None`
    pub decimal: Option<u8>,
    /// Strip trailing fractional zeros after formatting
    pub trim_zeros: bool,
}

impl FormatOptions {
    /// Options with an explicit fractional digit count.
    pub fn with_decimal(decimal: u8) -> Self {
        Self {
            decimal: Some(decimal),
            trim_zeros: false,
        }
    }

    /// Options that trim trailing fractional zeros.
    pub fn trimmed() -> Self {
        Self {
            decimal: None,
            trim_zeros: true,
        }
    }
}

/// Format an asset amount as a plain decimal string.
///
/// # Examples
///
/// ```
/// use chainunits::{asset_amount_default, format_asset_amount, FormatOptions};
///
/// let amount = asset_amount_default("1.5");
/// assert_eq!(format_asset_amount(&amount, FormatOptions::default()), "1.50000000");
/// assert_eq!(format_asset_amount(&amount, FormatOptions::trimmed()), "1.5");
/// ```
pub fn format_asset_amount(amount: &AssetAmount, options: FormatOptions) -> String {
    let decimal = options.decimal.unwrap_or(amount.decimal());
    let formatted = format_fixed(amount.value(), decimal);
    if options.trim_zeros {
        trim_zeros(&formatted)
    } else {
        formatted
    }
}

/// Format a base amount as an integer string (base units have no
/// fractional digits).
pub fn format_base_amount(amount: &BaseAmount) -> String {
    format_fixed(amount.value(), 0)
}

/// Format an asset amount with its currency symbol.
///
/// Ticker resolution is case-insensitive and ordered; the first match
/// wins:
///
/// 1. no asset → `$ <amount>`
/// 2. RUNE (any variant) → `ᚱ <amount>`
/// 3. BTC → `⚡ <base units>` when the base equivalent is at most
///    1,000,000 satoshi, otherwise `₿ <amount>`
/// 4. ETH → `Ξ <amount>`
/// 5. ticker containing USD → `$ <amount>`
/// 6. anything else → `<amount> (<ticker>)`
///
/// # Examples
///
/// ```
/// use chainunits::{
///     asset_amount_default, format_asset_amount_currency, FormatOptions, ASSET_BTC,
/// };
///
/// let small = asset_amount_default("0.000005");
/// let formatted = format_asset_amount_currency(&small, Some(&ASSET_BTC), FormatOptions::default());
/// assert_eq!(formatted, "⚡ 500");
/// ```
pub fn format_asset_amount_currency(
    amount: &AssetAmount,
    asset: Option<&Asset>,
    options: FormatOptions,
) -> String {
    let formatted = format_asset_amount(amount, options);
    let ticker = asset.map_or("", |asset| asset.ticker.as_str());

    if ticker.is_empty() {
        return format!("{} {}", AssetCurrencySymbol::Usd, formatted);
    }

    let upper = ticker.to_ascii_uppercase();
    if upper.contains(RUNE_TICKER) {
        format!("{} {}", AssetCurrencySymbol::Rune, formatted)
    } else if upper.contains(&ASSET_BTC.ticker) {
        let base = asset_to_base(amount);
        if base.value() <= &BigDecimal::from(SATOSHI_THRESHOLD) {
            format!("{} {}", AssetCurrencySymbol::Satoshi, format_base_amount(&base))
        } else {
            format!("{} {}", AssetCurrencySymbol::Btc, formatted)
        }
    } else if upper.contains(&ASSET_ETH.ticker) {
        format!("{} {}", AssetCurrencySymbol::Eth, formatted)
    } else if upper.contains("USD") {
        format!("{} {}", AssetCurrencySymbol::Usd, formatted)
    } else {
        format!("{formatted} ({ticker})")
    }
}

/// Format a base amount as if it were in asset denomination.
///
/// Converts first, then applies the plain formatter, so `decimal` and
/// `trim_zeros` behave exactly as in [`format_asset_amount`].
pub fn format_base_as_asset_amount(amount: &BaseAmount, options: FormatOptions) -> String {
    format_asset_amount(&base_to_asset(amount), options)
}
