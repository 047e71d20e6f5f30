// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset records and the `CHAIN.SYMBOL` identifier codec

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::chain::{is_chain, BNB_CHAIN, BTC_CHAIN, ETH_CHAIN, THOR_CHAIN};
use crate::errors::ParseAssetError;

/// An asset on a supported chain.
///
/// Identified textually as `CHAIN.SYMBOL`, where `SYMBOL` is
/// `TICKER` or `TICKER-SUFFIX`:
///
/// - `chain`: the chain the asset lives on (e.g. `BNB`)
/// - `symbol`: the on-chain unique identifier (e.g. `RUNE-B1A`)
/// - `ticker`: the display name, the part of `symbol` before the first `-`
///   (equal to `symbol` when there is no suffix)
///
/// `ticker` is derived from `symbol`, not independently persisted:
/// serializing an asset only writes `chain` and `symbol`.
///
/// # Examples
///
/// ```
/// use chainunits::Asset;
///
/// let asset: Asset = "BNB.RUNE-B1A".parse().unwrap();
/// assert_eq!(asset.chain, "BNB");
/// assert_eq!(asset.ticker, "RUNE");
/// assert_eq!(asset.symbol, "RUNE-B1A");
/// assert_eq!(asset.to_string(), "BNB.RUNE-B1A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Chain the asset lives on
    pub chain: String,
    /// On-chain unique identifier
    pub symbol: String,
    /// Display name, derived from `symbol`
    pub ticker: String,
}

impl Asset {
    /// Parse an identifier with an injected chain-validity predicate.
    ///
    /// Splits on the first `.`: the left segment is the chain, the
    /// remainder is the symbol. The ticker is the symbol up to the first
    /// `-`. Rejects identifiers with no `.`, an empty chain or symbol
    /// segment, or a chain the predicate does not accept.
    pub fn parse_with<F>(s: &str, is_chain: F) -> Result<Self, ParseAssetError>
    where
        F: Fn(&str) -> bool,
    {
        let (chain, symbol) = s.split_once('.').ok_or(ParseAssetError::MissingDelimiter)?;
        if symbol.is_empty() {
            return Err(ParseAssetError::EmptySymbol);
        }
        if chain.is_empty() {
            return Err(ParseAssetError::EmptyChain);
        }
        if !is_chain(chain) {
            return Err(ParseAssetError::UnknownChain {
                chain: chain.to_string(),
            });
        }

        let ticker = symbol.split_once('-').map_or(symbol, |(ticker, _)| ticker);

        Ok(Asset {
            chain: chain.to_string(),
            symbol: symbol.to_string(),
            ticker: ticker.to_string(),
        })
    }

    /// Check that `chain`, `ticker` and `symbol` are all non-empty.
    ///
    /// Parsed assets always satisfy this; hand-built records may not.
    pub fn is_valid(&self) -> bool {
        !self.chain.is_empty() && !self.ticker.is_empty() && !self.symbol.is_empty()
    }
}

impl FromStr for Asset {
    type Err = ParseAssetError;

    /// Parse against the built-in chain registry
    /// ([`is_chain`](crate::is_chain)).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Asset::parse_with(s, is_chain)
    }
}

impl fmt::Display for Asset {
    /// Render as `CHAIN.SYMBOL`.
    ///
    /// Round-trip note: `parse(s).to_string() == s` whenever parse
    /// succeeds, but a hand-built asset whose `ticker` is not the
    /// before-`-` prefix of `symbol` will not survive a parse round-trip,
    /// since only `chain` and `symbol` are written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chain, self.symbol)
    }
}

/// Parse a `CHAIN.SYMBOL` identifier, `None` on any malformed input.
///
/// # Examples
///
/// ```
/// use chainunits::asset_from_string;
///
/// assert!(asset_from_string("BTC.BTC").is_some());
/// assert!(asset_from_string("BTC").is_none());
/// assert!(asset_from_string("BTC.").is_none());
/// ```
pub fn asset_from_string(s: &str) -> Option<Asset> {
    s.parse().ok()
}

/// Parse a `CHAIN.SYMBOL` identifier with an injected chain-validity
/// predicate, `None` on any malformed input.
pub fn asset_from_string_with<F>(s: &str, is_chain: F) -> Option<Asset>
where
    F: Fn(&str) -> bool,
{
    Asset::parse_with(s, is_chain).ok()
}

/// Render an asset as its `CHAIN.SYMBOL` identifier.
pub fn asset_to_string(asset: &Asset) -> String {
    asset.to_string()
}

/// Check that all asset fields are non-empty.
pub fn is_valid_asset(asset: &Asset) -> bool {
    asset.is_valid()
}

fn static_asset(chain: &str, symbol: &str, ticker: &str) -> Asset {
    Asset {
        chain: chain.to_string(),
        symbol: symbol.to_string(),
        ticker: ticker.to_string(),
    }
}

/// Ticker shared by all RUNE variants
pub const RUNE_TICKER: &str = "RUNE";

/// BNB coin on Binance Chain
pub static ASSET_BNB: LazyLock<Asset> = LazyLock::new(|| static_asset(BNB_CHAIN, "BNB", "BNB"));

/// Bitcoin
pub static ASSET_BTC: LazyLock<Asset> = LazyLock::new(|| static_asset(BTC_CHAIN, "BTC", "BTC"));

/// Ether
pub static ASSET_ETH: LazyLock<Asset> = LazyLock::new(|| static_asset(ETH_CHAIN, "ETH", "ETH"));

/// RUNE on Binance test net
pub static ASSET_RUNE_67C: LazyLock<Asset> =
    LazyLock::new(|| static_asset(BNB_CHAIN, "RUNE-67C", RUNE_TICKER));

/// RUNE on Binance main net
pub static ASSET_RUNE_B1A: LazyLock<Asset> =
    LazyLock::new(|| static_asset(BNB_CHAIN, "RUNE-B1A", RUNE_TICKER));

/// Native RUNE on THORChain
pub static ASSET_RUNE_NATIVE: LazyLock<Asset> =
    LazyLock::new(|| static_asset(THOR_CHAIN, RUNE_TICKER, RUNE_TICKER));
