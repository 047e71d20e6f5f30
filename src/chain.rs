// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known chain identifiers
//!
//! Centralizes the chain tags used in asset identifiers. The registry is
//! process-wide, immutable static data; callers needing a different set of
//! chains can inject their own predicate via
//! [`asset_from_string_with`](crate::asset_from_string_with).

/// Binance Chain
pub const BNB_CHAIN: &str = "BNB";

/// Bitcoin
pub const BTC_CHAIN: &str = "BTC";

/// Ethereum
pub const ETH_CHAIN: &str = "ETH";

/// THORChain
pub const THOR_CHAIN: &str = "THOR";

/// Cosmos Hub
pub const COSMOS_CHAIN: &str = "GAIA";

/// Polkadot
pub const POLKADOT_CHAIN: &str = "POLKA";

/// Bitcoin Cash
pub const BCH_CHAIN: &str = "BCH";

/// Litecoin
pub const LTC_CHAIN: &str = "LTC";

/// All supported chain identifiers.
pub const CHAINS: [&str; 8] = [
    BNB_CHAIN,
    BTC_CHAIN,
    ETH_CHAIN,
    THOR_CHAIN,
    COSMOS_CHAIN,
    POLKADOT_CHAIN,
    BCH_CHAIN,
    LTC_CHAIN,
];

/// Check whether a string is a supported chain identifier.
///
/// Matching is exact and case-sensitive: chain tags are upper-case by
/// convention and `"btc"` is not a known chain.
///
/// # Examples
///
/// ```
/// use chainunits::is_chain;
///
/// assert!(is_chain("BTC"));
/// assert!(!is_chain("btc"));
/// assert!(!is_chain("DOGE"));
/// ```
pub fn is_chain(chain: &str) -> bool {
    CHAINS.contains(&chain)
}
