// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the chainunits library.
//!
//! Amount construction is total (malformed numeric input coerces to zero),
//! so the only fallible surface is asset identifier parsing.

/// Errors from parsing a `CHAIN.SYMBOL` asset identifier.
///
/// Returned by the [`FromStr`](std::str::FromStr) impl on
/// [`Asset`](crate::Asset) and by [`Asset::parse_with`](crate::Asset::parse_with).
/// The permissive helpers ([`asset_from_string`](crate::asset_from_string))
/// collapse these to `None`.
///
/// # Examples
///
/// ```
/// use chainunits::{Asset, ParseAssetError};
///
/// let err = "DOGE.DOGE".parse::<Asset>().unwrap_err();
/// assert_eq!(err, ParseAssetError::UnknownChain { chain: "DOGE".to_string() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAssetError {
    /// The identifier contains no `.` separating chain from symbol.
    #[error("Asset identifier is missing the `.` delimiter")]
    MissingDelimiter,

    /// The segment before the `.` is empty.
    #[error("Asset identifier has an empty chain segment")]
    EmptyChain,

    /// The segment after the `.` is empty.
    #[error("Asset identifier has an empty symbol segment")]
    EmptySymbol,

    /// The chain segment is not a recognized chain identifier.
    #[error("Unknown chain `{chain}` in asset identifier")]
    UnknownChain {
        /// The rejected chain segment
        chain: String,
    },
}
