//! Fixed-point monetary value model for blockchain assets.
//!
//! Quantities exist in two denominations (human-readable asset units and
//! integral on-chain base units) with lossless conversion at the asset's
//! decimal scale, a `CHAIN.SYMBOL` identifier codec, and currency-aware
//! display formatting.

mod amount;
mod asset;
mod chain;
mod decimal;
mod errors;
mod format;

pub use amount::*;
pub use asset::*;
pub use chain::*;
pub use decimal::*;
pub use errors::*;
pub use format::*;
