//! Common types used across the farm.

use odra::prelude::*;
use odra::casper_types::U256;

/// Latest report from a price feed contract
#[odra::odra_type]
pub struct PriceRound {
    /// Monotonic round identifier
    pub round_id: u64,
    /// Signed price answer in the feed's own precision
    pub answer: i64,
    /// Timestamp of the report in seconds
    pub updated_at: u64,
}

/// Normalized price for an asset
#[odra::odra_type]
pub struct PriceData {
    /// Non-negative price value
    pub price: U256,
    /// Decimal places for price
    pub decimals: u8,
}
