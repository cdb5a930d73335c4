//! Farm error definitions.

use odra::prelude::*;

/// Farm errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FarmError {
    // Staking errors (1xx)
    InvalidAmount = 100,
    NoStake = 101,

    // Registry errors (2xx)
    AssetNotAllowed = 200,

    // Oracle errors (3xx)
    OracleUnbound = 300,
    OracleQueryFailed = 301,

    // Access control errors (4xx)
    Unauthorized = 400,

    // Token errors (5xx)
    TransferFailed = 500,
    InsufficientBalance = 501,

    // Guard errors (6xx)
    ReentrantCall = 600,

    // Configuration errors (9xx)
    InvalidConfig = 900,
}

impl FarmError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Staking
            FarmError::InvalidAmount => "Stake amount must be positive",
            FarmError::NoStake => "Nothing staked",

            // Registry
            FarmError::AssetNotAllowed => "Asset not registered for staking",

            // Oracle
            FarmError::OracleUnbound => "No price feed bound for asset",
            FarmError::OracleQueryFailed => "Price feed returned unusable data",

            // Access control
            FarmError::Unauthorized => "Unauthorized: caller is not admin",

            // Token
            FarmError::TransferFailed => "Token transfer failed",
            FarmError::InsufficientBalance => "Insufficient token balance",

            // Guards
            FarmError::ReentrantCall => "Reentrant call rejected",

            // Configuration
            FarmError::InvalidConfig => "Invalid configuration parameter",
        }
    }
}

impl core::fmt::Display for FarmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<FarmError> for OdraError {
    fn from(error: FarmError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
