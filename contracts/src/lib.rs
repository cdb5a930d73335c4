//! CSPR-Farm Contracts
//!
//! Multi-asset staking farm for Casper.
//!
//! ## Architecture
//!
//! - **Farm**: allowed-asset registry, price-feed bindings, per-participant
//!   stake ledger, valuation and proportional reward issuance
//! - **RewardToken**: CEP-18 style payout token with admin-gated minting
//!
//! Staking tokens and price feeds are external contracts, reached through
//! the `CallDef` wrappers in [`interfaces`]; any contract exposing the
//! expected entry points can back them.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod interfaces;

// Contract modules
pub mod farm;
pub mod reward_token;
