//! Cross-contract interfaces for the farm's external collaborators.
//!
//! Both capabilities are reached through `CallDef` calls so that any
//! contract exposing the expected entry points can back them.

use odra::prelude::*;
use odra::casper_types::{runtime_args, RuntimeArgs, U256};
use odra::CallDef;

use crate::types::PriceRound;

/// CEP-18 style token entry points used by the farm.
///
/// Transfers report success as a bool; a `false` return means the token
/// refused the movement without reverting.
pub struct Cep18Token;

impl Cep18Token {
    /// Pull `amount` of `token` from `owner` to `recipient`
    pub fn transfer_from(
        env: &odra::ContractEnv,
        token: Address,
        owner: Address,
        recipient: Address,
        amount: U256,
    ) -> bool {
        let args = runtime_args! {
            "owner" => owner,
            "recipient" => recipient,
            "amount" => amount
        };
        env.call_contract(token, CallDef::new("transfer_from", true, args))
    }

    /// Send `amount` of `token` from the calling contract to `recipient`
    pub fn transfer(
        env: &odra::ContractEnv,
        token: Address,
        recipient: Address,
        amount: U256,
    ) -> bool {
        let args = runtime_args! {
            "recipient" => recipient,
            "amount" => amount
        };
        env.call_contract(token, CallDef::new("transfer", true, args))
    }
}

/// Price feed entry points used by the farm's oracle bindings.
pub struct PriceFeed;

impl PriceFeed {
    /// Latest price report from `feed`
    pub fn latest_round(env: &odra::ContractEnv, feed: Address) -> PriceRound {
        env.call_contract(feed, CallDef::new("latest_round", false, RuntimeArgs::new()))
    }

    /// Decimal precision of the answers reported by `feed`
    pub fn decimals(env: &odra::ContractEnv, feed: Address) -> u8 {
        env.call_contract(feed, CallDef::new("decimals", false, RuntimeArgs::new()))
    }
}
