//! Test doubles for the farm's external collaborators.
//!
//! `TestToken` is a CEP-18 style token that reports failure by returning
//! `false` instead of reverting, plus a switch to force failures.
//! Allowance bookkeeping is omitted; the farm under test only acts on
//! the boolean transfer outcome. `TestPriceFeed` is an aggregator-style
//! feed with a settable answer.

use odra::prelude::*;
use odra::casper_types::U256;

use cspr_farm_contracts::types::PriceRound;

/// Minimal CEP-18 style token with open minting and a failure switch
#[odra::module]
pub struct TestToken {
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// When set, every transfer reports failure
    fail_transfers: Var<bool>,
}

#[odra::module]
impl TestToken {
    pub fn init(&mut self) {
        self.fail_transfers.set(false);
    }

    /// Credit an account (open to any caller)
    pub fn mint(&mut self, recipient: Address, amount: U256) {
        let balance = self.balances.get(&recipient).unwrap_or(U256::zero());
        self.balances.set(&recipient, balance + amount);
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Force every subsequent transfer to report failure
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers.set(fail);
    }

    /// Transfer from the caller to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.move_tokens(owner, recipient, amount)
    }

    /// Transfer between arbitrary accounts
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        self.move_tokens(owner, recipient, amount)
    }

    fn move_tokens(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get().unwrap_or(false) {
            return false;
        }

        let from_balance = self.balances.get(&owner).unwrap_or(U256::zero());
        if from_balance < amount {
            return false;
        }

        self.balances.set(&owner, from_balance - amount);
        let to_balance = self.balances.get(&recipient).unwrap_or(U256::zero());
        self.balances.set(&recipient, to_balance + amount);
        true
    }
}

/// Settable price feed reporting aggregator-style rounds
#[odra::module]
pub struct TestPriceFeed {
    /// Monotonic round identifier
    round_id: Var<u64>,
    /// Signed price answer
    answer: Var<i64>,
    /// Decimal precision of the answer
    decimals: Var<u8>,
    /// Timestamp of the latest report
    updated_at: Var<u64>,
}

#[odra::module]
impl TestPriceFeed {
    pub fn init(&mut self, answer: i64, decimals: u8) {
        self.round_id.set(1);
        self.answer.set(answer);
        self.decimals.set(decimals);
        self.updated_at.set(self.env().get_block_time());
    }

    /// Publish a new answer at the current block time
    pub fn set_answer(&mut self, answer: i64) {
        self.answer.set(answer);
        self.round_id.set(self.round_id.get().unwrap_or(0) + 1);
        self.updated_at.set(self.env().get_block_time());
    }

    /// Latest price report
    pub fn latest_round(&self) -> PriceRound {
        PriceRound {
            round_id: self.round_id.get().unwrap_or(0),
            answer: self.answer.get().unwrap_or(0),
            updated_at: self.updated_at.get().unwrap_or(0),
        }
    }

    /// Decimal precision of the answers
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(0)
    }
}
