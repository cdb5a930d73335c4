//! Farm Contract
//!
//! Multi-asset staking farm with price-feed valuation and proportional
//! reward issuance.
//!
//! Key mechanics:
//! - Admin registers staking assets and binds a price feed per asset
//! - Participants stake any registered asset; balances are tracked per
//!   (participant, asset) together with a distinct-asset count
//! - Valuation converts each balance into a common unit via the bound
//!   feed: floor(balance * price / 10^decimals)
//! - A reward round pays every listed participant their current total
//!   valuation in the reward token
//!
//! Ordering rules:
//! - Staking pulls funds first; the ledger is only updated once the
//!   token confirms the transfer
//! - Unstaking applies effects before the outbound transfer; a reported
//!   failure reverts the call and rolls them back

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::FarmError;
use crate::interfaces::{Cep18Token, PriceFeed};
use crate::types::PriceData;

/// Default maximum accepted price-report age in seconds (1 hour)
const DEFAULT_MAX_PRICE_AGE_SECONDS: u64 = 3600;

/// Farm Contract
#[odra::module]
pub struct Farm {
    /// Administrator account
    admin: Var<Address>,
    /// Reward token address, fixed at init
    reward_token: Var<Address>,
    /// Registered staking assets in registration order
    allowed_assets: Mapping<u32, Address>,
    /// Number of registered assets
    allowed_asset_count: Var<u32>,
    /// Membership index over the registered assets
    allowed: Mapping<Address, bool>,
    /// Staked balance per (participant, asset)
    balances: Mapping<(Address, Address), U256>,
    /// Distinct assets currently staked per participant
    unique_assets: Mapping<Address, u32>,
    /// Total staked per asset across all participants
    total_staked: Mapping<Address, U256>,
    /// Participants in first-stake order
    participants: Mapping<u32, Address>,
    /// Number of listed participants
    participant_count: Var<u32>,
    /// Membership index over the participant list
    listed: Mapping<Address, bool>,
    /// Price feed binding per asset
    price_feeds: Mapping<Address, Address>,
    /// Maximum accepted price-report age in seconds
    max_price_age: Var<u64>,
    /// Single-flight latch for entry points that call token contracts
    entered: Var<bool>,
}

#[odra::module]
impl Farm {
    /// Initialize the farm. The deployer becomes administrator and the
    /// reward token is fixed for the lifetime of the contract.
    pub fn init(&mut self, reward_token: Address) {
        self.admin.set(self.env().caller());
        self.reward_token.set(reward_token);
        self.allowed_asset_count.set(0);
        self.participant_count.set(0);
        self.max_price_age.set(DEFAULT_MAX_PRICE_AGE_SECONDS);
        self.entered.set(false);
    }

    // ========== Asset Registry ==========

    /// Check if an asset is registered for staking
    pub fn is_asset_allowed(&self, asset: Address) -> bool {
        self.allowed.get(&asset).unwrap_or(false)
    }

    /// Register an asset for staking (admin only).
    ///
    /// Registering an already-registered asset is a no-op.
    pub fn add_allowed_asset(&mut self, asset: Address) {
        self.require_admin();

        if self.is_asset_allowed(asset) {
            return; // Already registered
        }

        let count = self.allowed_asset_count.get().unwrap_or(0);
        self.allowed_assets.set(&count, asset);
        self.allowed_asset_count.set(count + 1);
        self.allowed.set(&asset, true);
    }

    /// Number of registered assets
    pub fn get_allowed_asset_count(&self) -> u32 {
        self.allowed_asset_count.get().unwrap_or(0)
    }

    /// Registered asset at a registration-order index
    pub fn get_allowed_asset(&self, index: u32) -> Option<Address> {
        self.allowed_assets.get(&index)
    }

    // ========== Staking ==========

    /// Stake an amount of a registered asset. The caller must have
    /// approved the farm on the asset token beforehand.
    pub fn stake(&mut self, amount: U256, asset: Address) {
        self.enter();

        if amount.is_zero() {
            self.env().revert(FarmError::InvalidAmount);
        }
        if !self.is_asset_allowed(asset) {
            self.env().revert(FarmError::AssetNotAllowed);
        }

        let staker = self.env().caller();
        let farm = self.env().self_address();

        // Funds move first; the ledger is only updated once the token
        // confirms the pull.
        if !Cep18Token::transfer_from(&self.env(), asset, staker, farm, amount) {
            self.env().revert(FarmError::TransferFailed);
        }

        let balance = self.balances.get(&(staker, asset)).unwrap_or(U256::zero());
        if balance.is_zero() {
            let unique = self.unique_assets.get(&staker).unwrap_or(0);
            self.unique_assets.set(&staker, unique + 1);

            // First asset ever staked: list the participant, at most once
            if unique == 0 && !self.listed.get(&staker).unwrap_or(false) {
                let count = self.participant_count.get().unwrap_or(0);
                self.participants.set(&count, staker);
                self.participant_count.set(count + 1);
                self.listed.set(&staker, true);
            }
        }
        self.balances.set(&(staker, asset), balance + amount);

        let total = self.total_staked.get(&asset).unwrap_or(U256::zero());
        self.total_staked.set(&asset, total + amount);

        self.leave();
    }

    /// Withdraw the caller's full balance of an asset. Partial
    /// withdrawal is not supported.
    pub fn unstake(&mut self, asset: Address) {
        self.enter();

        let staker = self.env().caller();
        let balance = self.balances.get(&(staker, asset)).unwrap_or(U256::zero());
        if balance.is_zero() {
            self.env().revert(FarmError::NoStake);
        }

        // Effects before the outbound transfer; a reported failure
        // reverts the call and rolls them back.
        self.balances.set(&(staker, asset), U256::zero());

        let unique = self.unique_assets.get(&staker).unwrap_or(0);
        if unique > 0 {
            self.unique_assets.set(&staker, unique - 1);
        }

        let total = self.total_staked.get(&asset).unwrap_or(U256::zero());
        if balance <= total {
            self.total_staked.set(&asset, total - balance);
        } else {
            self.total_staked.set(&asset, U256::zero());
        }

        if !Cep18Token::transfer(&self.env(), asset, staker, balance) {
            self.env().revert(FarmError::TransferFailed);
        }

        self.leave();
    }

    /// Staked balance of a participant for an asset
    pub fn staked_balance(&self, participant: Address, asset: Address) -> U256 {
        self.balances.get(&(participant, asset)).unwrap_or(U256::zero())
    }

    /// Number of distinct assets a participant currently has staked
    pub fn unique_assets_staked(&self, participant: Address) -> u32 {
        self.unique_assets.get(&participant).unwrap_or(0)
    }

    /// Total staked across all participants for an asset
    pub fn get_total_staked(&self, asset: Address) -> U256 {
        self.total_staked.get(&asset).unwrap_or(U256::zero())
    }

    /// Number of listed participants
    pub fn get_participant_count(&self) -> u32 {
        self.participant_count.get().unwrap_or(0)
    }

    /// Participant at a first-stake-order index
    pub fn get_participant(&self, index: u32) -> Option<Address> {
        self.participants.get(&index)
    }

    // ========== Valuation ==========

    /// Total value of a participant's holdings across all registered
    /// assets, summed in registration order.
    pub fn get_participant_total_value(&self, participant: Address) -> U256 {
        if self.unique_assets_staked(participant) == 0 {
            self.env().revert(FarmError::NoStake);
        }

        let mut total = U256::zero();
        let count = self.allowed_asset_count.get().unwrap_or(0);
        for index in 0..count {
            let asset = match self.allowed_assets.get(&index) {
                Some(asset) => asset,
                None => continue,
            };
            total = total + self.get_participant_single_asset_value(participant, asset);
        }
        total
    }

    /// Value of a participant's holding of a single asset. Returns zero
    /// without error for a participant with nothing staked, so the
    /// total-value loop never trips over untouched assets.
    pub fn get_participant_single_asset_value(
        &self,
        participant: Address,
        asset: Address,
    ) -> U256 {
        if self.unique_assets_staked(participant) == 0 {
            return U256::zero();
        }

        let price_data = self.get_asset_value(asset);
        let balance = self.staked_balance(participant, asset);

        // Truncating division; the bounded rounding loss is accepted
        balance * price_data.price / U256::from(10u64).pow(U256::from(price_data.decimals))
    }

    // ========== Price Oracle Bindings ==========

    /// Current price and decimal precision for an asset, read from its
    /// bound feed.
    pub fn get_asset_value(&self, asset: Address) -> PriceData {
        let feed = match self.price_feeds.get(&asset) {
            Some(feed) => feed,
            None => {
                self.env().revert(FarmError::OracleUnbound);
            }
        };

        let round = PriceFeed::latest_round(&self.env(), feed);
        let decimals = PriceFeed::decimals(&self.env(), feed);

        // Feeds report signed answers; a negative price must never be
        // folded into an unsigned amount.
        if round.answer < 0 {
            self.env().revert(FarmError::OracleQueryFailed);
        }

        let age = self.env().get_block_time().saturating_sub(round.updated_at);
        let max_age = self.max_price_age.get().unwrap_or(DEFAULT_MAX_PRICE_AGE_SECONDS);
        if age > max_age {
            self.env().revert(FarmError::OracleQueryFailed);
        }

        PriceData {
            price: U256::from(round.answer as u64),
            decimals,
        }
    }

    /// Bind or replace the price feed for an asset (admin only)
    pub fn set_price_feed(&mut self, asset: Address, feed: Address) {
        self.require_admin();
        self.price_feeds.set(&asset, feed);
    }

    /// Feed bound to an asset
    pub fn get_price_feed(&self, asset: Address) -> Option<Address> {
        self.price_feeds.get(&asset)
    }

    /// Set the maximum accepted price-report age in seconds (admin only)
    pub fn set_max_price_age(&mut self, seconds: u64) {
        self.require_admin();
        self.max_price_age.set(seconds);
    }

    /// Maximum accepted price-report age in seconds
    pub fn get_max_price_age(&self) -> u64 {
        self.max_price_age.get().unwrap_or(DEFAULT_MAX_PRICE_AGE_SECONDS)
    }

    // ========== Reward Issuance ==========

    /// Pay every listed participant a reward equal to their current
    /// total valuation, in the reward token (admin only).
    ///
    /// Fully withdrawn participants stay listed and earn nothing. Any
    /// reported transfer failure aborts the whole round, so a payout
    /// round is all-or-nothing.
    pub fn issue_rewards(&mut self) {
        self.require_admin();
        self.enter();

        let reward_token = match self.reward_token.get() {
            Some(token) => token,
            None => {
                self.env().revert(FarmError::InvalidConfig);
            }
        };

        let count = self.participant_count.get().unwrap_or(0);
        for index in 0..count {
            let participant = match self.participants.get(&index) {
                Some(participant) => participant,
                None => continue,
            };
            if self.unique_assets_staked(participant) == 0 {
                continue;
            }

            let value = self.get_participant_total_value(participant);
            if value.is_zero() {
                continue;
            }

            if !Cep18Token::transfer(&self.env(), reward_token, participant, value) {
                self.env().revert(FarmError::TransferFailed);
            }
        }

        self.leave();
    }

    // ========== Admin Functions ==========

    /// Check if an account is the administrator
    pub fn is_admin(&self, caller: Address) -> bool {
        self.admin.get().map_or(false, |admin| admin == caller)
    }

    /// Administrator account
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    /// Transfer administration to a new account (admin only)
    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.require_admin();
        self.admin.set(new_admin);
    }

    /// Reward token address
    pub fn get_reward_token(&self) -> Option<Address> {
        self.reward_token.get()
    }

    // ========== Internal Functions ==========

    fn require_admin(&self) {
        let caller = self.env().caller();
        if !self.is_admin(caller) {
            self.env().revert(FarmError::Unauthorized);
        }
    }

    fn enter(&mut self) {
        if self.entered.get().unwrap_or(false) {
            self.env().revert(FarmError::ReentrantCall);
        }
        self.entered.set(true);
    }

    fn leave(&mut self) {
        self.entered.set(false);
    }
}
