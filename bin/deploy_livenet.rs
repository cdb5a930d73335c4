//! Deploy the farm to Casper livenet/testnet using the Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::host::Deployer;
use odra::prelude::*;

use cspr_farm_contracts::farm::{Farm, FarmInitArgs};
use cspr_farm_contracts::reward_token::{RewardToken, RewardTokenInitArgs};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== CSPR-Farm Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Reward Token ====================
    println!("=== Phase 1: Deploying RewardToken ===");
    println!();

    let reward_token = RewardToken::deploy(
        &env,
        RewardTokenInitArgs {
            name: String::from("Farm Reward"),
            symbol: String::from("FRW"),
            decimals: 9,
        },
    );
    let reward_token_addr = reward_token.address().clone();
    println!("RewardToken deployed at: {:?}", reward_token_addr);
    println!();

    // ==================== Phase 2: Farm ====================
    println!("=== Phase 2: Deploying Farm ===");
    println!();

    let farm = Farm::deploy(
        &env,
        FarmInitArgs {
            reward_token: reward_token_addr,
        },
    );
    println!("Farm deployed at: {:?}", farm.address().clone());
    println!();

    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  RewardToken: {:?}", reward_token_addr);
    println!("  Farm:        {:?}", farm.address().clone());
    println!();
    println!("Next steps: register staking assets with add_allowed_asset and");
    println!("bind their price feeds with set_price_feed.");
}
