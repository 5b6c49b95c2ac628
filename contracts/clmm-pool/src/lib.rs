#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
mod events;
mod invariants;
mod liquidity;
mod position;
mod settlement;
mod storage;
mod swap;
mod tick;

#[cfg(test)]
mod testutils;

pub use error::PoolError;

use clmm_types::{max_liquidity_per_tick, PoolConfig, PoolState, PositionInfo, PositionKey, TickInfo};
use invariants::{price_in_bounds, tick_matches_price};
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, U256};
use storage::{get_config, get_state, get_tick, is_initialized, set_config, set_state};

#[contract]
pub struct ClmmPool;

#[contractimpl]
impl ClmmPool {
    /// Initialize a new pool
    ///
    /// `tick` must be the tick of `sqrt_price_x96`, i.e. the greatest tick
    /// whose sqrt ratio is at or below the price.
    ///
    /// No caller auth is required. The deployer must call this in the same
    /// transaction that creates the pool, otherwise anyone can claim it first.
    pub fn initialize(
        env: Env,
        token0: Address,
        token1: Address,
        tick_spacing: i32,
        sqrt_price_x96: U256,
        tick: i32,
    ) -> Result<(), PoolError> {
        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token0 >= token1 {
            return Err(PoolError::InvalidTokenOrder);
        }
        if tick_spacing <= 0 {
            return Err(PoolError::InvalidTickSpacing);
        }
        if !price_in_bounds(&env, &sqrt_price_x96) {
            return Err(PoolError::InvalidPrice);
        }
        if !tick_matches_price(&env, tick, &sqrt_price_x96) {
            return Err(PoolError::PriceTickMismatch);
        }

        let config = PoolConfig {
            token0,
            token1,
            tick_spacing,
            max_liquidity_per_tick: max_liquidity_per_tick(tick_spacing),
        };
        set_config(&env, &config);
        set_state(&env, &PoolState::new(sqrt_price_x96, tick));

        log!(&env, "initialize", tick_spacing, tick);
        Ok(())
    }

    /// Add liquidity to `owner`'s position over `[tick_lower, tick_upper)`
    ///
    /// `sender` is called back with `on_mint_settle` and must transfer the
    /// owed amounts to the pool before returning.
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts deposited
    pub fn mint(
        env: Env,
        sender: Address,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: u128,
        data: Bytes,
    ) -> Result<(u128, u128), PoolError> {
        sender.require_auth();
        liquidity::mint(&env, &sender, &owner, tick_lower, tick_upper, amount, &data)
    }

    /// Execute a swap
    ///
    /// # Arguments
    /// * `sender` - Contract called back with `on_swap_settle` to pay the input
    /// * `recipient` - Address to receive output tokens
    /// * `zero_for_one` - True if swapping token0 for token1
    /// * `amount_specified` - Positive for exact input, negative for exact output
    /// * `sqrt_price_limit_x96` - Price limit for the swap, zero for none
    ///
    /// # Returns
    /// (amount0, amount1) - Negative values are amounts paid out
    pub fn swap(
        env: Env,
        sender: Address,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x96: U256,
        data: Bytes,
    ) -> Result<(i128, i128), PoolError> {
        sender.require_auth();
        swap::execute_swap(
            &env,
            &sender,
            &recipient,
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x96,
            &data,
        )
    }

    // === View Functions ===

    /// Price, tick and active liquidity
    pub fn get_state(env: Env) -> PoolState {
        get_state(&env)
    }

    pub fn get_config(env: Env) -> PoolConfig {
        get_config(&env)
    }

    /// Get tick info (zero record if absent)
    pub fn get_tick(env: Env, tick: i32) -> TickInfo {
        get_tick(&env, tick)
    }

    /// Get position info (zero record if absent)
    pub fn get_position(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> PositionInfo {
        let key = PositionKey::new(owner, tick_lower, tick_upper);
        position::get_or_create(&env, &key)
    }

    // Single-field shortcuts

    pub fn sqrt_price_x96(env: Env) -> U256 {
        get_state(&env).sqrt_price_x96
    }

    pub fn tick(env: Env) -> i32 {
        get_state(&env).tick
    }

    pub fn liquidity(env: Env) -> u128 {
        get_state(&env).liquidity
    }

    pub fn token0(env: Env) -> Address {
        get_config(&env).token0
    }

    pub fn token1(env: Env) -> Address {
        get_config(&env).token1
    }

    pub fn tick_spacing(env: Env) -> i32 {
        get_config(&env).tick_spacing
    }
}
