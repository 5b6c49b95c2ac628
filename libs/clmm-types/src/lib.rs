#![no_std]

mod callback;
mod pool;
mod position;
mod tick;

pub use callback::*;
pub use pool::*;
pub use position::*;
pub use tick::*;

use soroban_sdk::{Env, U256};

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index, price ~ 2^-128
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index, price ~ 2^128
pub const MAX_TICK: i32 = 887272;

/// Minimum sqrt price (at MIN_TICK) as Q64.96
pub const MIN_SQRT_RATIO: u128 = 4295128739;

/// Upper 128 bits of the maximum sqrt price (at MAX_TICK)
pub const MAX_SQRT_RATIO_HI: u128 = 0xfffd8963;

/// Lower 128 bits of the maximum sqrt price (at MAX_TICK)
pub const MAX_SQRT_RATIO_LO: u128 = 0xefd1fc6a506488495d951d5263988d26;

/// Minimum sqrt price as a U256
pub fn min_sqrt_ratio(env: &Env) -> U256 {
    U256::from_u128(env, MIN_SQRT_RATIO)
}

/// Maximum sqrt price (1461446703485210103287273052203988822378723970342).
/// Needs 160 bits, so it is assembled from two u128 halves.
pub fn max_sqrt_ratio(env: &Env) -> U256 {
    let two_pow_64 = U256::from_u128(env, 1u128 << 64);
    let q128 = two_pow_64.mul(&two_pow_64);
    U256::from_u128(env, MAX_SQRT_RATIO_HI)
        .mul(&q128)
        .add(&U256::from_u128(env, MAX_SQRT_RATIO_LO))
}

/// Calculate maximum liquidity per tick for a given tick spacing
pub fn max_liquidity_per_tick(tick_spacing: i32) -> u128 {
    let min_tick = (MIN_TICK / tick_spacing) * tick_spacing;
    let max_tick = (MAX_TICK / tick_spacing) * tick_spacing;
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;
    u128::MAX / num_ticks
}
