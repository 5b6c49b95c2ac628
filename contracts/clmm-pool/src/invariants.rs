// ============================================================================
// INVARIANTS
// ============================================================================
//
// Predicates over pool state used to validate inputs on entry and to
// assert properties of computed results (debug builds and tests).
//
// 1. PRICE INVARIANTS
//    - Price is always within [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
//    - Tick is the greatest tick whose sqrt ratio is <= the price
//
// 2. RANGE INVARIANTS
//    - tick_lower < tick_upper, both in bounds and on the tick spacing
//    - A range is active iff tick_lower <= tick < tick_upper
//
// 3. SWAP INVARIANTS
//    - Price moves only in the trade direction and never past the limit
//    - Amounts have opposite signs
//    - Tick crossings are bounded
//
// ============================================================================

use clmm_math::get_tick_at_sqrt_ratio;
use clmm_types::{max_sqrt_ratio, min_sqrt_ratio, MAX_TICK, MIN_TICK};
use soroban_sdk::{Env, U256};

// ============================================================================
// PRICE INVARIANTS
// ============================================================================

/// Property:
///   MIN_SQRT_RATIO <= sqrt_price_x96 < MAX_SQRT_RATIO
pub fn price_in_bounds(env: &Env, sqrt_price_x96: &U256) -> bool {
    *sqrt_price_x96 >= min_sqrt_ratio(env) && *sqrt_price_x96 < max_sqrt_ratio(env)
}

/// Property:
///   tick == get_tick_at_sqrt_ratio(sqrt_price_x96)
///
/// The price must already be in bounds.
pub fn tick_matches_price(env: &Env, tick: i32, sqrt_price_x96: &U256) -> bool {
    get_tick_at_sqrt_ratio(env, sqrt_price_x96) == tick
}

// ============================================================================
// RANGE INVARIANTS
// ============================================================================

pub fn tick_range_valid(tick_lower: i32, tick_upper: i32) -> bool {
    tick_lower < tick_upper
}

pub fn tick_range_in_bounds(tick_lower: i32, tick_upper: i32) -> bool {
    tick_lower >= MIN_TICK && tick_upper <= MAX_TICK
}

pub fn tick_on_spacing(tick: i32, tick_spacing: i32) -> bool {
    tick % tick_spacing == 0
}

/// Liquidity of a range counts toward the active liquidity
///
/// Property:
///   tick_lower <= tick < tick_upper
pub fn range_contains_tick(tick_lower: i32, tick_upper: i32, tick: i32) -> bool {
    tick_lower <= tick && tick < tick_upper
}

/// Property:
///   tick.liquidity_gross <= config.max_liquidity_per_tick
pub fn tick_liquidity_bounded(tick_liquidity_gross: u128, max_liquidity_per_tick: u128) -> bool {
    tick_liquidity_gross <= max_liquidity_per_tick
}

// ============================================================================
// SWAP INVARIANTS
// ============================================================================

/// A price limit must sit strictly between the current price and the
/// extreme bound in the trade direction
pub fn price_limit_valid(
    env: &Env,
    zero_for_one: bool,
    sqrt_price_x96: &U256,
    sqrt_price_limit_x96: &U256,
) -> bool {
    if zero_for_one {
        sqrt_price_limit_x96 < sqrt_price_x96 && *sqrt_price_limit_x96 > min_sqrt_ratio(env)
    } else {
        sqrt_price_limit_x96 > sqrt_price_x96 && *sqrt_price_limit_x96 < max_sqrt_ratio(env)
    }
}

/// Property:
///   - zero_for_one => price does not increase
///   - !zero_for_one => price does not decrease
pub fn swap_direction_consistent(
    zero_for_one: bool,
    sqrt_price_before: &U256,
    sqrt_price_after: &U256,
) -> bool {
    if zero_for_one {
        sqrt_price_after <= sqrt_price_before
    } else {
        sqrt_price_after >= sqrt_price_before
    }
}

/// Property:
///   - zero_for_one => sqrt_price_after >= sqrt_price_limit
///   - !zero_for_one => sqrt_price_after <= sqrt_price_limit
pub fn swap_respects_limit(
    zero_for_one: bool,
    sqrt_price_after: &U256,
    sqrt_price_limit: &U256,
) -> bool {
    if zero_for_one {
        sqrt_price_after >= sqrt_price_limit
    } else {
        sqrt_price_after <= sqrt_price_limit
    }
}

/// One side paid in, the other paid out (either may be zero)
pub fn swap_amounts_opposite_signs(amount0: i128, amount1: i128) -> bool {
    (amount0 >= 0 && amount1 <= 0) || (amount0 <= 0 && amount1 >= 0)
}

pub fn tick_crossings_bounded(ticks_crossed: u32, max_crossings: u32) -> bool {
    ticks_crossed <= max_crossings
}

// ============================================================================
// TESTS
// ============================================================================
