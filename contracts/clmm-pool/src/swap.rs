use crate::error::PoolError;
use crate::events::publish_swap;
use crate::invariants::{
    price_limit_valid, swap_amounts_opposite_signs, swap_direction_consistent,
    swap_respects_limit, tick_crossings_bounded,
};
use crate::settlement::{settle_swap, to_i128};
use crate::storage::{get_config, get_state, set_state, MAX_TICK_CROSSINGS_PER_SWAP};
use crate::tick::{cross, next_initialized_tick_within_one_word};
use clmm_math::{
    add_delta, compute_swap_step, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, is_zero, u256,
};
use clmm_types::{
    max_sqrt_ratio, PoolConfig, PoolState, SwapComputation, SwapParams, MAX_TICK, MIN_SQRT_RATIO,
    MIN_TICK,
};
use soroban_sdk::{log, Address, Bytes, Env, U256};

/// Execute a swap
///
/// The whole trade is computed against current storage without writing it.
/// The output is sent to `recipient`, `sender` settles the input through its
/// callback, and only after the pool's balance is confirmed is the new price
/// state written.
///
/// Note: This function limits the number of tick crossings per swap to stay
/// within Soroban's read entry limit. If a swap would require more tick
/// crossings, it is partially filled and the remaining amount can be swapped
/// in a subsequent transaction.
pub fn execute_swap(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    zero_for_one: bool,
    amount_specified: i128,
    sqrt_price_limit_x96: U256,
    data: &Bytes,
) -> Result<(i128, i128), PoolError> {
    if amount_specified == 0 {
        return Err(PoolError::ZeroAmount);
    }

    let config = get_config(env);
    let mut state = get_state(env);

    // Zero selects the extreme limit for the direction
    let sqrt_price_limit_x96 = if is_zero(&sqrt_price_limit_x96) {
        if zero_for_one {
            u256(env, MIN_SQRT_RATIO + 1)
        } else {
            max_sqrt_ratio(env).sub(&u256(env, 1))
        }
    } else {
        sqrt_price_limit_x96
    };

    if !price_limit_valid(env, zero_for_one, &state.sqrt_price_x96, &sqrt_price_limit_x96) {
        return Err(PoolError::InvalidPriceLimit);
    }

    let params = SwapParams {
        zero_for_one,
        amount_specified,
        sqrt_price_limit_x96,
    };
    let result = compute_swap(env, &config, &state, &params)?;

    settle_swap(
        env,
        &config,
        sender,
        recipient,
        result.amount0,
        result.amount1,
        data,
    )?;

    // Commit
    state.sqrt_price_x96 = result.sqrt_price_x96.clone();
    state.tick = result.tick;
    state.liquidity = result.liquidity;
    set_state(env, &state);

    log!(env, "swap", result.amount0, result.amount1, result.ticks_crossed);
    publish_swap(
        env,
        sender,
        recipient,
        result.amount0,
        result.amount1,
        &result.sqrt_price_x96,
        result.liquidity,
        result.tick,
    );

    Ok((result.amount0, result.amount1))
}

/// Walk the price across initialized ticks until the amount is used up,
/// the price limit is reached, or the crossing cap is hit.
///
/// Reads ticks and the bitmap but never writes.
pub fn compute_swap(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    params: &SwapParams,
) -> Result<SwapComputation, PoolError> {
    let zero_for_one = params.zero_for_one;
    let exact_input = params.amount_specified > 0;
    let sqrt_price_limit = &params.sqrt_price_limit_x96;

    let mut amount_remaining = params.amount_specified;
    let mut amount_calculated: i128 = 0;
    let mut sqrt_price_x96 = state.sqrt_price_x96.clone();
    let mut tick = state.tick;
    let mut liquidity = state.liquidity;

    // Track tick crossings to stay within Soroban's entry limits
    let mut ticks_crossed: u32 = 0;

    while amount_remaining != 0
        && sqrt_price_x96 != *sqrt_price_limit
        && ticks_crossed < MAX_TICK_CROSSINGS_PER_SWAP
    {
        let sqrt_price_start_x96 = sqrt_price_x96.clone();

        // Find next initialized tick
        let (tick_next, initialized) =
            next_initialized_tick_within_one_word(env, tick, config.tick_spacing, zero_for_one);
        let tick_next = tick_next.clamp(MIN_TICK, MAX_TICK);

        let sqrt_price_next_x96 = get_sqrt_ratio_at_tick(env, tick_next);

        // Stop at the limit if it comes before the next tick
        let sqrt_ratio_target_x96 = if zero_for_one {
            if sqrt_price_next_x96 < *sqrt_price_limit {
                sqrt_price_limit.clone()
            } else {
                sqrt_price_next_x96.clone()
            }
        } else if sqrt_price_next_x96 > *sqrt_price_limit {
            sqrt_price_limit.clone()
        } else {
            sqrt_price_next_x96.clone()
        };

        let step = compute_swap_step(
            env,
            &sqrt_price_x96,
            &sqrt_ratio_target_x96,
            liquidity,
            amount_remaining,
        )
        .ok_or(PoolError::AmountOverflow)?;

        let amount_in = to_i128(step.amount_in)?;
        let amount_out = to_i128(step.amount_out)?;

        if exact_input {
            amount_remaining -= amount_in;
            amount_calculated = amount_calculated
                .checked_sub(amount_out)
                .ok_or(PoolError::AmountOverflow)?;
        } else {
            amount_remaining += amount_out;
            amount_calculated = amount_calculated
                .checked_add(amount_in)
                .ok_or(PoolError::AmountOverflow)?;
        }

        sqrt_price_x96 = step.sqrt_ratio_next_x96;

        if sqrt_price_x96 == sqrt_price_next_x96 {
            // Reached the next tick
            if initialized {
                let liquidity_net = cross(env, tick_next);
                let liquidity_net = if zero_for_one {
                    -liquidity_net
                } else {
                    liquidity_net
                };
                liquidity = add_delta(liquidity, liquidity_net);
                ticks_crossed += 1;
            }

            tick = if zero_for_one {
                tick_next - 1
            } else {
                tick_next
            };
        } else if sqrt_price_x96 != sqrt_price_start_x96 {
            // Moved within the range without reaching the next tick
            tick = get_tick_at_sqrt_ratio(env, &sqrt_price_x96);
        }
    }

    let (amount0, amount1) = if zero_for_one == exact_input {
        (params.amount_specified - amount_remaining, amount_calculated)
    } else {
        (amount_calculated, params.amount_specified - amount_remaining)
    };

    debug_assert!(swap_direction_consistent(zero_for_one, &state.sqrt_price_x96, &sqrt_price_x96));
    debug_assert!(swap_respects_limit(zero_for_one, &sqrt_price_x96, sqrt_price_limit));
    debug_assert!(swap_amounts_opposite_signs(amount0, amount1));
    debug_assert!(tick_crossings_bounded(ticks_crossed, MAX_TICK_CROSSINGS_PER_SWAP));

    Ok(SwapComputation {
        amount0,
        amount1,
        sqrt_price_x96,
        tick,
        liquidity,
        ticks_crossed,
    })
}
