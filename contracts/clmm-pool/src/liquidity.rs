use crate::error::PoolError;
use crate::events::publish_mint;
use crate::invariants::{range_contains_tick, tick_on_spacing, tick_range_in_bounds, tick_range_valid};
use crate::position::{add_liquidity, get_or_create, store};
use crate::settlement::settle_mint;
use crate::storage::{get_config, get_state, get_tick, set_state, set_tick};
use crate::tick::{flip_tick, update as update_tick};
use clmm_math::{get_amounts_for_liquidity, get_sqrt_ratio_at_tick};
use clmm_types::PositionKey;
use soroban_sdk::{log, Address, Bytes, Env};

/// Mint (add) liquidity to a position
///
/// Tick, position and price-state changes are staged in memory, the sender
/// settles through its callback, and only then is anything written.
pub fn mint(
    env: &Env,
    sender: &Address,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: u128,
    data: &Bytes,
) -> Result<(u128, u128), PoolError> {
    let config = get_config(env);

    validate_ticks(tick_lower, tick_upper, config.tick_spacing)?;
    if amount == 0 {
        return Err(PoolError::ZeroLiquidity);
    }

    let mut state = get_state(env);
    let liquidity_delta = i128::try_from(amount).map_err(|_| PoolError::LiquidityOverflow)?;

    // Stage tick updates
    let mut lower = get_tick(env, tick_lower);
    let mut upper = get_tick(env, tick_upper);
    let flipped_lower = update_tick(
        &mut lower,
        liquidity_delta,
        false, // lower tick
        config.max_liquidity_per_tick,
    )?;
    let flipped_upper = update_tick(
        &mut upper,
        liquidity_delta,
        true, // upper tick
        config.max_liquidity_per_tick,
    )?;

    // Stage position
    let position_key = PositionKey::new(owner.clone(), tick_lower, tick_upper);
    let mut position = get_or_create(env, &position_key);
    add_liquidity(&mut position, amount)?;

    // Stage active liquidity if the range contains the current tick
    let in_range = range_contains_tick(tick_lower, tick_upper, state.tick);
    if in_range {
        state.liquidity = state
            .liquidity
            .checked_add(amount)
            .ok_or(PoolError::LiquidityOverflow)?;
    }

    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(env, tick_lower);
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(env, tick_upper);
    let (amount0, amount1) = get_amounts_for_liquidity(
        env,
        &state.sqrt_price_x96,
        &sqrt_ratio_lower,
        &sqrt_ratio_upper,
        amount,
        true,
    )
    .ok_or(PoolError::AmountOverflow)?;

    settle_mint(env, &config, sender, amount0, amount1, data)?;

    // Commit
    set_tick(env, tick_lower, &lower);
    set_tick(env, tick_upper, &upper);
    if flipped_lower {
        flip_tick(env, tick_lower, config.tick_spacing);
    }
    if flipped_upper {
        flip_tick(env, tick_upper, config.tick_spacing);
    }
    store(env, &position_key, &position);
    if in_range {
        set_state(env, &state);
    }

    log!(env, "mint", amount, amount0, amount1);
    publish_mint(env, sender, owner, tick_lower, tick_upper, amount, amount0, amount1);

    Ok((amount0, amount1))
}

fn validate_ticks(tick_lower: i32, tick_upper: i32, tick_spacing: i32) -> Result<(), PoolError> {
    if !tick_range_valid(tick_lower, tick_upper)
        || !tick_range_in_bounds(tick_lower, tick_upper)
        || !tick_on_spacing(tick_lower, tick_spacing)
        || !tick_on_spacing(tick_upper, tick_spacing)
    {
        return Err(PoolError::InvalidTickRange);
    }
    Ok(())
}
