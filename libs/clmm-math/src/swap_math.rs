use crate::sqrt_price_math::{
    get_amount0_delta, get_amount1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use crate::full_math::u256;
use soroban_sdk::{Env, U256};

/// Result of a single swap step computation
#[derive(Clone, Debug)]
pub struct SwapStepResult {
    /// The sqrt price after this step
    pub sqrt_ratio_next_x96: U256,
    /// Amount of input token consumed
    pub amount_in: u128,
    /// Amount of output token produced
    pub amount_out: u128,
}

/// Compute the result of swapping within a single liquidity range
///
/// # Arguments
/// * `sqrt_ratio_current_x96` - Current sqrt price
/// * `sqrt_ratio_target_x96` - Target sqrt price (next tick boundary or price limit)
/// * `liquidity` - Active liquidity in this range
/// * `amount_remaining` - Remaining amount to swap (positive = exact input, negative = exact output)
///
/// Input amounts round up and output amounts round down. When an exact input
/// step stops short of the target the whole remainder is charged as input,
/// so rounding dust stays with the pool.
///
/// The amount needed to reach the target is compared at full width; only
/// the amounts actually traded must fit u128. Returns `None` if one doesn't.
pub fn compute_swap_step(
    env: &Env,
    sqrt_ratio_current_x96: &U256,
    sqrt_ratio_target_x96: &U256,
    liquidity: u128,
    amount_remaining: i128,
) -> Option<SwapStepResult> {
    let zero_for_one = sqrt_ratio_current_x96 >= sqrt_ratio_target_x96;
    let exact_in = amount_remaining >= 0;
    let amount_remaining_abs = amount_remaining.unsigned_abs();
    let amount_remaining_256 = u256(env, amount_remaining_abs);

    let sqrt_ratio_next_x96: U256;
    let mut amount_in = u256(env, 0);
    let mut amount_out = u256(env, 0);

    if exact_in {
        // Input needed to reach the target
        amount_in = if zero_for_one {
            get_amount0_delta(env, sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, true)
        } else {
            get_amount1_delta(env, sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, true)
        };

        sqrt_ratio_next_x96 = if amount_remaining_256 >= amount_in {
            sqrt_ratio_target_x96.clone()
        } else {
            get_next_sqrt_price_from_input(
                env,
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_abs,
                zero_for_one,
            )
        };
    } else {
        // Output available before the target
        amount_out = if zero_for_one {
            get_amount1_delta(env, sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, false)
        } else {
            get_amount0_delta(env, sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, false)
        };

        sqrt_ratio_next_x96 = if amount_remaining_256 >= amount_out {
            sqrt_ratio_target_x96.clone()
        } else {
            get_next_sqrt_price_from_output(
                env,
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_abs,
                zero_for_one,
            )
        };
    }

    let max = *sqrt_ratio_target_x96 == sqrt_ratio_next_x96;

    if zero_for_one {
        if !max || !exact_in {
            amount_in = get_amount0_delta(
                env,
                &sqrt_ratio_next_x96,
                sqrt_ratio_current_x96,
                liquidity,
                true,
            );
        }
        if !max || exact_in {
            amount_out = get_amount1_delta(
                env,
                &sqrt_ratio_next_x96,
                sqrt_ratio_current_x96,
                liquidity,
                false,
            );
        }
    } else {
        if !max || !exact_in {
            amount_in = get_amount1_delta(
                env,
                sqrt_ratio_current_x96,
                &sqrt_ratio_next_x96,
                liquidity,
                true,
            );
        }
        if !max || exact_in {
            amount_out = get_amount0_delta(
                env,
                sqrt_ratio_current_x96,
                &sqrt_ratio_next_x96,
                liquidity,
                false,
            );
        }
    }

    // Cap output at remaining for exact output swaps
    if !exact_in && amount_out > amount_remaining_256 {
        amount_out = amount_remaining_256.clone();
    }

    if exact_in && !max {
        amount_in = amount_remaining_256;
    }

    Some(SwapStepResult {
        sqrt_ratio_next_x96,
        amount_in: amount_in.to_u128()?,
        amount_out: amount_out.to_u128()?,
    })
}
