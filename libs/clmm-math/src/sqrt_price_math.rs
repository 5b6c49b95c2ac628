use crate::full_math::{div_rounding_up, is_zero, mul_div, mul_div_rounding_up, q96, u256};
use soroban_sdk::{Env, U256};

fn sort_ratios<'a>(a: &'a U256, b: &'a U256) -> (&'a U256, &'a U256) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Calculate amount0 delta for a price move from sqrt_ratio_a to sqrt_ratio_b
/// delta_x = L * 2^96 / sqrt_pa - L * 2^96 / sqrt_pb
///
/// The two quotients are rounded in opposite directions so the result is
/// never below the exact value when `round_up` and never above it otherwise.
/// Every intermediate stays under 2^224, since `U256` has no 512-bit product
/// for the single `mulDiv(L << 96, diff, sqrt_pb) / sqrt_pa` form. The price
/// doesn't divide `L << 96` exactly in general, so the result can sit one
/// unit further from the exact value than the single-division form would
/// (one unit above it when rounding up, one below when rounding down).
///
/// Returned at full width: the amount to cross a whole range can exceed
/// u128 even when a trade within it is small.
pub fn get_amount0_delta(
    env: &Env,
    sqrt_ratio_a_x96: &U256,
    sqrt_ratio_b_x96: &U256,
    liquidity: u128,
    round_up: bool,
) -> U256 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if is_zero(sqrt_ratio_lower) {
        panic!("sqrt_ratio_lower cannot be zero");
    }
    if sqrt_ratio_lower == sqrt_ratio_upper || liquidity == 0 {
        return u256(env, 0);
    }

    let numerator = u256(env, liquidity).mul(&q96(env));

    if round_up {
        let at_lower = div_rounding_up(env, &numerator, sqrt_ratio_lower);
        let at_upper = numerator.div(sqrt_ratio_upper);
        at_lower.sub(&at_upper)
    } else {
        let at_lower = numerator.div(sqrt_ratio_lower);
        let at_upper = div_rounding_up(env, &numerator, sqrt_ratio_upper);
        if at_lower > at_upper {
            at_lower.sub(&at_upper)
        } else {
            u256(env, 0)
        }
    }
}

/// Calculate amount1 delta for a price move from sqrt_ratio_a to sqrt_ratio_b
/// delta_y = L * (sqrt_pb - sqrt_pa) / 2^96
///
/// The price difference is split at 2^96 so `L * diff` never needs more
/// than 256 bits. Full width, like `get_amount0_delta`.
pub fn get_amount1_delta(
    env: &Env,
    sqrt_ratio_a_x96: &U256,
    sqrt_ratio_b_x96: &U256,
    liquidity: u128,
    round_up: bool,
) -> U256 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let q96 = q96(env);
    let diff = sqrt_ratio_upper.sub(sqrt_ratio_lower);
    let diff_high = diff.div(&q96);
    let diff_low = diff.rem_euclid(&q96);

    let liquidity_256 = u256(env, liquidity);
    let whole = liquidity_256.mul(&diff_high);
    let fractional = if round_up {
        mul_div_rounding_up(env, &liquidity_256, &diff_low, &q96)
    } else {
        mul_div(&liquidity_256, &diff_low, &q96)
    };

    whole.add(&fractional)
}

/// Get next sqrt price from an input amount of token0 or token1
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> U256 {
    if is_zero(sqrt_price_x96) || liquidity == 0 {
        panic!("Invalid inputs");
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Get next sqrt price from an output amount
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> U256 {
    if is_zero(sqrt_price_x96) || liquidity == 0 {
        panic!("Invalid inputs");
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price_x96, liquidity, amount_out, false)
    }
}

/// Calculate next sqrt price given a token0 amount
/// sqrt_price_next = L * 2^96 / (L * 2^96 / sqrt_price + amount)  [if add]
/// sqrt_price_next = L * 2^96 / (L * 2^96 / sqrt_price - amount)  [if remove]
fn get_next_sqrt_price_from_amount0_rounding_up(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> U256 {
    if amount == 0 {
        return sqrt_price_x96.clone();
    }

    let numerator1 = u256(env, liquidity).mul(&q96(env));
    // Flooring here rounds the final price up in both branches
    let virtual_reserve0 = numerator1.div(sqrt_price_x96);
    let amount_256 = u256(env, amount);

    if add {
        div_rounding_up(env, &numerator1, &virtual_reserve0.add(&amount_256))
    } else {
        if virtual_reserve0 <= amount_256 {
            panic!("Denominator underflow");
        }
        div_rounding_up(env, &numerator1, &virtual_reserve0.sub(&amount_256))
    }
}

/// Calculate next sqrt price given a token1 amount
/// sqrt_price_next = sqrt_price + amount * 2^96 / L  [if add]
/// sqrt_price_next = sqrt_price - amount * 2^96 / L  [if remove]
fn get_next_sqrt_price_from_amount1_rounding_down(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> U256 {
    let amount_256 = u256(env, amount);
    let liquidity_256 = u256(env, liquidity);

    if add {
        let quotient = mul_div(&amount_256, &q96(env), &liquidity_256);
        sqrt_price_x96.add(&quotient)
    } else {
        let quotient = mul_div_rounding_up(env, &amount_256, &q96(env), &liquidity_256);
        if *sqrt_price_x96 <= quotient {
            panic!("sqrt_price underflow");
        }
        sqrt_price_x96.sub(&quotient)
    }
}
