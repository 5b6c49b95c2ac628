//! Property-based tests for the price and amount math.

use proptest::prelude::*;
use soroban_sdk::Env;

use crate::full_math::u256;
use crate::liquidity_math::get_amounts_for_liquidity;
use crate::sqrt_price_math::{get_amount0_delta, get_amount1_delta};
use crate::swap_math::compute_swap_step;
use crate::tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio};
use clmm_types::{MAX_TICK, MIN_TICK};

fn tick_strategy() -> impl Strategy<Value = i32> {
    MIN_TICK..MAX_TICK
}

fn narrow_tick_strategy() -> impl Strategy<Value = i32> {
    -100_000i32..=100_000i32
}

fn liquidity_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000u128
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_tick_round_trip(tick in tick_strategy()) {
        let env = Env::default();
        let sqrt = get_sqrt_ratio_at_tick(&env, tick);
        prop_assert_eq!(get_tick_at_sqrt_ratio(&env, &sqrt), tick);
    }

    #[test]
    fn prop_sqrt_ratio_strictly_increasing(tick in tick_strategy()) {
        let env = Env::default();
        let here = get_sqrt_ratio_at_tick(&env, tick);
        let next = get_sqrt_ratio_at_tick(&env, tick + 1);
        prop_assert!(here < next);
        // Any price inside [here, next) maps back to `tick`
        prop_assert_eq!(get_tick_at_sqrt_ratio(&env, &next.sub(&u256(&env, 1))), tick);
    }

    #[test]
    fn prop_amount_rounding_brackets(
        a in narrow_tick_strategy(),
        b in narrow_tick_strategy(),
        liquidity in liquidity_strategy(),
    ) {
        let env = Env::default();
        let sqrt_a = get_sqrt_ratio_at_tick(&env, a);
        let sqrt_b = get_sqrt_ratio_at_tick(&env, b);

        let up0 = get_amount0_delta(&env, &sqrt_a, &sqrt_b, liquidity, true);
        let down0 = get_amount0_delta(&env, &sqrt_a, &sqrt_b, liquidity, false);
        prop_assert!(up0 >= down0 && up0.sub(&down0) <= u256(&env, 2));

        let up1 = get_amount1_delta(&env, &sqrt_a, &sqrt_b, liquidity, true);
        let down1 = get_amount1_delta(&env, &sqrt_a, &sqrt_b, liquidity, false);
        prop_assert!(up1 >= down1 && up1.sub(&down1) <= u256(&env, 1));
    }

    #[test]
    fn prop_amounts_for_liquidity_trichotomy(
        current in narrow_tick_strategy(),
        lower in narrow_tick_strategy(),
        width in 1i32..=20_000,
        liquidity in liquidity_strategy(),
    ) {
        let env = Env::default();
        let upper = lower + width;
        let price = get_sqrt_ratio_at_tick(&env, current);
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, lower);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, upper);

        let (amount0, amount1) =
            get_amounts_for_liquidity(&env, &price, &sqrt_lower, &sqrt_upper, liquidity, true).unwrap();

        if current < lower {
            prop_assert_eq!(amount1, 0);
        } else if current >= upper {
            prop_assert_eq!(amount0, 0);
        }
    }

    #[test]
    fn prop_swap_step_stays_between_current_and_target(
        current in narrow_tick_strategy(),
        distance in 1i32..=5_000,
        zero_for_one in any::<bool>(),
        liquidity in liquidity_strategy(),
        amount in 1i128..=1_000_000_000_000_000_000i128,
        exact_in in any::<bool>(),
    ) {
        let env = Env::default();
        let target_tick = if zero_for_one { current - distance } else { current + distance };
        let sqrt_current = get_sqrt_ratio_at_tick(&env, current);
        let sqrt_target = get_sqrt_ratio_at_tick(&env, target_tick);
        let amount_remaining = if exact_in { amount } else { -amount };

        let step =
            compute_swap_step(&env, &sqrt_current, &sqrt_target, liquidity, amount_remaining)
                .unwrap();

        if zero_for_one {
            prop_assert!(step.sqrt_ratio_next_x96 <= sqrt_current);
            prop_assert!(step.sqrt_ratio_next_x96 >= sqrt_target);
        } else {
            prop_assert!(step.sqrt_ratio_next_x96 >= sqrt_current);
            prop_assert!(step.sqrt_ratio_next_x96 <= sqrt_target);
        }

        if exact_in {
            prop_assert!(step.amount_in <= amount as u128);
        } else {
            prop_assert!(step.amount_out <= amount as u128);
        }
    }
}
