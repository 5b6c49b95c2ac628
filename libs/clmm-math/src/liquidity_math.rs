use crate::sqrt_price_math::{get_amount0_delta, get_amount1_delta};
use soroban_sdk::{Env, U256};

/// Get token amounts represented by `liquidity` over a price range.
///
/// Price at or below the range: only token0. Price at or above the range:
/// only token1. Inside the range: token0 for the part above the current
/// price and token1 for the part below it.
///
/// Returns `None` if either amount does not fit u128.
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_ratio_x96: &U256,
    sqrt_ratio_a_x96: &U256,
    sqrt_ratio_b_x96: &U256,
    liquidity: u128,
    round_up: bool,
) -> Option<(u128, u128)> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    };

    let (amount0, amount1) = if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Below range - all token0
        let amount0 =
            get_amount0_delta(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity, round_up);
        (amount0, U256::from_u32(env, 0))
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // In range - both tokens
        let amount0 = get_amount0_delta(env, sqrt_ratio_x96, sqrt_ratio_upper, liquidity, round_up);
        let amount1 = get_amount1_delta(env, sqrt_ratio_lower, sqrt_ratio_x96, liquidity, round_up);
        (amount0, amount1)
    } else {
        // Above range - all token1
        let amount1 =
            get_amount1_delta(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity, round_up);
        (U256::from_u32(env, 0), amount1)
    };

    Some((amount0.to_u128()?, amount1.to_u128()?))
}

/// Add signed liquidity delta to unsigned liquidity
pub fn add_delta(liquidity: u128, delta: i128) -> u128 {
    if delta < 0 {
        let abs_delta = delta.unsigned_abs();
        if liquidity < abs_delta {
            panic!("Liquidity underflow");
        }
        liquidity - abs_delta
    } else {
        match liquidity.checked_add(delta as u128) {
            Some(result) => result,
            None => panic!("Liquidity overflow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::full_math::u256;
    use crate::tick_math::get_sqrt_ratio_at_tick;
    use clmm_types::Q96;
    use soroban_sdk::Env;

    // === add_delta tests ===

    #[test]
    fn test_add_delta_positive() {
        assert_eq!(add_delta(100, 50), 150);
    }

    #[test]
    fn test_add_delta_negative() {
        assert_eq!(add_delta(100, -50), 50);
    }

    #[test]
    fn test_add_delta_to_zero() {
        assert_eq!(add_delta(100, -100), 0);
    }

    #[test]
    fn test_add_delta_min_i128() {
        assert_eq!(add_delta(u128::MAX, i128::MIN), u128::MAX - (1u128 << 127));
    }

    #[test]
    #[should_panic(expected = "Liquidity underflow")]
    fn test_add_delta_underflow() {
        add_delta(50, -100);
    }

    #[test]
    #[should_panic(expected = "Liquidity overflow")]
    fn test_add_delta_overflow() {
        add_delta(u128::MAX, 1);
    }

    // === get_amounts_for_liquidity tests ===

    #[test]
    fn test_get_amounts_for_liquidity_in_range() {
        let env = Env::default();
        let sqrt_price = u256(&env, Q96);
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, -200);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, 200);

        let (amount0, amount1) =
            get_amounts_for_liquidity(&env, &sqrt_price, &sqrt_lower, &sqrt_upper, 1000, true).unwrap();
        assert_eq!(amount0, 10);
        assert_eq!(amount1, 10);
    }

    #[test]
    fn test_get_amounts_for_liquidity_below_range() {
        let env = Env::default();
        let sqrt_price = u256(&env, Q96);
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, 100);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, 200);

        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            1_000_000_000,
            true,
        ).unwrap();
        assert!(amount0 > 0);
        assert_eq!(amount1, 0);
    }

    #[test]
    fn test_get_amounts_for_liquidity_above_range() {
        let env = Env::default();
        let sqrt_price = u256(&env, Q96);
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, -200);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, -100);

        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            1_000_000_000,
            true,
        ).unwrap();
        assert_eq!(amount0, 0);
        assert!(amount1 > 0);
    }

    #[test]
    fn test_get_amounts_for_liquidity_at_lower_boundary() {
        let env = Env::default();
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, 0);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, 100);

        let (amount0, amount1) =
            get_amounts_for_liquidity(&env, &sqrt_lower, &sqrt_lower, &sqrt_upper, 1_000_000, true).unwrap();
        assert!(amount0 > 0);
        assert_eq!(amount1, 0);
    }

    #[test]
    fn test_get_amounts_for_liquidity_eth_usdc_range() {
        let env = Env::default();
        // Current price 5000, range [4545, 5500]
        let sqrt_price = u256(&env, 5602277097478614198912276234240);
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, 84222);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, 86129);
        let liquidity = 1517882343751509868544u128;

        let (amount0, amount1) =
            get_amounts_for_liquidity(&env, &sqrt_price, &sqrt_lower, &sqrt_upper, liquidity, true).unwrap();
        // ~0.9986 of token0 and ~5000.21 of token1 (18 decimals)
        assert!(amount0 > 998_000_000_000_000_000 && amount0 < 999_000_000_000_000_000);
        assert!(amount1 > 5_000_000_000_000_000_000_000 && amount1 < 5_001_000_000_000_000_000_000);
    }

    #[test]
    fn test_get_amounts_for_liquidity_beyond_u128() {
        let env = Env::default();
        // Above the range at a high price: ~1.0e41 token1
        let sqrt_price = get_sqrt_ratio_at_tick(&env, 400_400);
        let sqrt_lower = get_sqrt_ratio_at_tick(&env, 400_000);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, 400_200);

        let amounts =
            get_amounts_for_liquidity(&env, &sqrt_price, &sqrt_lower, &sqrt_upper, 1u128 << 114, true);
        assert_eq!(amounts, None);

        // Same range from below only needs token0
        let sqrt_price = get_sqrt_ratio_at_tick(&env, 400_000);
        let amounts =
            get_amounts_for_liquidity(&env, &sqrt_price, &sqrt_lower, &sqrt_upper, 1u128 << 113, true);
        assert_eq!(amounts, Some((213_178_238_458_562_295_262_035, 0)));
    }
}
