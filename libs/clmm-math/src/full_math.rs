use clmm_types::Q96;
use soroban_sdk::{Env, U256};

/// Shorthand for lifting a u128 into a U256
pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

/// 2^96 as U256
pub fn q96(env: &Env) -> U256 {
    U256::from_u128(env, Q96)
}

/// 2^128 as U256
pub fn q128(env: &Env) -> U256 {
    U256::from_u128(env, 1u128 << 64).mul(&U256::from_u128(env, 1u128 << 64))
}

/// 2^256 - 1
pub fn u256_max(env: &Env) -> U256 {
    let high = U256::from_u128(env, u128::MAX);
    high.mul(&q128(env)).add(&U256::from_u128(env, u128::MAX))
}

pub fn is_zero(value: &U256) -> bool {
    value.to_u128() == Some(0)
}

/// Multiply and divide (rounds down). The product must fit in 256 bits.
/// Returns (a * b) / denominator
pub fn mul_div(a: &U256, b: &U256, denominator: &U256) -> U256 {
    if is_zero(denominator) {
        panic!("Division by zero");
    }
    a.mul(b).div(denominator)
}

/// Multiply and divide (rounds up). The product must fit in 256 bits.
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: &U256, b: &U256, denominator: &U256) -> U256 {
    if is_zero(denominator) {
        panic!("Division by zero");
    }
    let product = a.mul(b);
    let result = product.div(denominator);
    if is_zero(&product.rem_euclid(denominator)) {
        result
    } else {
        result.add(&U256::from_u32(env, 1))
    }
}

/// Unsigned division with rounding up
pub fn div_rounding_up(env: &Env, a: &U256, b: &U256) -> U256 {
    if is_zero(b) {
        panic!("Division by zero");
    }
    let quotient = a.div(b);
    if is_zero(&a.rem_euclid(b)) {
        quotient
    } else {
        quotient.add(&U256::from_u32(env, 1))
    }
}

/// Convert U256 to u128, panics if overflow
pub fn to_u128(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("U256 overflow when converting to u128"),
    }
}
